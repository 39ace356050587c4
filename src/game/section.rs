use crate::game::board::BoardList;
use crate::game::bytes::Cursor;
use crate::game::decode::DecodeContext;
use crate::game::layout::{RecordKind, STRAT_TIERS};
use crate::game::movement::{Movement, MovementShape};
use crate::game::pair::{Direction, PairList};
use crate::game::scalar::{PackedDateTime, Ptr};
use crate::game::{GameError, Result};

/// Per-section entry in the master table.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SectionSummary {
	/// Owning event slot, 1-based.
	pub event: u8,
	/// Section letters.
	pub name: String,
	/// Section details pointer. The slot is in use when this is set.
	pub details: Ptr,
	/// Board index pointer.
	pub board_index: Ptr,
	/// Total masterpoint score.
	pub total_mps: f64,
	/// Scoring status code.
	pub status: u8,
	/// Rounds posted so far.
	pub rounds_posted: u8,
	/// Total rounds.
	pub rounds_total: u8,
	/// Flag bits.
	pub flags: u8,
}

impl SectionSummary {
	/// Parse a summary entry at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			event: cursor.read_u8()?,
			name: cursor.read_pstring(2)?,
			details: cursor.read_ptr()?,
			board_index: cursor.read_ptr()?,
			total_mps: cursor.read_hundredths_i32()?,
			status: cursor.read_u8()?,
			rounds_posted: cursor.read_u8()?,
			rounds_total: cursor.read_u8()?,
			flags: cursor.read_u8()?,
		})
	}

	/// Return whether this slot describes a section.
	pub fn is_used(&self) -> bool {
		!self.details.is_null()
	}
}

/// Rank depths, entrant counts and qualification depths for one strat, by seat (NS, EW, S, W).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SectionStrat {
	/// Ranks awarded per seat.
	pub rank_depth: [u8; 4],
	/// Entrants per seat.
	pub entrants: [u16; 4],
	/// Qualifying ranks per seat.
	pub qualification_depth: [u8; 4],
}

impl SectionStrat {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 16;

	/// Parse a section strat at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			rank_depth: cursor.read_array()?,
			entrants: cursor.parse_fixed(Cursor::read_u16_le)?,
			qualification_depth: cursor.read_array()?,
		})
	}
}

/// Section configuration record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SectionDetails {
	/// Section number.
	pub number: u8,
	/// NS pair index pointer.
	pub ns_pairs: Ptr,
	/// EW pair index pointer.
	pub ew_pairs: Ptr,
	/// South individual index pointer.
	pub south_players: Ptr,
	/// West individual index pointer.
	pub west_players: Ptr,
	/// Movement is a Howell.
	pub howell: bool,
	/// Boards in play.
	pub boards_in_play: u8,
	/// Highest pair number.
	pub highest_pair: u8,
	/// Boards per round.
	pub boards_per_round: u8,
	/// Top on a board.
	pub top: f64,
	/// Bye stand table.
	pub bye_stand: u8,
	/// Rover mode.
	pub rover: u8,
	/// Table holding board 1.
	pub board_one_table: u8,
	/// EW skip round.
	pub skip_round: u8,
	/// Names entered code.
	pub names_entered: u8,
	/// Carry-over scores are in use.
	pub carry_over: bool,
	/// Maximum boards.
	pub max_boards: u8,
	/// Board factor.
	pub board_factor: f64,
	/// Score-adjust average.
	pub score_adjust_average: f64,
	/// Scores are factored.
	pub factored: bool,
	/// Posting method code.
	pub posting_method: u8,
	/// Scores are posted.
	pub posted: bool,
	/// Number of rounds.
	pub rounds: u8,
	/// Movement name.
	pub movement_name: String,
	/// Phantom pair number.
	pub phantom: u8,
	/// Colour index.
	pub color_index: u8,
	/// Players added to the database.
	pub database_adds: u16,
	/// Barometer scoring.
	pub barometer: bool,
	/// Number of tables.
	pub tables: u8,
	/// Total masterpoints awarded.
	pub total_mps: f64,
	/// Colour name.
	pub color_name: String,
	/// Round the posting method changes.
	pub posting_change_round: u8,
	/// Web movement flag.
	pub web_movement: u8,
	/// Maximum plays per board.
	pub max_plays: u8,
	/// Outside adjustments applied.
	pub outside_adjustments: bool,
	/// Posting sequence code.
	pub posting_sequence: u8,
	/// Rover start table.
	pub rover_start: u8,
	/// Per-strat depths and counts.
	pub strats: [SectionStrat; STRAT_TIERS],
	/// Match award masterpoints.
	pub match_award: f64,
	/// Victory point scale.
	pub vp_scale: u8,
	/// Last modification time.
	pub modification_time: PackedDateTime,
	/// Board-a-match movement.
	pub bam: bool,
	/// Score version that wrote the section.
	pub score_version: f64,
	/// Second phantom player.
	pub phantom_two: u8,
	/// Third phantom player.
	pub phantom_three: u8,
	/// Scored by hand.
	pub manual_scoring: bool,
	/// Pair map pointer.
	pub pair_map: Ptr,
	/// Club number.
	pub club_number: String,
	/// Pairs eligible for each strat.
	pub eligible_strat_pairs: [u16; STRAT_TIERS],
	/// Section memo pointer.
	pub memo: Ptr,
	/// Team match index pointer.
	pub team_matches: Ptr,
	/// Movement table pointer.
	pub movement: Ptr,
}

impl SectionDetails {
	/// Decode the section details record a pointer refers to.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Option<Self>> {
		let Some(mut record) = ctx.record(ptr, RecordKind::SectionDetails)? else {
			return Ok(None);
		};
		let c = record.cursor();
		let details = Self {
			number: c.read_u8()?,
			ns_pairs: c.read_ptr()?,
			ew_pairs: c.read_ptr()?,
			south_players: c.read_ptr()?,
			west_players: c.read_ptr()?,
			howell: c.read_bool()?,
			boards_in_play: c.read_u8()?,
			highest_pair: c.read_u8()?,
			boards_per_round: c.read_u8()?,
			top: c.read_tenths_i16()?,
			bye_stand: c.read_u8()?,
			rover: c.read_u8()?,
			board_one_table: c.read_u8()?,
			skip_round: c.read_u8()?,
			names_entered: c.read_u8()?,
			carry_over: c.read_bool()?,
			max_boards: c.read_u8()?,
			board_factor: c.read_hundredths_i16()?,
			score_adjust_average: c.read_hundredths_i16()?,
			factored: c.read_bool()?,
			posting_method: c.read_u8()?,
			posted: c.read_bool()?,
			rounds: c.read_u8()?,
			movement_name: c.read_pstring(25)?,
			phantom: c.read_u8()?,
			color_index: c.read_u8()?,
			database_adds: c.read_u16_le()?,
			barometer: c.read_bool()?,
			tables: c.read_u8()?,
			total_mps: c.read_hundredths_i32()?,
			color_name: c.read_pstring(20)?,
			posting_change_round: c.read_u8()?,
			web_movement: c.read_u8()?,
			max_plays: c.read_u8()?,
			outside_adjustments: c.read_bool()?,
			posting_sequence: c.read_u8()?,
			rover_start: c.read_u8()?,
			strats: c.parse_fixed(SectionStrat::parse)?,
			match_award: c.read_hundredths_i16()?,
			vp_scale: c.read_u8()?,
			modification_time: c.read_datetime()?,
			bam: c.read_bool()?,
			score_version: c.read_hundredths_i16()?,
			phantom_two: c.read_u8()?,
			phantom_three: c.read_u8()?,
			manual_scoring: c.read_bool()?,
			pair_map: c.read_ptr()?,
			club_number: c.read_pstring(6)?,
			eligible_strat_pairs: c.parse_fixed(Cursor::read_u16_le)?,
			memo: c.read_ptr()?,
			team_matches: c.read_ptr()?,
			movement: c.read_ptr()?,
		};
		record.finish()?;
		Ok(Some(details))
	}

	/// Select the entry layout from which index pointers are set.
	pub fn entry_shape(&self) -> EntryShape {
		if !self.south_players.is_null() {
			EntryShape::Individual {
				south: self.south_players,
				west: self.west_players,
			}
		} else if !self.ew_pairs.is_null() {
			EntryShape::Pairs {
				north_south: self.ns_pairs,
				east_west: self.ew_pairs,
			}
		} else {
			EntryShape::Teams {
				team_matches: self.team_matches,
			}
		}
	}

	/// Select the movement layout from the movement pointer and howell flag.
	pub fn movement_shape(&self) -> MovementShape {
		MovementShape::select(self.movement, self.howell)
	}
}

/// Entry layout of a section, chosen from its index pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryShape {
	/// Pair game.
	Pairs {
		/// NS pair index.
		north_south: Ptr,
		/// EW pair index.
		east_west: Ptr,
	},
	/// Individual game.
	Individual {
		/// South player index.
		south: Ptr,
		/// West player index.
		west: Ptr,
	},
	/// Team game.
	Teams {
		/// Team match index.
		team_matches: Ptr,
	},
}

/// Decoded entries of a section.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionEntries {
	/// Pair game rosters.
	Pairs {
		/// North-South pairs.
		north_south: PairList,
		/// East-West pairs.
		east_west: PairList,
	},
}

impl SectionEntries {
	/// Decode the entries a shape selects. Only pair games are decoded.
	pub fn read(ctx: &DecodeContext<'_>, shape: EntryShape) -> Result<Self> {
		match shape {
			EntryShape::Pairs { north_south, east_west } => Ok(Self::Pairs {
				north_south: PairList::read_at(ctx, north_south, Direction::NorthSouth)?,
				east_west: PairList::read_at(ctx, east_west, Direction::EastWest)?,
			}),
			EntryShape::Individual { .. } => Err(GameError::Unsupported {
				feature: "individual-play section",
			}),
			EntryShape::Teams { .. } => Err(GameError::Unsupported {
				feature: "team-play section",
			}),
		}
	}

	/// Pair list for one direction.
	pub fn pairs(&self, direction: Direction) -> &PairList {
		match (self, direction) {
			(Self::Pairs { north_south, .. }, Direction::NorthSouth) => north_south,
			(Self::Pairs { east_west, .. }, Direction::EastWest) => east_west,
		}
	}

	/// Total pairs across both directions.
	pub fn pair_count(&self) -> usize {
		match self {
			Self::Pairs { north_south, east_west } => north_south.pairs.len() + east_west.pairs.len(),
		}
	}
}

/// A fully decoded section.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Section {
	/// Section slot, 1-based.
	pub slot: usize,
	/// Master table summary.
	pub summary: SectionSummary,
	/// Configuration record.
	pub details: SectionDetails,
	/// Rosters.
	pub entries: SectionEntries,
	/// Board results.
	pub boards: BoardList,
	/// Movement table.
	pub movement: Movement,
}

impl Section {
	/// Decode everything a section summary reaches; `None` for an unused slot.
	pub fn read(ctx: &DecodeContext<'_>, slot: usize, summary: SectionSummary) -> Result<Option<Self>> {
		if !summary.is_used() {
			return Ok(None);
		}
		tracing::debug!(slot, name = %summary.name, details = %summary.details, "decoding section");

		let Some(details) = SectionDetails::read_at(ctx, summary.details)? else {
			return Ok(None);
		};

		let entries = SectionEntries::read(ctx, details.entry_shape())?;
		let movement = Movement::read(ctx, details.movement_shape())?;
		let boards = if ctx.options.decode_boards {
			BoardList::read_at(ctx, summary.board_index)?
		} else {
			BoardList::default()
		};

		Ok(Some(Self {
			slot,
			summary,
			details,
			entries,
			boards,
			movement,
		}))
	}

	/// Section letters.
	pub fn name(&self) -> &str {
		&self.summary.name
	}
}

#[cfg(test)]
mod tests;
