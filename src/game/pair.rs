use std::fmt;

use crate::game::award::{MpAward, Ranking};
use crate::game::decode::DecodeContext;
use crate::game::error::StageExt;
use crate::game::layout::{AWARD_PERIODS, PLAYERS_PER_PAIR, RecordKind, STRAT_TIERS};
use crate::game::player::Player;
use crate::game::scalar::Ptr;
use crate::game::{GameError, Result, Stage};

/// Compass direction of a pair list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
	/// North-South.
	NorthSouth,
	/// East-West.
	EastWest,
}

impl Direction {
	/// Map the stored direction code.
	pub fn from_code(code: u8) -> Option<Self> {
		match code {
			0 => Some(Self::NorthSouth),
			1 => Some(Self::EastWest),
			_ => None,
		}
	}

	/// Short label, `NS` or `EW`.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::NorthSouth => "NS",
			Self::EastWest => "EW",
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Where a pair sits in the next session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NextAssignment {
	/// Section letters.
	pub section: String,
	/// Direction code.
	pub direction: u8,
	/// Table number.
	pub table: u8,
	/// Rotation code.
	pub rotation: u8,
}

/// One pair's scores, awards, rankings and players.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PairDetails {
	/// Pair number.
	pub id: u16,
	/// Score adjustment.
	pub adjustment: f64,
	/// Score before scaling.
	pub unscaled_score: f64,
	/// Session score.
	pub session_score: f64,
	/// Carry-over from earlier sessions.
	pub carry_over: f64,
	/// Final score.
	pub final_score: f64,
	/// Handicap.
	pub handicap: f64,
	/// Partnership percentage.
	pub percentage: f64,
	/// Partnership strat letter.
	pub strat: char,
	/// Average masterpoints of the partnership.
	pub average_mps: f64,
	/// Next-session assignment.
	pub next: NextAssignment,
	/// Boards played.
	pub boards_played: u8,
	/// Strat eligibility code.
	pub eligibility: u8,
	/// Awards for the previous session, current session and all sessions.
	pub awards: [MpAward; AWARD_PERIODS],
	/// Placing per strat tier.
	pub rankings: [Ranking; STRAT_TIERS],
	/// Both players.
	pub players: [Player; PLAYERS_PER_PAIR],
}

impl PairDetails {
	/// Decode the pair details record a pointer refers to; `None` for a vacant pair number.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Option<Self>> {
		let Some(mut record) = ctx.record(ptr, RecordKind::PairDetails)? else {
			return Ok(None);
		};
		let cursor = record.cursor();
		let details = Self {
			id: cursor.read_u16_le()?,
			adjustment: cursor.read_tenths_i16()?,
			unscaled_score: cursor.read_hundredths_i32()?,
			session_score: cursor.read_hundredths_i32()?,
			carry_over: cursor.read_hundredths_i32()?,
			final_score: cursor.read_hundredths_i32()?,
			handicap: cursor.read_hundredths_i16()?,
			percentage: cursor.read_hundredths_i16()?,
			strat: cursor.read_char()?,
			average_mps: cursor.read_hundredths_i16()?,
			next: NextAssignment {
				section: cursor.read_pstring(2)?,
				direction: cursor.read_u8()?,
				table: cursor.read_u8()?,
				rotation: cursor.read_u8()?,
			},
			boards_played: cursor.read_u8()?,
			eligibility: cursor.read_u8()?,
			awards: cursor.parse_fixed(MpAward::parse)?,
			rankings: cursor.parse_fixed(Ranking::parse)?,
			players: cursor.parse_fixed(Player::parse)?,
		};
		record.finish()?;
		Ok(Some(details))
	}

	/// `First Last & First Last` names of both players.
	pub fn names(&self) -> String {
		let names: Vec<String> = self.players.iter().map(Player::full_name).filter(|name| !name.is_empty()).collect();
		names.join(" & ")
	}

	/// Masterpoints won in the current session across all tiers.
	pub fn current_session_award(&self) -> f64 {
		self.awards[1].total_points()
	}
}

/// Pairs seated in one direction of a section.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PairList {
	/// Direction stored in the pair index.
	pub direction: Direction,
	/// Pairs in index order. Vacant pair numbers are skipped.
	pub pairs: Vec<PairDetails>,
}

impl PairList {
	/// Empty list for a direction with no pair index.
	pub fn empty(direction: Direction) -> Self {
		Self {
			direction,
			pairs: Vec::new(),
		}
	}

	/// Decode a pair index and every pair it points to.
	///
	/// The stored direction must match `expected`. An absent pointer yields an empty list.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr, expected: Direction) -> Result<Self> {
		let Some(mut record) = ctx.record(ptr, RecordKind::PairIndex)? else {
			return Ok(Self::empty(expected));
		};
		let cursor = record.cursor();

		let at = cursor.pos();
		let code = cursor.read_u8()?;
		let direction = Direction::from_code(code)
			.filter(|direction| *direction == expected)
			.ok_or(GameError::InvalidField {
				field: "pair index direction",
				value: u32::from(code),
				at,
			})?;

		let at = cursor.pos();
		let players = cursor.read_u8()?;
		if usize::from(players) != PLAYERS_PER_PAIR {
			return Err(GameError::InvalidField {
				field: "players per entry",
				value: u32::from(players),
				at,
			});
		}

		let count = usize::from(cursor.read_u16_le()?);
		record.expect_count(count)?;
		let cursor = record.cursor();
		let mut slots = Vec::with_capacity(count);
		for _ in 0..count {
			slots.push(cursor.read_ptr()?);
		}
		record.finish()?;

		let mut pairs = Vec::with_capacity(count);
		for (idx, slot) in slots.into_iter().enumerate() {
			if let Some(pair) = PairDetails::read_at(ctx, slot).stage(Stage::Pair(idx + 1))? {
				pairs.push(pair);
			}
		}

		Ok(Self { direction, pairs })
	}

	/// Look up a pair by its number.
	pub fn pair(&self, id: u16) -> Option<&PairDetails> {
		self.pairs.iter().find(|pair| pair.id == id)
	}
}

#[cfg(test)]
mod tests;
