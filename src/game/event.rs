use std::fmt;

use crate::game::decode::DecodeContext;
use crate::game::layout::{RecordKind, STRAT_TIERS};
use crate::game::memo::read_memo;
use crate::game::scalar::{PackedDateTime, Ptr};
use crate::game::strat::StratStructure;
use crate::game::Result;

/// Event type code from the master table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
	/// Pairs.
	Pairs,
	/// Teams.
	Teams,
	/// Individual.
	Individual,
	/// Home-style pairs.
	HomeStylePairs,
	/// Board-a-match teams.
	BoardAMatchTeams,
	/// Series winner.
	SeriesWinner,
	/// Code this decoder does not name.
	Unknown(u8),
}

impl EventKind {
	/// Map a stored type code.
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => Self::Pairs,
			1 => Self::Teams,
			2 => Self::Individual,
			3 => Self::HomeStylePairs,
			4 => Self::BoardAMatchTeams,
			5 => Self::SeriesWinner,
			other => Self::Unknown(other),
		}
	}
}

impl fmt::Display for EventKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Pairs => f.write_str("pairs"),
			Self::Teams => f.write_str("teams"),
			Self::Individual => f.write_str("individual"),
			Self::HomeStylePairs => f.write_str("home-style pairs"),
			Self::BoardAMatchTeams => f.write_str("board-a-match teams"),
			Self::SeriesWinner => f.write_str("series winner"),
			Self::Unknown(code) => write!(f, "unknown ({code})"),
		}
	}
}

/// Scoring method code from the master table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
	/// Matchpoints.
	Matchpoints,
	/// IMPs against a computed datum.
	ImpsComputedDatum,
	/// Average IMPs.
	AverageImps,
	/// Total IMPs.
	TotalImps,
	/// Instant matchpoints.
	InstantMatchpoints,
	/// Board-a-match matchpoints.
	BamMatchpoints,
	/// Win/loss.
	WinLoss,
	/// Victory points.
	VictoryPoints,
	/// Knockout.
	Knockout,
	/// Zip knockout.
	ZipKnockout,
	/// Continuous pairs.
	ContinuousPairs,
	/// IMPs against a predetermined datum.
	ImpsPredeterminedDatum,
	/// Double matchpoints.
	DoubleMatchpoints,
	/// Total points.
	TotalPoints,
	/// Board-a-match teams.
	BamTeams,
	/// Compact knockout.
	CompactKnockout,
	/// Code this decoder does not name.
	Unknown(u8),
}

impl ScoringMethod {
	/// Map a stored scoring code.
	pub fn from_code(code: u8) -> Self {
		match code {
			0 => Self::Matchpoints,
			1 => Self::ImpsComputedDatum,
			2 => Self::AverageImps,
			3 => Self::TotalImps,
			4 => Self::InstantMatchpoints,
			5 => Self::BamMatchpoints,
			6 => Self::WinLoss,
			7 => Self::VictoryPoints,
			8 => Self::Knockout,
			9 => Self::ZipKnockout,
			10 => Self::ContinuousPairs,
			13 => Self::ImpsPredeterminedDatum,
			14 => Self::DoubleMatchpoints,
			15 => Self::TotalPoints,
			16 => Self::BamTeams,
			18 => Self::CompactKnockout,
			other => Self::Unknown(other),
		}
	}

	/// Return whether scores are IMP-based.
	pub fn is_imps(self) -> bool {
		matches!(
			self,
			Self::ImpsComputedDatum | Self::AverageImps | Self::TotalImps | Self::ImpsPredeterminedDatum
		)
	}
}

/// Event configuration record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct EventDetails {
	/// Event name.
	pub name: String,
	/// Session name.
	pub session: String,
	/// Director name.
	pub director: String,
	/// Sanction number.
	pub sanction: String,
	/// Event date as entered.
	pub date: String,
	/// Club name.
	pub club_name: String,
	/// Event code.
	pub event_code: String,
	/// Memo pointer.
	pub memo_ptr: Ptr,
	/// Memo text; empty when no memo is recorded.
	pub memo: String,
	/// Masterpoint P factor.
	pub p_factor: f64,
	/// Percentage qualifying.
	pub percent_qualifying: u8,
	/// Masterpoint T factor.
	pub t_factor: f64,
	/// Stratify by age.
	pub stratify_by_age: bool,
	/// Event rating code.
	pub rating: u8,
	/// Last session of the event.
	pub end_of_event: bool,
	/// Handicapped event.
	pub handicap: bool,
	/// Session number.
	pub session_number: u8,
	/// Starting session.
	pub starting_session: u8,
	/// Carry-over has been calculated.
	pub carry_over_calculated: bool,
	/// Data was edited after scoring.
	pub data_edited: bool,
	/// Negative handicaps allowed.
	pub negative_handicap: bool,
	/// Masterpoint awards verified.
	pub mp_award_verified: bool,
	/// Maximum IMP swing per board.
	pub max_imp_swing: i16,
	/// Club session.
	pub club_session: bool,
	/// Tie-break spread.
	pub tie_break_spread: f64,
	/// Masterpoints for a perfect game.
	pub mps_for_perfect_game: f64,
	/// Top on a board.
	pub top: f64,
	/// Number of strats in use.
	pub strat_count: u8,
	/// Total sessions.
	pub total_sessions: u8,
	/// Consolation event.
	pub consolation: bool,
	/// Club game type code.
	pub club_game_type: u8,
	/// Newcomer tables.
	pub newcomer_tables: u8,
	/// Club number.
	pub club_number: String,
	/// Last modification time.
	pub modification_time: PackedDateTime,
	/// Bracket count.
	pub bracket_count: u8,
	/// Bracket number.
	pub bracket_number: u8,
	/// Qualifying event code.
	pub qualifying_event_code: String,
	/// Handicap dual-ranking method.
	pub handicap_ranking_method: u8,
	/// IMP datum is calculated.
	pub imp_datum_calculated: bool,
	/// EDXOV step completed.
	pub edxov_done: bool,
	/// Continuous pairs event.
	pub continuous_pairs: bool,
	/// Qualifying event.
	pub qualifying_event: bool,
	/// Strat rules.
	pub strats: [StratStructure; STRAT_TIERS],
	/// Percentage needed to qualify.
	pub percent_to_qualify: u8,
	/// Life master eligibility codes.
	pub life_master_eligibility: [u8; 3],
	/// NAP/GNT level.
	pub nap_level: u8,
	/// Split-site event.
	pub split_site: bool,
	/// Multi-site factor. Stored as a six-byte Pascal real.
	pub multi_site_factor: f64,
	/// ACBL hand records code.
	pub acbl_hands: u8,
	/// Report percentages instead of masterpoints.
	pub percentages_instead_of_mps: bool,
	/// Seniors event.
	pub seniors: bool,
	/// Restriction code.
	pub restrictions: u8,
	/// Side game.
	pub side_game: bool,
	/// Masterpoint award version.
	pub mp_award_version: u8,
	/// Print unpaid entries.
	pub print_unpaid: bool,
	/// Game sanction fee.
	pub game_fee: f64,
	/// Table fee.
	pub table_fee: f64,
	/// Charity fee.
	pub charity_fee: f64,
	/// Stratify by average masterpoints.
	pub stratify_by_average: bool,
	/// Recaps show percentages.
	pub recaps_in_percent: bool,
	/// Not an ACBL event.
	pub non_acbl: bool,
}

impl EventDetails {
	/// Decode the event details record a pointer refers to; `None` for an empty slot.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Option<Self>> {
		let Some(mut record) = ctx.record(ptr, RecordKind::EventDetails)? else {
			return Ok(None);
		};
		let c = record.cursor();
		let name = c.read_pstring(25)?;
		let session = c.read_pstring(25)?;
		let director = c.read_pstring(25)?;
		let sanction = c.read_pstring(10)?;
		let date = c.read_pstring(17)?;
		let club_name = c.read_pstring(25)?;
		let event_code = c.read_pstring(5)?;
		let memo_ptr = c.read_ptr()?;
		let mut details = Self {
			name,
			session,
			director,
			sanction,
			date,
			club_name,
			event_code,
			memo_ptr,
			memo: String::new(),
			p_factor: c.read_hundredths_i16()?,
			percent_qualifying: c.read_u8()?,
			t_factor: c.read_hundredths_i16()?,
			stratify_by_age: c.read_bool()?,
			rating: c.read_u8()?,
			end_of_event: c.read_bool()?,
			handicap: c.read_bool()?,
			session_number: c.read_u8()?,
			starting_session: c.read_u8()?,
			carry_over_calculated: c.read_bool()?,
			data_edited: c.read_bool()?,
			negative_handicap: c.read_bool()?,
			mp_award_verified: c.read_bool()?,
			max_imp_swing: c.read_i16_le()?,
			club_session: c.read_bool()?,
			tie_break_spread: c.read_tenths_i16()?,
			mps_for_perfect_game: c.read_hundredths_i16()?,
			top: c.read_tenths_i16()?,
			strat_count: c.read_u8()?,
			total_sessions: c.read_u8()?,
			consolation: c.read_bool()?,
			club_game_type: c.read_u8()?,
			newcomer_tables: c.read_u8()?,
			club_number: c.read_pstring(6)?,
			modification_time: c.read_datetime()?,
			bracket_count: c.read_u8()?,
			bracket_number: c.read_u8()?,
			qualifying_event_code: c.read_pstring(5)?,
			handicap_ranking_method: c.read_u8()?,
			imp_datum_calculated: c.read_bool()?,
			edxov_done: c.read_bool()?,
			continuous_pairs: c.read_bool()?,
			qualifying_event: c.read_bool()?,
			strats: c.parse_fixed(StratStructure::parse)?,
			percent_to_qualify: c.read_u8()?,
			life_master_eligibility: c.read_array()?,
			nap_level: c.read_u8()?,
			split_site: c.read_bool()?,
			multi_site_factor: c.read_real48()?,
			acbl_hands: c.read_u8()?,
			percentages_instead_of_mps: c.read_bool()?,
			seniors: c.read_bool()?,
			restrictions: c.read_u8()?,
			side_game: c.read_bool()?,
			mp_award_version: c.read_u8()?,
			print_unpaid: c.read_bool()?,
			game_fee: c.read_hundredths_i32()?,
			table_fee: c.read_hundredths_i32()?,
			charity_fee: c.read_hundredths_i32()?,
			stratify_by_average: c.read_bool()?,
			recaps_in_percent: c.read_bool()?,
			non_acbl: c.read_bool()?,
		};
		record.finish()?;

		details.memo = read_memo(ctx.bytes, details.memo_ptr)?;
		Ok(Some(details))
	}

	/// Strats in use, as counted by the record.
	pub fn active_strats(&self) -> &[StratStructure] {
		let count = usize::from(self.strat_count).min(STRAT_TIERS);
		&self.strats[..count]
	}
}

/// A decoded event slot.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Event {
	/// Event slot, 1-based.
	pub slot: usize,
	/// Event type.
	pub kind: EventKind,
	/// Scoring method.
	pub scoring: ScoringMethod,
	/// Configuration record.
	pub details: EventDetails,
}

impl Event {
	/// Decode one event slot; `None` when its pointer is absent.
	pub fn read(ctx: &DecodeContext<'_>, slot: usize, ptr: Ptr, kind: u8, scoring: u8) -> Result<Option<Self>> {
		if ptr.is_null() {
			return Ok(None);
		}
		tracing::debug!(slot, details = %ptr, kind, scoring, "decoding event");

		let Some(details) = EventDetails::read_at(ctx, ptr)? else {
			return Ok(None);
		};
		Ok(Some(Self {
			slot,
			kind: EventKind::from_code(kind),
			scoring: ScoringMethod::from_code(scoring),
			details,
		}))
	}
}

#[cfg(test)]
mod tests;
