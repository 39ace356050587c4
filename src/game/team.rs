//! Team-play records. Decodable on their own, but section decoding does not reach them yet.

use crate::game::Result;
use crate::game::bytes::Cursor;
use crate::game::decode::DecodeContext;
use crate::game::layout::{ROUND_ROBIN_TEAMS, ROUND_ROBINS, RecordKind};
use crate::game::scalar::Ptr;

/// Home table of one team in a round robin.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoundRobinTeam {
	/// Home section letters.
	pub home_section: String,
	/// Home direction code.
	pub direction: u8,
	/// Home table number.
	pub table: u8,
}

/// Three-team round-robin schedule.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoundRobin {
	/// Round robin is in use.
	pub active: bool,
	/// Round the round robin starts.
	pub starting_round: u8,
	/// Team home tables.
	pub teams: [RoundRobinTeam; ROUND_ROBIN_TEAMS],
}

impl RoundRobin {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 17;

	/// Parse a round-robin record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let active = cursor.read_bool()?;
		let starting_round = cursor.read_u8()?;
		let teams = cursor.parse_fixed::<_, ROUND_ROBIN_TEAMS>(|cursor| {
			Ok(RoundRobinTeam {
				home_section: cursor.read_pstring(2)?,
				direction: cursor.read_u8()?,
				table: cursor.read_u8()?,
			})
		})?;

		Ok(Self {
			active,
			starting_round,
			teams,
		})
	}
}

/// One round of a team's match record.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TeamMatch {
	/// Round number.
	pub round: u8,
	/// Opponent team number.
	pub opponent: u8,
	/// Rounds in the match.
	pub rounds: u8,
	/// Round-robin status code.
	pub round_robin_status: u8,
	/// IMPs won.
	pub imps: f64,
	/// Victory points won.
	pub victory_points: f64,
	/// Boards played.
	pub boards_played: u8,
	/// Table letter.
	pub table: char,
	/// Second opponent in a three-way match.
	pub second_opponent: u8,
	/// Wins on the round.
	pub wins: u8,
}

impl TeamMatch {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 12;

	/// Parse a match record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			round: cursor.read_u8()?,
			opponent: cursor.read_u8()?,
			rounds: cursor.read_u8()?,
			round_robin_status: cursor.read_u8()?,
			imps: cursor.read_tenths_i16()?,
			victory_points: cursor.read_hundredths_i16()?,
			boards_played: cursor.read_u8()?,
			table: cursor.read_char()?,
			second_opponent: cursor.read_u8()?,
			wins: cursor.read_u8()?,
		})
	}
}

/// Team-play schedule and results for a section.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TeamMatchIndex {
	/// Section number.
	pub section_number: u8,
	/// Number of teams.
	pub teams: u8,
	/// Number of rounds.
	pub rounds: u8,
	/// Table assignment mode.
	pub table_assignments: u8,
	/// Current round.
	pub current_round: u8,
	/// Teams posted so far.
	pub teams_posted: u8,
	/// Round-robin schedules.
	pub round_robins: [RoundRobin; ROUND_ROBINS],
	/// Match records.
	pub matches: Vec<TeamMatch>,
}

impl TeamMatchIndex {
	/// Decode the team match index a pointer refers to; `None` when absent.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Option<Self>> {
		let Some(mut record) = ctx.record(ptr, RecordKind::TeamMatchIndex)? else {
			return Ok(None);
		};

		let cursor = record.cursor();
		let section_number = cursor.read_u8()?;
		let teams = cursor.read_u8()?;
		let rounds = cursor.read_u8()?;
		let table_assignments = cursor.read_u8()?;
		let current_round = cursor.read_u8()?;
		let teams_posted = cursor.read_u8()?;
		let round_robins = cursor.parse_fixed::<_, ROUND_ROBINS>(RoundRobin::parse)?;
		let count = usize::from(cursor.read_u16_le()?);
		record.expect_count(count)?;

		let cursor = record.cursor();
		let mut matches = Vec::with_capacity(count);
		for _ in 0..count {
			matches.push(TeamMatch::parse(cursor)?);
		}
		record.finish()?;

		Ok(Some(Self {
			section_number,
			teams,
			rounds,
			table_assignments,
			current_round,
			teams_posted,
			round_robins,
			matches,
		}))
	}
}
