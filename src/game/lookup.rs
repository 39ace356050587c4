use crate::game::board::BoardEntry;
use crate::game::master::MasterTable;
use crate::game::pair::{Direction, PairDetails};
use crate::game::section::Section;

/// One board a pair played, seen from that pair's seat.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PairBoard<'a> {
	/// Board number.
	pub board: u16,
	/// Result line the pair appears in.
	pub entry: &'a BoardEntry,
	/// Raw score for the pair's side.
	pub score: i16,
	/// Matchpoints for the pair's side.
	pub matchpoints: f64,
	/// Opposing pair number.
	pub opponent: u16,
}

/// A pair's details with every board result it appears in.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PairResults<'a> {
	/// Section letters.
	pub section: &'a str,
	/// Direction the pair sat.
	pub direction: Direction,
	/// Pair record.
	pub pair: &'a PairDetails,
	/// Boards in board-index order.
	pub boards: Vec<PairBoard<'a>>,
}

impl PairResults<'_> {
	/// Sum of matchpoints over the linked boards.
	pub fn total_matchpoints(&self) -> f64 {
		self.boards.iter().map(|board| board.matchpoints).sum()
	}
}

impl MasterTable {
	/// Section by its letters.
	pub fn section(&self, name: &str) -> Option<&Section> {
		self.sections.iter().find(|section| section.name().eq_ignore_ascii_case(name))
	}

	/// Look up a pair by section, direction and pair number, together with its board results.
	///
	/// Mitchell movements reuse pair numbers across directions, so the direction is part of the key.
	pub fn pair_results(&self, section: &str, direction: Direction, pair: u16) -> Option<PairResults<'_>> {
		let section = self.section(section)?;
		let details = section.entries.pairs(direction).pair(pair)?;

		let mut boards = Vec::new();
		for results in &section.boards.boards {
			for entry in &results.entries {
				let seat = match direction {
					Direction::NorthSouth if entry.ns_pair == pair => (entry.ns_score, entry.ns_matchpoints, entry.ew_pair),
					Direction::EastWest if entry.ew_pair == pair => (entry.ew_score, entry.ew_matchpoints, entry.ns_pair),
					_ => continue,
				};
				boards.push(PairBoard {
					board: results.number,
					entry,
					score: seat.0,
					matchpoints: seat.1,
					opponent: seat.2,
				});
			}
		}

		Some(PairResults {
			section: section.name(),
			direction,
			pair: details,
			boards,
		})
	}
}
