use crate::game::bytes::Cursor;
use crate::game::decode::DecodeContext;
use crate::game::error::StageExt;
use crate::game::layout::RecordKind;
use crate::game::scalar::Ptr;
use crate::game::{GameError, Result, Stage};

/// One table's result on a board.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BoardEntry {
	/// Round number.
	pub round: u8,
	/// Table number.
	pub table: u8,
	/// North-South pair number.
	pub ns_pair: u16,
	/// North-South raw score.
	pub ns_score: i16,
	/// North-South matchpoints.
	pub ns_matchpoints: f64,
	/// East-West pair number.
	pub ew_pair: u16,
	/// East-West raw score.
	pub ew_score: i16,
	/// East-West matchpoints.
	pub ew_matchpoints: f64,
}

impl BoardEntry {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 18;

	/// Parse a result line at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			round: cursor.read_u8()?,
			table: cursor.read_u8()?,
			ns_pair: cursor.read_u16_le()?,
			ns_score: cursor.read_i16_le()?,
			ns_matchpoints: cursor.read_hundredths_i32()?,
			ew_pair: cursor.read_u16_le()?,
			ew_score: cursor.read_i16_le()?,
			ew_matchpoints: cursor.read_hundredths_i32()?,
		})
	}
}

/// All results recorded for one board.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BoardResults {
	/// Board number from the section's board index. Authoritative.
	pub number: u16,
	/// Board id stored in the results record itself.
	pub recorded_id: u16,
	/// Competitive units that played the board.
	pub competitive_units: u16,
	/// Result lines.
	pub entries: Vec<BoardEntry>,
}

impl BoardResults {
	/// Results for a board whose index entry has no results pointer.
	pub fn unplayed(number: u16) -> Self {
		Self {
			number,
			recorded_id: number,
			competitive_units: 0,
			entries: Vec::new(),
		}
	}

	/// Decode the results record a pointer refers to, reconciling the stored id with the index number.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr, number: u16) -> Result<Self> {
		let Some(mut record) = ctx.record(ptr, RecordKind::BoardResults)? else {
			return Ok(Self::unplayed(number));
		};

		let cursor = record.cursor();
		let recorded_id = cursor.read_u16_le()?;
		let competitive_units = cursor.read_u16_le()?;
		let count = usize::from(cursor.read_u16_le()?);
		record.expect_count(count)?;

		let cursor = record.cursor();
		let mut entries = Vec::with_capacity(count);
		for _ in 0..count {
			entries.push(BoardEntry::parse(cursor)?);
		}
		record.finish()?;

		if recorded_id != number {
			if ctx.options.strict_board_ids {
				return Err(GameError::BoardIdMismatch {
					index: number,
					record: recorded_id,
				});
			}
			tracing::warn!(index = number, record = recorded_id, "board id from results and index records differ");
		}

		Ok(Self {
			number,
			recorded_id,
			competitive_units,
			entries,
		})
	}

	/// Number of result lines.
	pub fn valid_results(&self) -> usize {
		self.entries.len()
	}
}

/// Every board played in a section.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct BoardList {
	/// Section number stored in the index.
	pub section_number: u8,
	/// Boards in index order.
	pub boards: Vec<BoardResults>,
}

impl BoardList {
	/// Decode a board index and every board it points to; an absent pointer yields an empty list.
	pub fn read_at(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Self> {
		let Some(mut record) = ctx.record(ptr, RecordKind::BoardIndex)? else {
			return Ok(Self::default());
		};

		let cursor = record.cursor();
		let section_number = cursor.read_u8()?;
		let count = usize::from(cursor.read_u16_le()?);
		record.expect_count(count)?;

		let cursor = record.cursor();
		let mut slots = Vec::with_capacity(count);
		for _ in 0..count {
			let number = cursor.read_u16_le()?;
			let results = cursor.read_ptr()?;
			slots.push((number, results));
		}
		record.finish()?;

		let mut boards = Vec::with_capacity(count);
		for (idx, (number, results)) in slots.into_iter().enumerate() {
			boards.push(BoardResults::read_at(ctx, results, number).stage(Stage::Board(idx + 1))?);
		}

		Ok(Self { section_number, boards })
	}

	/// Look up a board by its index number.
	pub fn board(&self, number: u16) -> Option<&BoardResults> {
		self.boards.iter().find(|board| board.number == number)
	}

	/// Number of boards listed.
	pub fn len(&self) -> usize {
		self.boards.len()
	}

	/// Return whether no boards are listed.
	pub fn is_empty(&self) -> bool {
		self.boards.is_empty()
	}
}

#[cfg(test)]
mod tests;
