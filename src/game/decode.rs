use crate::game::bytes::Cursor;
use crate::game::layout::{FormatVersion, LENGTH_WORD, RecordKind, RecordLen};
use crate::game::scalar::Ptr;
use crate::game::{GameError, Result};

/// Behavior switches for game file decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Decode each section's board index and board results.
	pub decode_boards: bool,
	/// Fail instead of warning when a board's index number and results id disagree.
	pub strict_board_ids: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			decode_boards: true,
			strict_board_ids: false,
		}
	}
}

impl DecodeOptions {
	/// Preset that only decodes configuration and rosters.
	pub fn without_boards() -> Self {
		Self {
			decode_boards: false,
			..Self::default()
		}
	}
}

/// Shared, read-only state threaded through every decoder.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
	/// Whole file buffer.
	pub bytes: &'a [u8],
	/// Record-length table in effect.
	pub format: FormatVersion,
	/// Caller options.
	pub options: &'a DecodeOptions,
}

impl<'a> DecodeContext<'a> {
	/// Build a context for the `AC3` format.
	pub fn new(bytes: &'a [u8], options: &'a DecodeOptions) -> Self {
		Self {
			bytes,
			format: FormatVersion::AC3,
			options,
		}
	}

	/// Open the length-prefixed record a pointer refers to, or `None` when the pointer is absent.
	pub fn record(&self, ptr: Ptr, kind: RecordKind) -> Result<Option<Record<'a>>> {
		match Cursor::deref(self.bytes, ptr)? {
			Some(cursor) => Record::open(cursor, self.format, kind).map(Some),
			None => Ok(None),
		}
	}
}

/// One length-prefixed record being decoded.
///
/// Fixed-length kinds are validated as soon as the length word is read; counted kinds are validated by
/// [`Record::expect_count`] once the count field has been read.
#[derive(Debug)]
pub struct Record<'a> {
	kind: RecordKind,
	at: usize,
	declared: usize,
	len: RecordLen,
	cursor: Cursor<'a>,
}

impl<'a> Record<'a> {
	/// Read the length word at the cursor and validate fixed lengths.
	pub fn open(mut cursor: Cursor<'a>, format: FormatVersion, kind: RecordKind) -> Result<Self> {
		let at = cursor.pos();
		let declared = usize::from(cursor.read_u16_le()?);
		let len = format.record_len(kind);
		if let RecordLen::Fixed(expected) = len {
			if declared != expected {
				return Err(GameError::RecordLength {
					kind,
					expected,
					got: declared,
					at,
				});
			}
		}

		Ok(Self {
			kind,
			at,
			declared,
			len,
			cursor,
		})
	}

	/// Validate a counted record's declared length against its entry count.
	pub fn expect_count(&self, count: usize) -> Result<()> {
		let expected = self.len.expected(count);
		if self.declared != expected {
			return Err(GameError::RecordLength {
				kind: self.kind,
				expected,
				got: self.declared,
				at: self.at,
			});
		}
		Ok(())
	}

	/// Exclusive end offset implied by the declared length.
	pub fn end(&self) -> usize {
		self.at + LENGTH_WORD + self.declared
	}

	/// Cursor positioned inside the record body.
	pub fn cursor(&mut self) -> &mut Cursor<'a> {
		&mut self.cursor
	}

	/// Check that decoding stayed inside the record and skip any trailing reserved bytes.
	pub fn finish(mut self) -> Result<()> {
		let end = self.end();
		let pos = self.cursor.pos();
		if pos > end {
			return Err(GameError::RecordOverrun {
				kind: self.kind,
				at: self.at,
				end,
				pos,
			});
		}
		self.cursor.seek(end)
	}
}

#[cfg(test)]
mod tests;
