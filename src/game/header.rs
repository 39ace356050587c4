use crate::game::bytes::Cursor;
use crate::game::layout::{FormatVersion, LENGTH_WORD, RecordKind, master};
use crate::game::{GameError, Result};

/// Validated identity fields at the start of a game file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
	/// Declared master table length.
	pub declared_length: usize,
	/// File identifier bytes.
	pub identifier: [u8; 3],
	/// Whole-file length recorded in the master table.
	pub file_length: usize,
}

impl FileHeader {
	/// Validate the master length, identifier and file length of `bytes`.
	pub fn parse(bytes: &[u8], format: FormatVersion) -> Result<Self> {
		let mut cursor = Cursor::at(bytes, master::LENGTH)?;
		let declared_length = usize::from(cursor.read_u16_le()?);
		let expected = format.record_len(RecordKind::MasterTable).expected(0);
		if declared_length != expected {
			return Err(GameError::MasterLengthMismatch {
				expected,
				got: declared_length,
			});
		}

		let identifier = cursor.read_array::<3>()?;
		if identifier != format.identifier {
			return Err(GameError::BadIdentifier {
				expected: format.identifier,
				got: identifier,
			});
		}

		let master_size = LENGTH_WORD + declared_length;
		if bytes.len() < master_size {
			return Err(GameError::UnexpectedEof {
				at: bytes.len(),
				need: master_size - bytes.len(),
				rem: 0,
			});
		}

		let file_length = cursor.read_u32_le()? as usize;
		if file_length != bytes.len() {
			return Err(GameError::FileLengthMismatch {
				declared: file_length,
				actual: bytes.len(),
			});
		}

		Ok(Self {
			declared_length,
			identifier,
			file_length,
		})
	}

	/// Identifier as text.
	pub fn identifier_str(&self) -> String {
		String::from_utf8_lossy(&self.identifier).into_owned()
	}
}
