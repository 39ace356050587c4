use std::fs;
use std::path::Path;

use crate::game::Result;
use crate::game::decode::{DecodeContext, DecodeOptions};
use crate::game::master::MasterTable;

/// A game file read fully into memory.
#[derive(Debug, Clone)]
pub struct GameFile {
	bytes: Vec<u8>,
}

impl GameFile {
	/// Read a game file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let bytes = fs::read(path)?;
		Ok(Self::from_bytes(bytes))
	}

	/// Wrap bytes already in memory.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Raw file contents.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode with default options.
	pub fn decode(&self) -> Result<MasterTable> {
		self.decode_with(&DecodeOptions::default())
	}

	/// Decode with explicit options.
	pub fn decode_with(&self, options: &DecodeOptions) -> Result<MasterTable> {
		MasterTable::decode(&DecodeContext::new(&self.bytes, options))
	}
}

/// Read and decode a game file with default options.
pub fn decode_file(path: impl AsRef<Path>) -> Result<MasterTable> {
	GameFile::open(path)?.decode()
}

#[cfg(test)]
mod tests {
	use acblscore_testkit::{GameBuilder, write_temp_game};

	use super::{GameFile, decode_file};
	use crate::game::ErrorKind;

	#[test]
	fn decodes_from_disk() {
		let path = write_temp_game("file-minimal.acbl", &GameBuilder::new().finish());
		let table = decode_file(&path).expect("file decodes");
		assert!(table.events.is_empty());
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = GameFile::open("/definitely/not/a/game.acbl").expect_err("missing");
		assert_eq!(err.kind(), ErrorKind::Io);
	}

	#[test]
	fn decoding_twice_is_identical() {
		let file = GameFile::from_bytes(GameBuilder::new().finish());
		assert_eq!(file.decode().expect("first"), file.decode().expect("second"));
	}
}
