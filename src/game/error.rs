use std::fmt;

use thiserror::Error;

use crate::game::layout::RecordKind;
use crate::game::pair::Direction;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors produced while reading and decoding ACBLscore game files.
#[derive(Debug, Error)]
pub enum GameError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// File identifier is not the supported `AC3` tag.
	#[error("bad file identifier {got:?} (expected {expected:?})")]
	BadIdentifier {
		/// Supported identifier.
		expected: [u8; 3],
		/// Identifier bytes found in the file.
		got: [u8; 3],
	},
	/// Master table declares an unsupported length.
	#[error("master table length {got} (expected {expected})")]
	MasterLengthMismatch {
		/// Length known for the supported format version.
		expected: usize,
		/// Declared length.
		got: usize,
	},
	/// Header file length disagrees with the real byte length.
	#[error("file length field {declared} does not match actual length {actual}")]
	FileLengthMismatch {
		/// Length recorded in the master table.
		declared: usize,
		/// Number of bytes actually read.
		actual: usize,
	},
	/// A length-prefixed record reported an unexpected length.
	#[error("{kind} at offset {at} declares length {got} (expected {expected})")]
	RecordLength {
		/// Record kind being decoded.
		kind: RecordKind,
		/// Length required by the layout table.
		expected: usize,
		/// Declared length.
		got: usize,
		/// File offset of the record's length word.
		at: usize,
	},
	/// Decoding a record consumed more bytes than it declared.
	#[error("{kind} at offset {at} overran its declared end {end} (cursor at {pos})")]
	RecordOverrun {
		/// Record kind being decoded.
		kind: RecordKind,
		/// File offset of the record's length word.
		at: usize,
		/// Exclusive end offset implied by the declared length.
		end: usize,
		/// Cursor offset after decoding.
		pos: usize,
	},
	/// Fixed-width string declared more content than its field width.
	#[error("string at offset {at} declares {len} bytes in a {width}-byte field")]
	StringOverflow {
		/// Offset of the length byte.
		at: usize,
		/// Declared content length.
		len: usize,
		/// Maximum field width.
		width: usize,
	},
	/// Enumerated or count field held an out-of-range value.
	#[error("invalid {field} value {value} at offset {at}")]
	InvalidField {
		/// Field name.
		field: &'static str,
		/// Offending value.
		value: u32,
		/// Offset of the field.
		at: usize,
	},
	/// File uses a layout this decoder does not support yet.
	#[error("not supported yet: {feature}")]
	Unsupported {
		/// Description of the unsupported layout.
		feature: &'static str,
	},
	/// Board index and board results disagree on the board number.
	#[error("board index lists board {index} but its results record says {record}")]
	BoardIdMismatch {
		/// Number from the board index.
		index: u16,
		/// Number from the results record.
		record: u16,
	},
	/// Lookup named a pair the decoded tree does not contain.
	#[error("no {direction} pair {pair} in section {section}")]
	PairNotFound {
		/// Requested section letters.
		section: String,
		/// Requested direction.
		direction: Direction,
		/// Requested pair number.
		pair: u16,
	},
	/// Error raised while decoding a specific structural stage.
	#[error("{stage}: {source}")]
	Stage {
		/// Stage that was being decoded.
		stage: Stage,
		/// Underlying failure.
		#[source]
		source: Box<GameError>,
	},
}

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Reading the file failed.
	Io,
	/// The file is corrupt or not a supported game file.
	Format,
	/// A read would pass the end of the buffer.
	Bounds,
	/// The file is valid but uses a layout that is not decoded yet.
	Unsupported,
}

/// Structural stage reported alongside decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
	/// Top-level master table.
	MasterTable,
	/// Event slot, 1-based.
	Event(usize),
	/// Section slot, 1-based.
	Section(usize),
	/// Pair within a section, by pair-index position (1-based).
	Pair(usize),
	/// Board within a section, by board-index position (1-based).
	Board(usize),
}

impl fmt::Display for Stage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MasterTable => f.write_str("master table"),
			Self::Event(n) => write!(f, "event {n}"),
			Self::Section(n) => write!(f, "section {n}"),
			Self::Pair(n) => write!(f, "pair {n}"),
			Self::Board(n) => write!(f, "board {n}"),
		}
	}
}

impl GameError {
	/// Wrap this error with the stage in which it occurred.
	pub fn at_stage(self, stage: Stage) -> Self {
		Self::Stage {
			stage,
			source: Box::new(self),
		}
	}

	/// Classify the error, looking through stage wrappers.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::UnexpectedEof { .. } => ErrorKind::Bounds,
			Self::Unsupported { .. } => ErrorKind::Unsupported,
			Self::Stage { source, .. } => source.kind(),
			_ => ErrorKind::Format,
		}
	}

	/// Return the outermost-to-innermost stages attached to this error.
	pub fn stages(&self) -> Vec<Stage> {
		let mut out = Vec::new();
		let mut current = self;
		while let Self::Stage { stage, source } = current {
			out.push(*stage);
			current = source;
		}
		out
	}

	/// Return the innermost error beneath any stage wrappers.
	pub fn root(&self) -> &GameError {
		match self {
			Self::Stage { source, .. } => source.root(),
			other => other,
		}
	}
}

/// Attach a [`Stage`] to the error side of a result.
pub(crate) trait StageExt<T> {
	fn stage(self, stage: Stage) -> Result<T>;
}

impl<T> StageExt<T> for Result<T> {
	fn stage(self, stage: Stage) -> Result<T> {
		self.map_err(|err| err.at_stage(stage))
	}
}
