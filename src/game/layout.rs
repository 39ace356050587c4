//! Record lengths, master-table offsets and fixed arities for the `AC3` format.

use std::fmt;

/// Event detail pointer slots in the master table.
pub const EVENT_SLOTS: usize = 50;
/// Section summary slots in the master table.
pub const SECTION_SLOTS: usize = 100;
/// Simultaneous stratification tiers carried by events, sections and pairs.
pub const STRAT_TIERS: usize = 3;
/// Masterpoint pigmentation breakdowns per strat (overall, session, section).
pub const PIGMENTATION_TIERS: usize = 3;
/// Award tiers per masterpoint award (first, second, third).
pub const AWARD_TIERS: usize = 3;
/// Award periods per pair (previous session, current session, all sessions).
pub const AWARD_PERIODS: usize = 3;
/// Players embedded in a pair record.
pub const PLAYERS_PER_PAIR: usize = 2;
/// Seat moves in each half of a Mitchell movement table.
pub const MITCHELL_SLOTS: usize = 40;
/// Team slots described by a round-robin record.
pub const ROUND_ROBIN_TEAMS: usize = 3;
/// Round-robin records in a team match index.
pub const ROUND_ROBINS: usize = 2;

/// Size of the length word that prefixes every record.
pub const LENGTH_WORD: usize = 2;
/// Byte size of one section summary entry.
pub const SECTION_SUMMARY_SIZE: usize = 20;

/// Fixed offsets inside the master table.
pub mod master {
	/// Declared master length.
	pub const LENGTH: usize = 0x000;
	/// Three-byte file identifier.
	pub const IDENTIFIER: usize = 0x002;
	/// Whole-file length.
	pub const FILE_LENGTH: usize = 0x005;
	/// First free block pointer.
	pub const FIRST_FREE_BLOCK: usize = 0x009;
	/// Instant matchpoint table pointer.
	pub const INSTANT_MATCHPOINTS: usize = 0x00D;
	/// Event detail pointer array.
	pub const EVENT_POINTERS: usize = 0x011;
	/// Event type byte array.
	pub const EVENT_TYPES: usize = 0x0DA;
	/// Scoring method byte array.
	pub const SCORING_METHODS: usize = 0x10C;
	/// Section summary array.
	pub const SECTION_SUMMARIES: usize = 0x13E;
	/// Memo pointer.
	pub const MEMO: usize = 0x90E;
	/// Note pointer.
	pub const NOTE: usize = 0x912;
	/// Score version, hundredths.
	pub const SCORE_VERSION: usize = 0x9DB;
	/// Packed creation date.
	pub const CREATION_DATE: usize = 0x9DD;
	/// Minimum compatible score version, hundredths.
	pub const MIN_SCORE_VERSION: usize = 0x9E1;
	/// Global option bits.
	pub const GLOBAL_OPTIONS: usize = 0x9EC;
	/// Bridgemate import flag.
	pub const BRIDGEMATE_IMPORT: usize = 0xA13;
}

/// Length-prefixed record kinds known to the layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum RecordKind {
	/// Top-level master table.
	MasterTable,
	/// Per-event configuration record.
	EventDetails,
	/// Per-section configuration record.
	SectionDetails,
	/// NS or EW pair pointer list.
	PairIndex,
	/// One pair's scores, awards, rankings and players.
	PairDetails,
	/// Section board pointer list.
	BoardIndex,
	/// One board's results.
	BoardResults,
	/// Mitchell movement table.
	MitchellTable,
	/// Team-play match schedule.
	TeamMatchIndex,
}

impl RecordKind {
	/// Stable human-readable label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::MasterTable => "master table",
			Self::EventDetails => "event details",
			Self::SectionDetails => "section details",
			Self::PairIndex => "pair index",
			Self::PairDetails => "pair details",
			Self::BoardIndex => "board index",
			Self::BoardResults => "board results",
			Self::MitchellTable => "mitchell table",
			Self::TeamMatchIndex => "team match index",
		}
	}
}

impl fmt::Display for RecordKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Expected declared length of a record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLen {
	/// Always exactly this many bytes after the length word.
	Fixed(usize),
	/// A fixed header followed by `count` equally sized entries.
	Counted {
		/// Header bytes after the length word, including the count field.
		header: usize,
		/// Bytes per entry.
		entry: usize,
	},
}

impl RecordLen {
	/// Resolve the expected declared length for `count` entries.
	pub fn expected(self, count: usize) -> usize {
		match self {
			Self::Fixed(len) => len,
			Self::Counted { header, entry } => header + entry * count,
		}
	}
}

/// One supported file format revision and its record-length table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatVersion {
	/// Three-byte identifier at offset 2.
	pub identifier: [u8; 3],
}

impl FormatVersion {
	/// The `AC3` game file format.
	pub const AC3: Self = Self { identifier: *b"AC3" };

	/// Look up the expected length for a record kind.
	pub const fn record_len(&self, kind: RecordKind) -> RecordLen {
		match kind {
			RecordKind::MasterTable => RecordLen::Fixed(2578),
			RecordKind::EventDetails => RecordLen::Fixed(365),
			RecordKind::SectionDetails => RecordLen::Fixed(802),
			RecordKind::PairDetails => RecordLen::Fixed(274),
			RecordKind::MitchellTable => RecordLen::Fixed(320),
			RecordKind::PairIndex => RecordLen::Counted { header: 4, entry: 4 },
			RecordKind::BoardIndex => RecordLen::Counted { header: 3, entry: 6 },
			RecordKind::BoardResults => RecordLen::Counted { header: 6, entry: 18 },
			RecordKind::TeamMatchIndex => RecordLen::Counted { header: 42, entry: 12 },
		}
	}

	/// Total master table size including its length word.
	pub const fn master_size(&self) -> usize {
		match self.record_len(RecordKind::MasterTable) {
			RecordLen::Fixed(len) => LENGTH_WORD + len,
			RecordLen::Counted { header, .. } => LENGTH_WORD + header,
		}
	}
}
