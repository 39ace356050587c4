mod award;
mod board;
mod bytes;
mod decode;
mod error;
mod event;
mod file;
mod header;
mod layout;
mod lookup;
mod master;
mod memo;
mod movement;
mod pair;
mod player;
mod scalar;
mod section;
mod strat;
mod team;

/// Masterpoint award and ranking records.
pub use award::{AwardTier, MpAward, RankLink, Ranking};
/// Per-board results.
pub use board::{BoardEntry, BoardList, BoardResults};
/// Bounded byte cursor.
pub use bytes::Cursor;
/// Decoding options and record framing.
pub use decode::{DecodeContext, DecodeOptions, Record};
/// Error, classification and result aliases.
pub use error::{ErrorKind, GameError, Result, Stage};
/// Event records and codes.
pub use event::{Event, EventDetails, EventKind, ScoringMethod};
/// File abstraction and one-shot decode.
pub use file::{GameFile, decode_file};
/// File header validation.
pub use header::FileHeader;
/// Format layout table and arities.
pub use layout::{
	AWARD_PERIODS, AWARD_TIERS, EVENT_SLOTS, FormatVersion, LENGTH_WORD, MITCHELL_SLOTS, PIGMENTATION_TIERS, PLAYERS_PER_PAIR, ROUND_ROBIN_TEAMS,
	ROUND_ROBINS, RecordKind, RecordLen, SECTION_SLOTS, SECTION_SUMMARY_SIZE, STRAT_TIERS,
};
/// Pair lookup with linked board results.
pub use lookup::{PairBoard, PairResults};
/// Decoded root record.
pub use master::{GlobalOptions, MasterTable};
/// Text block reader.
pub use memo::read_memo;
/// Movement tables.
pub use movement::{MitchellTable, Movement, MovementShape, SeatMove};
/// Pair rosters.
pub use pair::{Direction, NextAssignment, PairDetails, PairList};
/// Embedded player record.
pub use player::Player;
/// Scalar value types.
pub use scalar::{PackedDateTime, Ptr, Scale, real48_to_f64};
/// Section records.
pub use section::{EntryShape, Section, SectionDetails, SectionEntries, SectionStrat, SectionSummary};
/// Strat rules.
pub use strat::{MpPigmentation, StratStructure};
/// Team-play records.
pub use team::{RoundRobin, RoundRobinTeam, TeamMatch, TeamMatchIndex};
