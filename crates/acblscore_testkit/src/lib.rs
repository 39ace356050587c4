//! Shared test helpers: synthetic ACBLscore game file builders.
//!
//! Nothing here depends on the decoder. Every writer lays records out byte for byte so tests exercise the
//! real decoding paths against independently produced input.

mod fixtures;
mod game;
mod records;
mod writer;

pub use fixtures::{FIXTURE_TIMESTAMP, club_pair_game};
pub use game::{EventSlot, GameBuilder, MASTER_SIZE, SectionSlot, offsets};
pub use records::{
	BoardEntrySpec, EventSpec, PairSpec, PlayerSpec, RoundRobinSpec, SectionSpec, StratSpec, TeamMatchSpec, board_index, board_results,
	event_details, memo, mitchell_table, pair_details, pair_index, section_details, team_match_index,
};
pub use writer::ByteWriter;

use std::path::PathBuf;

/// Write `bytes` to a uniquely named file under the system temp directory and return its path.
pub fn write_temp_game(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("acblscore-testkit-{}", std::process::id()));
	std::fs::create_dir_all(&dir).expect("temp dir is creatable");
	let path = dir.join(name);
	std::fs::write(&path, bytes).expect("temp game file is writable");
	path
}
