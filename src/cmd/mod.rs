/// Whole-tree dump command.
pub mod dump;
/// File-level information command.
pub mod info;
/// Pair lookup command.
pub mod pair;
/// Shared command helpers.
pub(crate) mod util;
