use std::io::Write;
use std::path::Path;

use acblscore::game::{DecodeOptions, GameFile, MasterTable, Result};

/// Read and decode a game file with the CLI's options.
pub(crate) fn load(path: &Path, options: &DecodeOptions) -> Result<MasterTable> {
	GameFile::open(path)?.decode_with(options)
}

/// Write a payload to stdout as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	serde_json::to_writer_pretty(&mut out, payload).map_err(std::io::Error::from)?;
	writeln!(out)?;
	Ok(())
}

/// Render an optional label, `-` when empty.
pub(crate) fn or_dash(value: &str) -> &str {
	if value.is_empty() { "-" } else { value }
}
