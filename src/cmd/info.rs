use std::path::PathBuf;

use acblscore::game::{DecodeOptions, Result};

use crate::cmd::util::{emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print header fields and slot counts.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args { path, json } = args;

	let table = load(&path, options)?;
	let boards: usize = table.sections.iter().map(|section| section.boards.len()).sum();

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			identifier: table.identifier.clone(),
			file_length: table.file_length,
			score_version: table.score_version,
			min_score_version: table.min_score_version,
			creation_date: table.creation_date.to_string(),
			backed_up: table.global_options.backed_up(),
			bridgemate_import: table.bridgemate_import,
			events: table.events.len(),
			sections: table.sections.len(),
			boards,
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("identifier: {}", table.identifier);
	println!("file_length: {}", table.file_length);
	println!("score_version: {:.2}", table.score_version);
	println!("min_score_version: {:.2}", table.min_score_version);
	println!("creation_date: {}", table.creation_date);
	println!("backed_up: {}", table.global_options.backed_up());
	println!("bridgemate_import: {}", table.bridgemate_import);
	println!("events: {}", table.events.len());
	println!("sections: {}", table.sections.len());
	println!("boards: {boards}");

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	identifier: String,
	file_length: usize,
	score_version: f64,
	min_score_version: f64,
	creation_date: String,
	backed_up: bool,
	bridgemate_import: bool,
	events: usize,
	sections: usize,
	boards: usize,
}
