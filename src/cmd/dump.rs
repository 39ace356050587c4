use std::path::PathBuf;

use acblscore::game::{DecodeOptions, Result};

use crate::cmd::util::{emit_json, load, or_dash};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print the decoded tree, as JSON or a short listing.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args { path, json } = args;

	let table = load(&path, options)?;
	if json {
		return emit_json(&table);
	}

	println!("path: {}", path.display());
	for event in &table.events {
		println!(
			"event {}: {} [{}] {}, {} strats{}",
			event.slot,
			or_dash(&event.details.name),
			event.kind,
			or_dash(&event.details.session),
			event.details.active_strats().len(),
			if event.scoring.is_imps() { ", imps" } else { "" }
		);
		for section in table.sections_of(event.slot) {
			println!(
				"  section {} ({}): {} pairs, {} boards, movement {}",
				section.name(),
				section.slot,
				section.entries.pair_count(),
				section.boards.len(),
				or_dash(&section.details.movement_name)
			);
		}
	}

	Ok(())
}
