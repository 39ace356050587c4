use std::path::PathBuf;

use acblscore::game::{DecodeOptions, Direction, GameError, Result};

use crate::cmd::util::{emit_json, load};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum DirectionArg {
	Ns,
	Ew,
}

impl From<DirectionArg> for Direction {
	fn from(value: DirectionArg) -> Self {
		match value {
			DirectionArg::Ns => Direction::NorthSouth,
			DirectionArg::Ew => Direction::EastWest,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub section: String,
	#[arg(long, value_enum)]
	pub direction: DirectionArg,
	#[arg(long)]
	pub pair: u16,
	#[arg(long)]
	pub json: bool,
}

/// Print one pair's details and the boards it played.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args {
		path,
		section,
		direction,
		pair,
		json,
	} = args;

	let table = load(&path, options)?;
	let direction = Direction::from(direction);
	let results = table
		.pair_results(&section, direction, pair)
		.ok_or_else(|| GameError::PairNotFound { section, direction, pair })?;

	if json {
		return emit_json(&results);
	}

	let details = results.pair;
	println!("section: {}", results.section);
	println!("pair: {} {}", details.id, results.direction);
	println!("players: {}", details.names());
	println!("score: {:.2}", details.session_score);
	println!("percentage: {:.2}", details.percentage);
	println!("award: {:.2}", details.current_session_award());
	println!("boards: {}", results.boards.len());
	for board in &results.boards {
		println!(
			"  board {:>2}  round {:>2}  vs {:>2}  score {:>5}  mp {:.2}",
			board.board, board.entry.round, board.opponent, board.score, board.matchpoints
		);
	}

	Ok(())
}
