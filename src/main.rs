#![allow(missing_docs)]

use clap::{Parser, Subcommand};

use acblscore::game::DecodeOptions;

mod cmd;

#[derive(Parser)]
#[command(name = "acblscore", about = "ACBLscore game file inspection tools")]
struct Cli {
	/// Skip board index and board results decoding.
	#[arg(long, global = true)]
	no_boards: bool,
	/// Fail when a board's index number and results id disagree.
	#[arg(long, global = true)]
	strict_board_ids: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Dump(cmd::dump::Args),
	Pair(cmd::pair::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")))
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> acblscore::game::Result<()> {
	let cli = Cli::parse();
	let options = DecodeOptions {
		decode_boards: !cli.no_boards,
		strict_board_ids: cli.strict_board_ids,
	};

	match cli.command {
		Commands::Info(args) => cmd::info::run(args, &options),
		Commands::Dump(args) => cmd::dump::run(args, &options),
		Commands::Pair(args) => cmd::pair::run(args, &options),
	}
}
