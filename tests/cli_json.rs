#![allow(missing_docs)]

use std::path::Path;
use std::process::{Command, Output};

use acblscore_testkit::{GameBuilder, club_pair_game, write_temp_game};
use serde_json::Value;

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_acblscore")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"acblscore failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn club_path(name: &str) -> String {
	path_str(&write_temp_game(name, &club_pair_game()))
}

fn path_str(path: &Path) -> String {
	path.to_string_lossy().into_owned()
}

#[test]
fn info_json_reports_header_and_counts() {
	let path = club_path("cli-info.acbl");
	let json = run_json(&["info", &path, "--json"]);

	assert_eq!(json["identifier"], "AC3");
	assert_eq!(json["events"], 1);
	assert_eq!(json["sections"], 1);
	assert_eq!(json["boards"], 2);
	assert_eq!(json["creation_date"], "2025-03-03T14:30:20");
	assert_eq!(json["backed_up"], true);
}

#[test]
fn no_boards_flag_skips_board_decoding() {
	let path = club_path("cli-info-no-boards.acbl");
	let json = run_json(&["info", &path, "--json", "--no-boards"]);
	assert_eq!(json["boards"], 0);
}

#[test]
fn dump_json_contains_the_whole_tree() {
	let path = club_path("cli-dump.acbl");
	let json = run_json(&["dump", &path, "--json"]);

	assert_eq!(json["identifier"], "AC3");
	let event = &json["events"][0];
	assert_eq!(event["kind"], "pairs");
	assert_eq!(event["scoring"], "matchpoints");
	assert_eq!(event["details"]["strats"].as_array().map(Vec::len), Some(3));

	let section = &json["sections"][0];
	assert_eq!(section["summary"]["name"], "A");
	assert_eq!(section["entries"]["type"], "pairs");
	assert_eq!(section["entries"]["north_south"]["direction"], "north_south");
	assert_eq!(section["movement"]["type"], "mitchell");
	assert_eq!(section["movement"]["initial"].as_array().map(Vec::len), Some(40));
	assert_eq!(section["boards"]["boards"].as_array().map(Vec::len), Some(2));
}

#[test]
fn dump_listing_summarizes_events_and_sections() {
	let path = club_path("cli-dump-listing.acbl");
	let output = run(&["dump", &path]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Tuesday Open Pairs [pairs] Evening, 3 strats\n"), "{stdout}");
	assert!(stdout.contains("section A (1): 4 pairs, 2 boards, movement Mitchell 2"), "{stdout}");
}

#[test]
fn pair_json_links_board_results() {
	let path = club_path("cli-pair.acbl");
	let json = run_json(&["pair", &path, "--section", "A", "--direction", "ew", "--pair", "1", "--json"]);

	assert_eq!(json["section"], "A");
	assert_eq!(json["pair"]["id"], 1);
	assert_eq!(json["pair"]["players"][0]["last_name"], "Kemp");
	let boards = json["boards"].as_array().expect("boards array");
	assert_eq!(boards.len(), 2);
	assert_eq!(boards[0]["score"], -420);
	assert_eq!(boards[1]["opponent"], 2);
}

#[test]
fn unknown_pair_exits_with_error() {
	let path = club_path("cli-pair-missing.acbl");
	let output = run(&["pair", &path, "--section", "A", "--direction", "ns", "--pair", "9"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: no NS pair 9 in section A"));
}

#[test]
fn bad_identifier_exits_with_error() {
	let path = path_str(&write_temp_game("cli-ac2.acbl", &GameBuilder::new().identifier(*b"AC2").finish()));
	let output = run(&["info", &path]);
	assert_eq!(output.status.code(), Some(1));
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("error: master table: bad file identifier"), "stderr: {stderr}");
}
