use acblscore_testkit::{BoardEntrySpec, GameBuilder, PairSpec, SectionSpec, board_index, board_results, mitchell_table, pair_details, pair_index, section_details};

use crate::game::decode::{DecodeContext, DecodeOptions};
use crate::game::layout::RecordKind;
use crate::game::movement::{Movement, MovementShape};
use crate::game::pair::Direction;
use crate::game::scalar::Ptr;
use crate::game::section::{EntryShape, Section, SectionDetails, SectionSummary};
use crate::game::{ErrorKind, GameError};

fn summary(details: u32, boards: u32) -> SectionSummary {
	SectionSummary {
		event: 1,
		name: "A".to_owned(),
		details: Ptr(details),
		board_index: Ptr(boards),
		total_mps: 0.0,
		status: 0,
		rounds_posted: 0,
		rounds_total: 0,
		flags: 0,
	}
}

fn pair_section(game: &mut GameBuilder, howell: bool) -> (u32, u32) {
	let ns_one = game.append(&pair_details(&PairSpec {
		id: 1,
		..PairSpec::default()
	}));
	let ew_one = game.append(&pair_details(&PairSpec {
		id: 1,
		..PairSpec::default()
	}));
	let ns = game.append(&pair_index(0, 2, &[ns_one]));
	let ew = game.append(&pair_index(1, 2, &[ew_one]));
	let movement = game.append(&mitchell_table(&[[1, 1, 2, 1]], &[[1, 0, 1, 0]]));
	let results = game.append(&board_results(
		1,
		1,
		&[BoardEntrySpec {
			round: 1,
			table: 1,
			ns_pair: 1,
			ew_pair: 1,
			..BoardEntrySpec::default()
		}],
	));
	let boards = game.append(&board_index(1, &[(1, results)]));
	let details = game.append(&section_details(&SectionSpec {
		number: 1,
		ns_pairs: ns,
		ew_pairs: ew,
		howell,
		boards_per_round: 2,
		rounds: 13,
		movement_name: "Mitchell 13".to_owned(),
		tables: 13,
		movement,
		..SectionSpec::default()
	}));
	(details, boards)
}

#[test]
fn section_details_consume_the_whole_record() {
	let mut game = GameBuilder::new();
	let ptr = game.append(&section_details(&SectionSpec {
		number: 7,
		ns_pairs: 0x1000,
		ew_pairs: 0x2000,
		boards_per_round: 3,
		rounds: 9,
		movement_name: "Mitchell".to_owned(),
		tables: 9,
		memo: 0x3000,
		team_matches: 0x4000,
		movement: 0x5000,
		..SectionSpec::default()
	}));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let details = SectionDetails::read_at(&ctx, Ptr(ptr)).expect("details decode").expect("pointer set");

	assert_eq!(details.number, 7);
	assert_eq!(details.boards_in_play, 27);
	assert_eq!(details.boards_per_round, 3);
	assert_eq!(details.rounds, 9);
	assert_eq!(details.tables, 9);
	assert_eq!(details.movement_name, "Mitchell");
	assert!((details.board_factor - 1.0).abs() < 1e-9);
	assert_eq!(details.strats[2].entrants, [2, 2, 0, 0]);
	assert_eq!(details.memo, Ptr(0x3000));
	assert_eq!(details.team_matches, Ptr(0x4000));
	assert_eq!(details.movement, Ptr(0x5000));
	assert_eq!(details.movement_shape(), MovementShape::Mitchell(Ptr(0x5000)));
	assert_eq!(details.modification_time.to_string(), "1980-01-01T00:00:00");
}

#[test]
fn section_details_length_must_be_802() {
	let mut game = GameBuilder::new();
	let mut record = section_details(&SectionSpec::default());
	record[..2].copy_from_slice(&801_u16.to_le_bytes());
	let ptr = game.append(&record);
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = SectionDetails::read_at(&ctx, Ptr(ptr)).expect_err("short length");
	assert!(matches!(
		err,
		GameError::RecordLength {
			kind: RecordKind::SectionDetails,
			expected: 802,
			got: 801,
			at,
		} if at == ptr as usize
	));
}

#[test]
fn entry_shape_prefers_individual_then_pairs_then_teams() {
	let mut game = GameBuilder::new();
	let individual = game.append(&section_details(&SectionSpec {
		south_players: 0x10,
		ew_pairs: 0x20,
		..SectionSpec::default()
	}));
	let pairs = game.append(&section_details(&SectionSpec {
		ns_pairs: 0x30,
		ew_pairs: 0x40,
		..SectionSpec::default()
	}));
	let teams = game.append(&section_details(&SectionSpec {
		team_matches: 0x50,
		..SectionSpec::default()
	}));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let shape = |ptr| SectionDetails::read_at(&ctx, Ptr(ptr)).expect("decodes").expect("set").entry_shape();

	assert!(matches!(shape(individual), EntryShape::Individual { south: Ptr(0x10), .. }));
	assert_eq!(
		shape(pairs),
		EntryShape::Pairs {
			north_south: Ptr(0x30),
			east_west: Ptr(0x40)
		}
	);
	assert_eq!(shape(teams), EntryShape::Teams { team_matches: Ptr(0x50) });
}

#[test]
fn decodes_pair_section_with_boards_and_mitchell() {
	let mut game = GameBuilder::new();
	let (details, boards) = pair_section(&mut game, false);
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let section = Section::read(&ctx, 1, summary(details, boards)).expect("section decodes").expect("slot used");
	assert_eq!(section.name(), "A");
	assert_eq!(section.entries.pair_count(), 2);
	assert_eq!(section.entries.pairs(Direction::EastWest).direction, Direction::EastWest);
	assert_eq!(section.boards.len(), 1);
	assert_eq!(section.boards.boards[0].entries.len(), 1);
	assert!(matches!(section.movement, Movement::Mitchell(_)));
}

#[test]
fn board_decoding_can_be_skipped() {
	let mut game = GameBuilder::new();
	let (details, boards) = pair_section(&mut game, false);
	let bytes = game.finish();
	let options = DecodeOptions::without_boards();
	let ctx = DecodeContext::new(&bytes, &options);

	let section = Section::read(&ctx, 1, summary(details, boards)).expect("section decodes").expect("slot used");
	assert!(section.boards.is_empty());
	assert_eq!(section.entries.pair_count(), 2);
}

#[test]
fn unused_slot_decodes_to_none() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	assert!(Section::read(&ctx, 3, summary(0, 0)).expect("unused").is_none());
}

#[test]
fn howell_section_is_unsupported() {
	let mut game = GameBuilder::new();
	let (details, boards) = pair_section(&mut game, true);
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = Section::read(&ctx, 1, summary(details, boards)).expect_err("howell");
	assert_eq!(err.kind(), ErrorKind::Unsupported);
}

#[test]
fn individual_and_team_sections_are_unsupported() {
	let mut game = GameBuilder::new();
	let individual = game.append(&section_details(&SectionSpec {
		south_players: 0x10,
		..SectionSpec::default()
	}));
	let teams = game.append(&section_details(&SectionSpec::default()));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = Section::read(&ctx, 1, summary(individual, 0)).expect_err("individual");
	assert!(matches!(err, GameError::Unsupported { feature: "individual-play section" }));
	let err = Section::read(&ctx, 2, summary(teams, 0)).expect_err("teams");
	assert!(matches!(err, GameError::Unsupported { feature: "team-play section" }));
}
