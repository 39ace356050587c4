use acblscore_testkit::{GameBuilder, PairSpec, PlayerSpec, pair_details, pair_index};

use crate::game::decode::{DecodeContext, DecodeOptions};
use crate::game::pair::{Direction, PairList};
use crate::game::scalar::Ptr;
use crate::game::{GameError, Stage};

fn player(first: &str, last: &str) -> PlayerSpec {
	PlayerSpec {
		first: first.to_owned(),
		last: last.to_owned(),
		..PlayerSpec::default()
	}
}

fn pair(id: u16, percentage: i16) -> PairSpec {
	PairSpec {
		id,
		session_score: 5_650,
		final_score: 5_650,
		percentage,
		boards_played: 24,
		current_award: 125,
		section_ranks: [1, 2, 0],
		players: [player("Ely", "Culbertson"), player("Josephine", "Culbertson")],
	}
}

#[test]
fn decodes_pairs_and_skips_vacant_numbers() {
	let mut game = GameBuilder::new();
	let one = game.append(&pair_details(&pair(1, 5_432)));
	let three = game.append(&pair_details(&pair(3, 4_875)));
	let index = game.append(&pair_index(0, 2, &[one, 0, three]));
	let bytes = game.finish();

	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let list = PairList::read_at(&ctx, Ptr(index), Direction::NorthSouth).expect("pairs decode");

	assert_eq!(list.direction, Direction::NorthSouth);
	assert_eq!(list.pairs.len(), 2);
	assert!(list.pair(2).is_none());

	let first = list.pair(1).expect("pair 1");
	assert!((first.percentage - 54.32).abs() < 1e-9);
	assert!((first.session_score - 56.5).abs() < 1e-9);
	assert_eq!(first.boards_played, 24);
	assert_eq!(first.strat, 'A');
	assert!((first.current_session_award() - 1.25).abs() < 1e-9);
	assert_eq!(first.awards.len(), 3);
	assert_eq!(first.rankings.len(), 3);
	assert!(first.rankings[0].qualified);
	assert_eq!(first.rankings[1].section_rank, 2);
	assert_eq!(first.names(), "Ely Culbertson & Josephine Culbertson");
}

#[test]
fn null_pair_index_is_empty_list() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let list = PairList::read_at(&ctx, Ptr::NULL, Direction::EastWest).expect("null index");
	assert_eq!(list, PairList::empty(Direction::EastWest));
}

#[test]
fn wrong_direction_code_is_rejected() {
	let mut game = GameBuilder::new();
	let index = game.append(&pair_index(1, 2, &[]));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = PairList::read_at(&ctx, Ptr(index), Direction::NorthSouth).expect_err("EW index in NS slot");
	assert!(matches!(
		err,
		GameError::InvalidField {
			field: "pair index direction",
			value: 1,
			..
		}
	));
}

#[test]
fn players_per_entry_must_be_two() {
	let mut game = GameBuilder::new();
	let index = game.append(&pair_index(0, 1, &[]));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = PairList::read_at(&ctx, Ptr(index), Direction::NorthSouth).expect_err("individual entry");
	assert!(matches!(
		err,
		GameError::InvalidField {
			field: "players per entry",
			value: 1,
			..
		}
	));
}

#[test]
fn bad_pair_record_reports_pair_stage() {
	let mut game = GameBuilder::new();
	let one = game.append(&pair_details(&pair(1, 5_000)));
	let mut broken = pair_details(&pair(2, 5_000));
	broken[0] = 0x10;
	let two = game.append(&broken);
	let index = game.append(&pair_index(1, 2, &[one, two]));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = PairList::read_at(&ctx, Ptr(index), Direction::EastWest).expect_err("bad length");
	assert_eq!(err.stages(), vec![Stage::Pair(2)]);
	assert!(matches!(err.root(), GameError::RecordLength { got: 0x110, expected: 274, .. }));
}
