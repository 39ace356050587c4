use acblscore_testkit::{BoardEntrySpec, GameBuilder, board_index, board_results};

use crate::game::board::{BoardList, BoardResults};
use crate::game::decode::{DecodeContext, DecodeOptions};
use crate::game::scalar::Ptr;
use crate::game::{GameError, Stage};

fn entry(round: u8, ns_pair: u16, ew_pair: u16, ns_score: i16, ns_mp: i32) -> BoardEntrySpec {
	BoardEntrySpec {
		round,
		table: round,
		ns_pair,
		ns_score,
		ns_matchpoints: ns_mp,
		ew_pair,
		ew_score: -ns_score,
		ew_matchpoints: 200 - ns_mp,
	}
}

fn two_board_game(second_id: u16) -> (Vec<u8>, u32) {
	let mut game = GameBuilder::new();
	let first = game.append(&board_results(1, 2, &[entry(1, 1, 2, 420, 150), entry(2, 3, 4, -50, 50)]));
	let second = game.append(&board_results(second_id, 1, &[entry(1, 1, 4, 110, 100)]));
	let index = game.append(&board_index(1, &[(1, first), (2, second), (3, 0)]));
	(game.finish(), index)
}

#[test]
fn decodes_board_index_and_results() {
	let (bytes, index) = two_board_game(2);
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let boards = BoardList::read_at(&ctx, Ptr(index)).expect("boards decode");

	assert_eq!(boards.section_number, 1);
	assert_eq!(boards.len(), 3);
	let first = boards.board(1).expect("board 1");
	assert_eq!(first.competitive_units, 2);
	assert_eq!(first.valid_results(), 2);
	assert_eq!(first.entries[1].ns_score, -50);
	assert!((first.entries[0].ns_matchpoints - 1.5).abs() < 1e-9);
	assert!((first.entries[0].ew_matchpoints - 0.5).abs() < 1e-9);

	assert_eq!(boards.board(3), Some(&BoardResults::unplayed(3)));
}

#[test]
fn null_board_index_is_empty() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let boards = BoardList::read_at(&ctx, Ptr::NULL).expect("null index");
	assert!(boards.is_empty());
}

#[test]
fn index_number_wins_over_results_id() {
	let (bytes, index) = two_board_game(9);
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let boards = BoardList::read_at(&ctx, Ptr(index)).expect("mismatch is soft");

	let second = &boards.boards[1];
	assert_eq!(second.number, 2);
	assert_eq!(second.recorded_id, 9);
}

#[test]
fn strict_mode_rejects_id_mismatch_with_board_stage() {
	let (bytes, index) = two_board_game(9);
	let options = DecodeOptions {
		strict_board_ids: true,
		..DecodeOptions::default()
	};
	let ctx = DecodeContext::new(&bytes, &options);
	let err = BoardList::read_at(&ctx, Ptr(index)).expect_err("strict mismatch");

	assert_eq!(err.stages(), vec![Stage::Board(2)]);
	assert!(matches!(err.root(), GameError::BoardIdMismatch { index: 2, record: 9 }));
}
