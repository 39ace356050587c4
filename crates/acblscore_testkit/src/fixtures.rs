//! Complete synthetic games shared by integration tests.

use crate::game::{EventSlot, GameBuilder, SectionSlot};
use crate::records::{
	BoardEntrySpec, EventSpec, PairSpec, PlayerSpec, SectionSpec, board_index, board_results, event_details, memo, mitchell_table, pair_details,
	pair_index, section_details,
};

/// Packed creation and modification time shared by the fixtures: 2025-03-03 14:30:20.
pub const FIXTURE_TIMESTAMP: u32 = 0x5A63_73CA;

fn player(first: &str, last: &str, number: &str) -> PlayerSpec {
	PlayerSpec {
		first: first.to_owned(),
		last: last.to_owned(),
		city: "Memphis".to_owned(),
		acbl_number: number.to_owned(),
		rank: 'C',
		total_mps: 52_075,
	}
}

fn pair(id: u16, percentage: i16, rank: u16, players: [PlayerSpec; 2]) -> PairSpec {
	PairSpec {
		id,
		session_score: i32::from(percentage) / 10,
		final_score: i32::from(percentage) / 10,
		percentage,
		boards_played: 2,
		current_award: if rank == 1 { 80 } else { 0 },
		section_ranks: [rank, rank, rank],
		players,
	}
}

fn line(table: u8, ns_pair: u16, ew_pair: u16, ns_score: i16, ns_mp: i32) -> BoardEntrySpec {
	BoardEntrySpec {
		round: table,
		table,
		ns_pair,
		ns_score,
		ns_matchpoints: ns_mp,
		ew_pair,
		ew_score: -ns_score,
		ew_matchpoints: 100 - ns_mp,
	}
}

/// Club pairs game: one matchpoint event with section `A`, two tables, two boards and a Mitchell table.
pub fn club_pair_game() -> Vec<u8> {
	let mut game = GameBuilder::new();

	let game_memo = game.append(&memo("Club championship qualifier"));
	let event_memo = game.append(&memo("Masterpoints doubled tonight"));
	let event = game.append(&event_details(&EventSpec {
		name: "Tuesday Open Pairs".to_owned(),
		session: "Evening".to_owned(),
		director: "Edgar Kaplan".to_owned(),
		club_name: "River City Bridge".to_owned(),
		club_number: "271828".to_owned(),
		memo: event_memo,
		p_factor: 100,
		strat_count: 3,
		modification_time: FIXTURE_TIMESTAMP,
		game_fee: 700,
		..EventSpec::default()
	}));

	let ns = [
		game.append(&pair_details(&pair(1, 6_250, 1, [player("Helen", "Sobel", "N111111"), player("Charles", "Goren", "N222222")]))),
		game.append(&pair_details(&pair(2, 3_750, 2, [player("Oswald", "Jacoby", "N333333"), player("Sam", "Stayman", "N444444")]))),
	];
	let ew = [
		game.append(&pair_details(&pair(1, 3_750, 2, [player("Edith", "Kemp", "E111111"), player("Howard", "Schenken", "E222222")]))),
		game.append(&pair_details(&pair(2, 6_250, 1, [player("Margaret", "Wagar", "E333333"), player("Peter", "Leventritt", "E444444")]))),
	];
	let ns_index = game.append(&pair_index(0, 2, &ns));
	let ew_index = game.append(&pair_index(1, 2, &ew));

	let movement = game.append(&mitchell_table(&[[1, 1, 2, 1], [2, 1, 1, 1]], &[[1, 0, 1, 0], [2, 0, 2, 0]]));
	let board_one = game.append(&board_results(1, 2, &[line(1, 1, 1, 420, 100), line(2, 2, 2, 170, 0)]));
	let board_two = game.append(&board_results(2, 2, &[line(1, 1, 2, -100, 25), line(2, 2, 1, -50, 75)]));
	let boards = game.append(&board_index(1, &[(1, board_one), (2, board_two)]));

	let details = game.append(&section_details(&SectionSpec {
		number: 1,
		ns_pairs: ns_index,
		ew_pairs: ew_index,
		boards_per_round: 1,
		rounds: 2,
		movement_name: "Mitchell 2".to_owned(),
		tables: 2,
		movement,
		..SectionSpec::default()
	}));

	game.event(0, EventSlot {
		details: event,
		kind: 0,
		scoring: 0,
	})
	.section(
		0,
		&SectionSlot {
			event: 1,
			name: "A".to_owned(),
			details,
			boards,
			total_mps: 160,
			rounds_posted: 2,
			rounds_total: 2,
		},
	)
	.memo_and_note(game_memo, 0)
	.versions(790, 700, FIXTURE_TIMESTAMP)
	.options(0b100, false);

	game.finish()
}
