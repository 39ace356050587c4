use acblscore_testkit::{EventSpec, GameBuilder, StratSpec, event_details, memo};

use crate::game::decode::{DecodeContext, DecodeOptions};
use crate::game::event::{Event, EventKind, ScoringMethod};
use crate::game::scalar::Ptr;
use crate::game::{GameError, RecordKind};

fn spec(memo_ptr: u32) -> EventSpec {
	EventSpec {
		name: "Tuesday Open Pairs".to_owned(),
		session: "Evening".to_owned(),
		director: "H. Vanderbilt".to_owned(),
		club_name: "Bay Bridge Club".to_owned(),
		club_number: "123456".to_owned(),
		memo: memo_ptr,
		p_factor: 150,
		strat_count: 2,
		modification_time: 0x5A63_73CA,
		strats: [
			StratSpec {
				letter: 'A',
				..StratSpec::default()
			},
			StratSpec {
				letter: 'B',
				min_mps: 750,
				..StratSpec::default()
			},
			StratSpec {
				letter: 'C',
				..StratSpec::default()
			},
		],
		multi_site_factor: [0; 6],
		game_fee: 1_250,
	}
}

#[test]
fn decodes_event_with_memo_and_strats() {
	let mut game = GameBuilder::new();
	let memo_ptr = game.append(&memo("Pizza after the game"));
	let ptr = game.append(&event_details(&spec(memo_ptr)));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let event = Event::read(&ctx, 1, Ptr(ptr), 0, 0).expect("event decodes").expect("slot used");
	assert_eq!(event.slot, 1);
	assert_eq!(event.kind, EventKind::Pairs);
	assert_eq!(event.scoring, ScoringMethod::Matchpoints);

	let details = &event.details;
	assert_eq!(details.name, "Tuesday Open Pairs");
	assert_eq!(details.director, "H. Vanderbilt");
	assert_eq!(details.club_number, "123456");
	assert_eq!(details.memo, "Pizza after the game");
	assert!((details.p_factor - 1.5).abs() < 1e-9);
	assert!((details.game_fee - 12.5).abs() < 1e-9);
	assert_eq!(details.total_sessions, 1);
	assert_eq!(details.modification_time.to_string(), "2025-03-03T14:30:20");
	assert_eq!(details.strats.len(), 3);
	assert_eq!(details.active_strats().len(), 2);
	assert_eq!(details.strats[1].min_mps, 750);
	assert_eq!(details.multi_site_factor, 0.0);
}

#[test]
fn empty_event_slot_is_none() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	assert!(Event::read(&ctx, 4, Ptr::NULL, 1, 7).expect("null slot").is_none());
}

#[test]
fn event_without_memo_has_empty_text() {
	let mut game = GameBuilder::new();
	let ptr = game.append(&event_details(&spec(0)));
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let event = Event::read(&ctx, 1, Ptr(ptr), 1, 2).expect("event decodes").expect("slot used");
	assert_eq!(event.details.memo, "");
	assert_eq!(event.kind, EventKind::Teams);
	assert!(event.scoring.is_imps());
}

#[test]
fn unknown_codes_are_kept() {
	assert_eq!(EventKind::from_code(9), EventKind::Unknown(9));
	assert_eq!(ScoringMethod::from_code(11), ScoringMethod::Unknown(11));
	assert_eq!(ScoringMethod::from_code(18), ScoringMethod::CompactKnockout);
	assert_eq!(EventKind::from_code(4).to_string(), "board-a-match teams");
}

#[test]
fn short_event_record_is_rejected() {
	let mut record = event_details(&spec(0));
	record[0] = 0x6C;
	let mut game = GameBuilder::new();
	let ptr = game.append(&record);
	let bytes = game.finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);

	let err = Event::read(&ctx, 1, Ptr(ptr), 0, 0).expect_err("wrong length");
	assert!(matches!(
		err,
		GameError::RecordLength {
			kind: RecordKind::EventDetails,
			expected: 365,
			got: 364,
			..
		}
	));
}
