use acblscore_testkit::{ByteWriter, GameBuilder, board_index, mitchell_table};

use crate::game::bytes::Cursor;
use crate::game::decode::{DecodeContext, DecodeOptions, Record};
use crate::game::layout::{FormatVersion, RecordKind};
use crate::game::scalar::Ptr;
use crate::game::GameError;

#[test]
fn fixed_record_with_wrong_length_is_rejected_on_open() {
	let mut w = ByteWriter::new();
	w.u16(300).zeros(300);
	let err = Record::open(Cursor::new(w.as_slice()), FormatVersion::AC3, RecordKind::MitchellTable).expect_err("wrong length");
	assert!(matches!(
		err,
		GameError::RecordLength {
			kind: RecordKind::MitchellTable,
			expected: 320,
			got: 300,
			at: 0,
		}
	));
}

#[test]
fn counted_record_validates_after_count_is_read() {
	let bytes = board_index(1, &[(1, 0), (2, 0)]);
	let mut record = Record::open(Cursor::new(&bytes), FormatVersion::AC3, RecordKind::BoardIndex).expect("counted open");
	assert_eq!(record.end(), 2 + 3 + 12);

	record.expect_count(2).expect("two boards fit");
	let err = record.expect_count(3).expect_err("three boards do not");
	assert!(matches!(err, GameError::RecordLength { expected: 21, got: 15, .. }));
}

#[test]
fn finish_skips_reserved_tail() {
	let mut game = GameBuilder::new();
	let ptr = game.append(&mitchell_table(&[[1, 0, 2, 1]], &[]));
	let bytes = game.finish();

	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let mut record = ctx.record(Ptr(ptr), RecordKind::MitchellTable).expect("opens").expect("pointer set");
	assert_eq!(record.cursor().read_u8().expect("first byte"), 1);
	let end = record.end();
	record.finish().expect("stayed inside");
	assert_eq!(end, bytes.len());
}

#[test]
fn finish_reports_overrun() {
	let mut w = ByteWriter::new();
	w.u16(3).u8(1).u16(0).u32(0);
	let mut record = Record::open(Cursor::new(w.as_slice()), FormatVersion::AC3, RecordKind::BoardIndex).expect("opens");
	record.cursor().skip(7).expect("bytes exist past end");
	let err = record.finish().expect_err("overran");
	assert!(matches!(
		err,
		GameError::RecordOverrun {
			kind: RecordKind::BoardIndex,
			end: 5,
			pos: 9,
			..
		}
	));
}

#[test]
fn null_pointer_opens_nothing() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	assert!(ctx.record(Ptr::NULL, RecordKind::PairIndex).expect("null is fine").is_none());
}

#[test]
fn pointer_past_the_buffer_is_a_bounds_error() {
	let bytes = GameBuilder::new().finish();
	let options = DecodeOptions::default();
	let ctx = DecodeContext::new(&bytes, &options);
	let err = ctx.record(Ptr(bytes.len() as u32 + 10), RecordKind::PairIndex).expect_err("out of range");
	assert!(matches!(err, GameError::UnexpectedEof { .. }));
}

#[test]
fn without_boards_preset_keeps_other_defaults() {
	let options = DecodeOptions::without_boards();
	assert!(!options.decode_boards);
	assert!(!options.strict_board_ids);
	assert!(DecodeOptions::default().decode_boards);
}
