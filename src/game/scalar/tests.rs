use crate::game::scalar::{PackedDateTime, Ptr, Scale, real48_to_f64};

#[test]
fn zero_word_is_dos_epoch() {
	let dt = PackedDateTime::from_word(0);
	assert_eq!(dt.to_string(), "1980-01-01T00:00:00");
}

#[test]
fn packed_word_unpacks_each_field() {
	// 2025-03-03, 14:30 with a stored seconds field of 10.
	let dt = PackedDateTime::from_word(0x5A63_73CA);
	assert_eq!((dt.year, dt.month, dt.day), (2025, 3, 3));
	assert_eq!((dt.hour, dt.minute, dt.second), (14, 30, 20));
	assert_eq!(dt.raw, 0x5A63_73CA);
}

#[test]
fn seconds_drop_the_high_bit_of_the_shifted_time() {
	// Minute 31 sets bit 5 of the time word, which the shift pushes out of the 6-bit mask.
	let time = (31_u32 << 5) | 3;
	let dt = PackedDateTime::from_word(time);
	assert_eq!(dt.minute, 31);
	assert_eq!(dt.second, 6);
}

#[test]
fn scales_divide_raw_values() {
	assert!((Scale::Hundredths.apply(1234) - 12.34).abs() < 1e-9);
	assert!((Scale::Tenths.apply(-50) - -5.0).abs() < 1e-9);
	assert!((Scale::TenThousandths.apply(12_500) - 1.25).abs() < 1e-9);
}

#[test]
fn real48_zero_exponent_ignores_sign_and_mantissa() {
	assert_eq!(real48_to_f64([0; 6]), 0.0);
	assert_eq!(real48_to_f64([0, 0x80, 0, 0, 0, 0]), 0.0);
	assert_eq!(real48_to_f64([0, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]), 0.0);
}

#[test]
fn real48_applies_exponent_bias_and_sign() {
	assert_eq!(real48_to_f64([129, 0x40, 0, 0, 0, 0]), 0.5);
	assert_eq!(real48_to_f64([130, 0xC0, 0, 0, 0, 0]), -1.0);
}

#[test]
fn null_pointer_has_no_offset() {
	assert!(Ptr::NULL.is_null());
	assert_eq!(Ptr::NULL.offset(), None);
	assert_eq!(Ptr(0x40).offset(), Some(0x40));
	assert_eq!(Ptr(0x40).to_string(), "0x00000040");
}
