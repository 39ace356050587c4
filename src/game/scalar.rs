use std::fmt;

/// Absolute byte offset into the game file buffer.
///
/// Zero is the absent sentinel and must never be dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Ptr(pub u32);

impl Ptr {
	/// The absent pointer.
	pub const NULL: Self = Self(0);

	/// Return whether this pointer is the absent sentinel.
	pub fn is_null(self) -> bool {
		self.0 == 0
	}

	/// Return the pointer as a buffer offset, or `None` when absent.
	pub fn offset(self) -> Option<usize> {
		if self.is_null() { None } else { Some(self.0 as usize) }
	}
}

impl fmt::Display for Ptr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{:08x}", self.0)
	}
}

/// Fixed-point scales used by the format's scaled integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
	/// Divide by 10.
	Tenths,
	/// Divide by 100.
	Hundredths,
	/// Divide by 10000.
	TenThousandths,
}

impl Scale {
	/// Divisor applied to the raw integer.
	pub fn divisor(self) -> f64 {
		match self {
			Self::Tenths => 10.0,
			Self::Hundredths => 100.0,
			Self::TenThousandths => 10_000.0,
		}
	}

	/// Apply this scale to a raw integer.
	pub fn apply(self, raw: i32) -> f64 {
		f64::from(raw) / self.divisor()
	}
}

/// Date and time unpacked from a 32-bit DOS-style word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PackedDateTime {
	/// Raw little-endian word as stored.
	pub raw: u32,
	/// Calendar year.
	pub year: u16,
	/// Month, 1-12 for well-formed words.
	pub month: u8,
	/// Day of month.
	pub day: u8,
	/// Hour of day.
	pub hour: u8,
	/// Minute.
	pub minute: u8,
	/// Second as the format encodes it.
	pub second: u8,
}

impl PackedDateTime {
	/// Unpack a stored word. High 16 bits hold the date, low 16 bits the time.
	pub fn from_word(raw: u32) -> Self {
		let date = raw >> 16;
		let time = raw & 0xFFFF;

		let year = ((date >> 9) + 1980) as u16;
		let month = ((date >> 5) & 0x0F) as u8;
		let day = (date & 0x1F) as u8;

		let hour = (time >> 11) as u8;
		let minute = ((time >> 5) & 0x3F) as u8;
		// Mirrors the stored encoding, not the usual `(time & 0x1F) << 1`.
		let second = ((time << 1) & 0x3F) as u8;

		Self {
			raw,
			year,
			month: month.max(1),
			day: day.max(1),
			hour,
			minute,
			second,
		}
	}
}

impl fmt::Display for PackedDateTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
			self.year, self.month, self.day, self.hour, self.minute, self.second
		)
	}
}

/// Decode a six-byte Turbo Pascal `real`.
///
/// Byte 0 is the biased exponent. The top bit of byte 1 is the sign and the remaining 39 bits of bytes 1-5
/// are the mantissa, most significant first. Unverified against non-zero fixture data.
pub fn real48_to_f64(raw: [u8; 6]) -> f64 {
	let exponent = raw[0];
	if exponent == 0 {
		return 0.0;
	}

	let negative = raw[1] & 0x80 != 0;
	let mut mantissa = u64::from(raw[1] & 0x7F);
	for byte in &raw[2..] {
		mantissa = (mantissa << 8) | u64::from(*byte);
	}

	let value = (mantissa as f64 / (1_u64 << 39) as f64) * 2_f64.powi(i32::from(exponent) - 129);
	if negative { -value } else { value }
}

#[cfg(test)]
mod tests;
