use crate::game::scalar::{PackedDateTime, Ptr, Scale, real48_to_f64};
use crate::game::{GameError, Result};

/// Simple bounded cursor over the immutable file buffer.
///
/// Offsets are always absolute positions in the whole file, so the position after a read is the next
/// field's offset.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Create a cursor at an absolute offset.
	pub fn at(bytes: &'a [u8], offset: usize) -> Result<Self> {
		if offset > bytes.len() {
			return Err(GameError::UnexpectedEof {
				at: offset,
				need: offset - bytes.len(),
				rem: 0,
			});
		}
		Ok(Self { bytes, pos: offset })
	}

	/// Follow a pointer, returning `None` without reading anything when it is absent.
	pub fn deref(bytes: &'a [u8], ptr: Ptr) -> Result<Option<Self>> {
		match ptr.offset() {
			Some(offset) => Self::at(bytes, offset).map(Some),
			None => Ok(None),
		}
	}

	/// Return the whole underlying buffer.
	pub fn buffer(&self) -> &'a [u8] {
		self.bytes
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move to an absolute offset.
	pub fn seek(&mut self, offset: usize) -> Result<()> {
		if offset > self.bytes.len() {
			return Err(GameError::UnexpectedEof {
				at: offset,
				need: offset - self.bytes.len(),
				rem: 0,
			});
		}
		self.pos = offset;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(GameError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Skip `n` bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		self.read_exact(n).map(|_| ())
	}

	/// Read a fixed number of bytes into an array.
	pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read a `u8`.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read an `i8`.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_le_bytes(self.read_array()?))
	}

	/// Read a single-byte character.
	pub fn read_char(&mut self) -> Result<char> {
		Ok(char::from(self.read_u8()?))
	}

	/// Read a boolean byte; any non-zero value is true.
	pub fn read_bool(&mut self) -> Result<bool> {
		Ok(self.read_u8()? != 0)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		Ok(u16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i16`.
	pub fn read_i16_le(&mut self) -> Result<i16> {
		Ok(i16::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		Ok(u32::from_le_bytes(self.read_array()?))
	}

	/// Read a little-endian `i32`.
	pub fn read_i32_le(&mut self) -> Result<i32> {
		Ok(i32::from_le_bytes(self.read_array()?))
	}

	/// Read an absolute-offset pointer.
	pub fn read_ptr(&mut self) -> Result<Ptr> {
		self.read_u32_le().map(Ptr)
	}

	/// Read a signed 16-bit value in tenths.
	pub fn read_tenths_i16(&mut self) -> Result<f64> {
		Ok(Scale::Tenths.apply(i32::from(self.read_i16_le()?)))
	}

	/// Read a signed 16-bit value in hundredths.
	pub fn read_hundredths_i16(&mut self) -> Result<f64> {
		Ok(Scale::Hundredths.apply(i32::from(self.read_i16_le()?)))
	}

	/// Read a signed 32-bit value in hundredths.
	pub fn read_hundredths_i32(&mut self) -> Result<f64> {
		Ok(Scale::Hundredths.apply(self.read_i32_le()?))
	}

	/// Read a signed 32-bit value in ten-thousandths.
	pub fn read_ten_thousandths_i32(&mut self) -> Result<f64> {
		Ok(Scale::TenThousandths.apply(self.read_i32_le()?))
	}

	/// Read a six-byte Pascal real.
	pub fn read_real48(&mut self) -> Result<f64> {
		Ok(real48_to_f64(self.read_array()?))
	}

	/// Read a packed date/time word.
	pub fn read_datetime(&mut self) -> Result<PackedDateTime> {
		Ok(PackedDateTime::from_word(self.read_u32_le()?))
	}

	/// Parse exactly `N` consecutive embedded records.
	pub fn parse_fixed<T, const N: usize>(&mut self, mut parse: impl FnMut(&mut Self) -> Result<T>) -> Result<[T; N]> {
		let at = self.pos;
		let mut items = Vec::with_capacity(N);
		for _ in 0..N {
			items.push(parse(self)?);
		}
		items.try_into().map_err(|items: Vec<T>| GameError::InvalidField {
			field: "record arity",
			value: items.len() as u32,
			at,
		})
	}

	/// Read a length-prefixed string stored in a `1 + width` byte field.
	///
	/// The cursor always advances past the whole field.
	pub fn read_pstring(&mut self, width: usize) -> Result<String> {
		let at = self.pos;
		let field = self.read_exact(1 + width)?;
		let len = usize::from(field[0]);
		if len > width {
			return Err(GameError::StringOverflow { at, len, width });
		}
		Ok(String::from_utf8_lossy(&field[1..1 + len]).into_owned())
	}
}
