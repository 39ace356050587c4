/// Little-endian byte sink with in-place patching.
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
	buf: Vec<u8>,
}

impl ByteWriter {
	/// Create an empty writer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current length in bytes.
	pub fn pos(&self) -> usize {
		self.buf.len()
	}

	/// Append one byte.
	pub fn u8(&mut self, value: u8) -> &mut Self {
		self.buf.push(value);
		self
	}

	/// Append a boolean byte.
	pub fn bool(&mut self, value: bool) -> &mut Self {
		self.u8(u8::from(value))
	}

	/// Append a single-byte character.
	pub fn char(&mut self, value: char) -> &mut Self {
		self.u8(value as u8)
	}

	/// Append a little-endian `u16`.
	pub fn u16(&mut self, value: u16) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a little-endian `i16`.
	pub fn i16(&mut self, value: i16) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a little-endian `u32`.
	pub fn u32(&mut self, value: u32) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append a little-endian `i32`.
	pub fn i32(&mut self, value: i32) -> &mut Self {
		self.bytes(&value.to_le_bytes())
	}

	/// Append raw bytes.
	pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
		self.buf.extend_from_slice(value);
		self
	}

	/// Append `n` zero bytes.
	pub fn zeros(&mut self, n: usize) -> &mut Self {
		self.buf.resize(self.buf.len() + n, 0);
		self
	}

	/// Append a length-prefixed string padded to a `1 + width` byte field.
	pub fn pstr(&mut self, text: &str, width: usize) -> &mut Self {
		let raw = text.as_bytes();
		assert!(raw.len() <= width, "{text:?} does not fit a {width}-byte field");
		self.u8(raw.len() as u8);
		self.bytes(raw);
		self.zeros(width - raw.len())
	}

	/// Overwrite one byte at `at`.
	pub fn patch_u8(&mut self, at: usize, value: u8) -> &mut Self {
		self.buf[at] = value;
		self
	}

	/// Overwrite a little-endian `u16` at `at`.
	pub fn patch_u16(&mut self, at: usize, value: u16) -> &mut Self {
		self.buf[at..at + 2].copy_from_slice(&value.to_le_bytes());
		self
	}

	/// Overwrite a little-endian `u32` at `at`.
	pub fn patch_u32(&mut self, at: usize, value: u32) -> &mut Self {
		self.buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
		self
	}

	/// Borrow the written bytes.
	pub fn as_slice(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the writer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}
}
