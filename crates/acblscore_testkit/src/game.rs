use crate::writer::ByteWriter;

/// Size of the master table including its length word.
pub const MASTER_SIZE: usize = 0xA14;

/// Master table offsets used by [`GameBuilder`].
pub mod offsets {
	/// Declared master length.
	pub const LENGTH: usize = 0x000;
	/// File identifier.
	pub const IDENTIFIER: usize = 0x002;
	/// Whole-file length.
	pub const FILE_LENGTH: usize = 0x005;
	/// Event pointer array.
	pub const EVENT_POINTERS: usize = 0x011;
	/// Event type array.
	pub const EVENT_TYPES: usize = 0x0DA;
	/// Scoring method array.
	pub const SCORING_METHODS: usize = 0x10C;
	/// Section summary array.
	pub const SECTION_SUMMARIES: usize = 0x13E;
	/// Section summary entry size.
	pub const SECTION_SUMMARY_SIZE: usize = 20;
	/// Memo pointer.
	pub const MEMO: usize = 0x90E;
	/// Note pointer.
	pub const NOTE: usize = 0x912;
	/// Score version.
	pub const SCORE_VERSION: usize = 0x9DB;
	/// Creation date.
	pub const CREATION_DATE: usize = 0x9DD;
	/// Minimum score version.
	pub const MIN_SCORE_VERSION: usize = 0x9E1;
	/// Global options.
	pub const GLOBAL_OPTIONS: usize = 0x9EC;
	/// Bridgemate import flag.
	pub const BRIDGEMATE_IMPORT: usize = 0xA13;
}

/// Event slot contents.
#[derive(Debug, Clone, Copy)]
pub struct EventSlot {
	/// Event details pointer.
	pub details: u32,
	/// Event type code.
	pub kind: u8,
	/// Scoring method code.
	pub scoring: u8,
}

/// Section summary slot contents.
#[derive(Debug, Clone, Default)]
pub struct SectionSlot {
	/// Owning event slot, 1-based.
	pub event: u8,
	/// Section letters.
	pub name: String,
	/// Section details pointer.
	pub details: u32,
	/// Board index pointer.
	pub boards: u32,
	/// Total MP score, hundredths.
	pub total_mps: i32,
	/// Rounds posted.
	pub rounds_posted: u8,
	/// Total rounds.
	pub rounds_total: u8,
}

/// Assembles a whole game file: a zeroed master table followed by appended records.
#[derive(Debug, Clone)]
pub struct GameBuilder {
	out: ByteWriter,
}

impl Default for GameBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl GameBuilder {
	/// Start with a valid, empty master table (length 2578, identifier `AC3`).
	pub fn new() -> Self {
		let mut out = ByteWriter::new();
		out.zeros(MASTER_SIZE);
		out.patch_u16(offsets::LENGTH, (MASTER_SIZE - 2) as u16);
		let mut builder = Self { out };
		builder.identifier(*b"AC3");
		builder
	}

	/// Overwrite the file identifier.
	pub fn identifier(&mut self, id: [u8; 3]) -> &mut Self {
		for (idx, byte) in id.into_iter().enumerate() {
			self.out.patch_u8(offsets::IDENTIFIER + idx, byte);
		}
		self
	}

	/// Append a record and return its absolute offset for use as a pointer.
	pub fn append(&mut self, record: &[u8]) -> u32 {
		let at = self.out.pos() as u32;
		self.out.bytes(record);
		at
	}

	/// Fill an event slot (0-based index).
	pub fn event(&mut self, slot: usize, event: EventSlot) -> &mut Self {
		self.out.patch_u32(offsets::EVENT_POINTERS + 4 * slot, event.details);
		self.out.patch_u8(offsets::EVENT_TYPES + slot, event.kind);
		self.out.patch_u8(offsets::SCORING_METHODS + slot, event.scoring);
		self
	}

	/// Fill a section summary slot (0-based index).
	pub fn section(&mut self, slot: usize, section: &SectionSlot) -> &mut Self {
		let mut entry = ByteWriter::new();
		entry
			.u8(section.event)
			.pstr(&section.name, 2)
			.u32(section.details)
			.u32(section.boards)
			.i32(section.total_mps)
			.u8(0)
			.u8(section.rounds_posted)
			.u8(section.rounds_total)
			.u8(0);
		let at = offsets::SECTION_SUMMARIES + offsets::SECTION_SUMMARY_SIZE * slot;
		for (idx, byte) in entry.as_slice().iter().enumerate() {
			self.out.patch_u8(at + idx, *byte);
		}
		self
	}

	/// Set the memo and note pointers.
	pub fn memo_and_note(&mut self, memo: u32, note: u32) -> &mut Self {
		self.out.patch_u32(offsets::MEMO, memo);
		self.out.patch_u32(offsets::NOTE, note);
		self
	}

	/// Set version fields, hundredths, and the packed creation date.
	pub fn versions(&mut self, version: u16, min_version: u16, created: u32) -> &mut Self {
		self.out.patch_u16(offsets::SCORE_VERSION, version);
		self.out.patch_u32(offsets::CREATION_DATE, created);
		self.out.patch_u16(offsets::MIN_SCORE_VERSION, min_version);
		self
	}

	/// Set global option bits and the Bridgemate import flag.
	pub fn options(&mut self, global: u8, bridgemate: bool) -> &mut Self {
		self.out.patch_u8(offsets::GLOBAL_OPTIONS, global);
		self.out.patch_u8(offsets::BRIDGEMATE_IMPORT, u8::from(bridgemate));
		self
	}

	/// Bytes written so far, without fixing up the file length.
	pub fn raw(&self) -> &[u8] {
		self.out.as_slice()
	}

	/// Patch the file length field and return the finished file.
	pub fn finish(&self) -> Vec<u8> {
		let mut out = self.out.clone();
		let len = out.pos() as u32;
		out.patch_u32(offsets::FILE_LENGTH, len);
		out.into_bytes()
	}
}
