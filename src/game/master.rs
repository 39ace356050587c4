use crate::game::bytes::Cursor;
use crate::game::decode::DecodeContext;
use crate::game::error::StageExt;
use crate::game::event::Event;
use crate::game::header::FileHeader;
use crate::game::layout::{EVENT_SLOTS, SECTION_SLOTS, master};
use crate::game::memo::read_memo;
use crate::game::scalar::{PackedDateTime, Ptr};
use crate::game::section::{Section, SectionSummary};
use crate::game::{Result, Stage};

/// Global option bits from the master table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct GlobalOptions(pub u8);

impl GlobalOptions {
	const BACKED_UP: u8 = 1 << 2;

	/// Return whether the game has been backed up.
	pub fn backed_up(self) -> bool {
		self.0 & Self::BACKED_UP != 0
	}
}

/// Root of a decoded game file.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MasterTable {
	/// File identifier, `AC3`.
	pub identifier: String,
	/// Declared master table length.
	pub declared_length: usize,
	/// Whole-file length.
	pub file_length: usize,
	/// First free block pointer.
	pub first_free_block: Ptr,
	/// Instant matchpoint table pointer.
	pub instant_matchpoints: Ptr,
	/// Score version that wrote the file.
	pub score_version: f64,
	/// Creation date.
	pub creation_date: PackedDateTime,
	/// Minimum score version able to read the file.
	pub min_score_version: f64,
	/// Global option bits.
	pub global_options: GlobalOptions,
	/// Results were imported from Bridgemate.
	pub bridgemate_import: bool,
	/// Game memo text.
	pub memo: String,
	/// Game note text.
	pub note: String,
	/// Used event slots in slot order.
	pub events: Vec<Event>,
	/// Used section slots in slot order.
	pub sections: Vec<Section>,
}

struct MasterFields {
	first_free_block: Ptr,
	instant_matchpoints: Ptr,
	event_ptrs: Vec<Ptr>,
	event_kinds: [u8; EVENT_SLOTS],
	scoring_methods: [u8; EVENT_SLOTS],
	summaries: Vec<SectionSummary>,
	memo: Ptr,
	note: Ptr,
	score_version: f64,
	creation_date: PackedDateTime,
	min_score_version: f64,
	global_options: u8,
	bridgemate_import: bool,
}

impl MasterFields {
	fn read(bytes: &[u8]) -> Result<Self> {
		let mut cursor = Cursor::at(bytes, master::FIRST_FREE_BLOCK)?;
		let first_free_block = cursor.read_ptr()?;
		let instant_matchpoints = cursor.read_ptr()?;

		cursor.seek(master::EVENT_POINTERS)?;
		let mut event_ptrs = Vec::with_capacity(EVENT_SLOTS);
		for _ in 0..EVENT_SLOTS {
			event_ptrs.push(cursor.read_ptr()?);
		}
		cursor.seek(master::EVENT_TYPES)?;
		let event_kinds = cursor.read_array()?;
		cursor.seek(master::SCORING_METHODS)?;
		let scoring_methods = cursor.read_array()?;

		cursor.seek(master::SECTION_SUMMARIES)?;
		let mut summaries = Vec::with_capacity(SECTION_SLOTS);
		for _ in 0..SECTION_SLOTS {
			summaries.push(SectionSummary::parse(&mut cursor)?);
		}

		cursor.seek(master::MEMO)?;
		let memo = cursor.read_ptr()?;
		cursor.seek(master::NOTE)?;
		let note = cursor.read_ptr()?;

		cursor.seek(master::SCORE_VERSION)?;
		let score_version = cursor.read_hundredths_i16()?;
		cursor.seek(master::CREATION_DATE)?;
		let creation_date = cursor.read_datetime()?;
		cursor.seek(master::MIN_SCORE_VERSION)?;
		let min_score_version = cursor.read_hundredths_i16()?;
		cursor.seek(master::GLOBAL_OPTIONS)?;
		let global_options = cursor.read_u8()?;
		cursor.seek(master::BRIDGEMATE_IMPORT)?;
		let bridgemate_import = cursor.read_u8()? == 1;

		Ok(Self {
			first_free_block,
			instant_matchpoints,
			event_ptrs,
			event_kinds,
			scoring_methods,
			summaries,
			memo,
			note,
			score_version,
			creation_date,
			min_score_version,
			global_options,
			bridgemate_import,
		})
	}
}

impl MasterTable {
	/// Validate the header and decode everything reachable from the master table.
	pub fn decode(ctx: &DecodeContext<'_>) -> Result<Self> {
		let header = FileHeader::parse(ctx.bytes, ctx.format).stage(Stage::MasterTable)?;
		let fields = MasterFields::read(ctx.bytes).stage(Stage::MasterTable)?;
		let memo = read_memo(ctx.bytes, fields.memo).stage(Stage::MasterTable)?;
		let note = read_memo(ctx.bytes, fields.note).stage(Stage::MasterTable)?;

		let mut events = Vec::new();
		for (idx, ptr) in fields.event_ptrs.iter().copied().enumerate() {
			let slot = idx + 1;
			let event = Event::read(ctx, slot, ptr, fields.event_kinds[idx], fields.scoring_methods[idx]).stage(Stage::Event(slot))?;
			events.extend(event);
		}

		let mut sections = Vec::new();
		for (idx, summary) in fields.summaries.into_iter().enumerate() {
			let slot = idx + 1;
			let section = Section::read(ctx, slot, summary).stage(Stage::Section(slot))?;
			sections.extend(section);
		}

		tracing::debug!(events = events.len(), sections = sections.len(), "decoded master table");

		Ok(Self {
			identifier: header.identifier_str(),
			declared_length: header.declared_length,
			file_length: header.file_length,
			first_free_block: fields.first_free_block,
			instant_matchpoints: fields.instant_matchpoints,
			score_version: fields.score_version,
			creation_date: fields.creation_date,
			min_score_version: fields.min_score_version,
			global_options: GlobalOptions(fields.global_options),
			bridgemate_import: fields.bridgemate_import,
			memo,
			note,
			events,
			sections,
		})
	}

	/// Event by 1-based slot number.
	pub fn event(&self, slot: usize) -> Option<&Event> {
		self.events.iter().find(|event| event.slot == slot)
	}

	/// Sections belonging to an event slot.
	pub fn sections_of(&self, event_slot: usize) -> impl Iterator<Item = &Section> {
		self.sections.iter().filter(move |section| usize::from(section.summary.event) == event_slot)
	}
}
