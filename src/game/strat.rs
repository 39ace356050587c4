use crate::game::Result;
use crate::game::bytes::Cursor;
use crate::game::layout::PIGMENTATION_TIERS;

/// How one award breakdown is split between masterpoint colours.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MpPigmentation {
	/// Primary colour code.
	pub primary_color: u8,
	/// Secondary colour code.
	pub secondary_color: u8,
	/// Percentage of the award in the primary colour.
	pub primary_share: f64,
	/// Ranks that earn this colour split.
	pub depth: u8,
	/// Breakdown is in use.
	pub active: bool,
}

impl MpPigmentation {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 6;

	/// Parse a pigmentation breakdown at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			primary_color: cursor.read_u8()?,
			secondary_color: cursor.read_u8()?,
			primary_share: cursor.read_hundredths_i16()?,
			depth: cursor.read_u8()?,
			active: cursor.read_bool()?,
		})
	}
}

/// Qualification and award rules for one stratification tier of an event.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StratStructure {
	/// Masterpoints for first place.
	pub mps_for_first: f64,
	/// Ribbon colour code.
	pub ribbon_color: u8,
	/// Ribbon depth.
	pub ribbon_depth: u8,
	/// Masterpoint factor. Stored as a six-byte Pascal real.
	pub mp_factor: f64,
	/// Rank depth.
	pub rank_depth: u8,
	/// Tables assumed when computing awards.
	pub tables_assumed: u8,
	/// Rank to omit.
	pub rank_to_omit: u8,
	/// Minimum masterpoints to enter the strat.
	pub min_mps: u16,
	/// Masterpoint cutoff.
	pub mp_cutoff: u16,
	/// Strat letter.
	pub letter: char,
	/// Percentage of the open rating.
	pub percent_of_open_rating: u8,
	/// Event M factor.
	pub event_m_factor: f64,
	/// Session M factor.
	pub session_m_factor: f64,
	/// Overall, session and section pigmentation.
	pub pigmentation: [MpPigmentation; PIGMENTATION_TIERS],
}

impl StratStructure {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 45;

	/// Parse a strat at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			mps_for_first: cursor.read_hundredths_i16()?,
			ribbon_color: cursor.read_u8()?,
			ribbon_depth: cursor.read_u8()?,
			mp_factor: cursor.read_real48()?,
			rank_depth: cursor.read_u8()?,
			tables_assumed: cursor.read_u8()?,
			rank_to_omit: cursor.read_u8()?,
			min_mps: cursor.read_u16_le()?,
			mp_cutoff: cursor.read_u16_le()?,
			letter: cursor.read_char()?,
			percent_of_open_rating: cursor.read_u8()?,
			event_m_factor: cursor.read_ten_thousandths_i32()?,
			session_m_factor: cursor.read_ten_thousandths_i32()?,
			pigmentation: cursor.parse_fixed(MpPigmentation::parse)?,
		})
	}

	/// Pigmentation breakdowns that are switched on.
	pub fn active_pigmentation(&self) -> impl Iterator<Item = &MpPigmentation> {
		self.pigmentation.iter().filter(|tier| tier.active)
	}
}
