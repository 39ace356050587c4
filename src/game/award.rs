use crate::game::Result;
use crate::game::bytes::Cursor;
use crate::game::layout::AWARD_TIERS;

/// One award tier: points, colour code and rank type.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct AwardTier {
	/// Masterpoints awarded.
	pub points: f64,
	/// Pigmentation colour code.
	pub color: u8,
	/// Rank type that earned the award.
	pub rank_type: u8,
}

/// Masterpoint award split into first, second and third tiers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct MpAward {
	/// Award tiers in order.
	pub tiers: [AwardTier; AWARD_TIERS],
}

impl MpAward {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 12;

	/// Parse an award at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut tiers = [AwardTier {
			points: 0.0,
			color: 0,
			rank_type: 0,
		}; AWARD_TIERS];
		for tier in &mut tiers {
			*tier = AwardTier {
				points: cursor.read_hundredths_i16()?,
				color: cursor.read_u8()?,
				rank_type: cursor.read_u8()?,
			};
		}
		Ok(Self { tiers })
	}

	/// Sum of all tier points.
	pub fn total_points(&self) -> f64 {
		self.tiers.iter().map(|tier| tier.points).sum()
	}
}

/// Link to the next lower-ranked entry, kept as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RankLink {
	/// Entry index.
	pub index: u16,
	/// Section slot.
	pub section: u8,
	/// Direction code.
	pub direction: u8,
}

impl RankLink {
	fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			index: cursor.read_u16_le()?,
			section: cursor.read_u8()?,
			direction: cursor.read_u8()?,
		})
	}
}

/// Section and overall placing for one strat tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Ranking {
	/// Section rank among MP winners.
	pub section_rank: u16,
	/// Section rank is tied.
	pub section_tie: bool,
	/// Overall rank among MP winners.
	pub overall_rank_with_mps: u16,
	/// Overall rank is tied.
	pub overall_tie: bool,
	/// Entry qualified.
	pub qualified: bool,
	/// Overall rank.
	pub overall_rank: u16,
	/// Next lowest rank within the section.
	pub next_in_section: RankLink,
	/// Next lowest rank overall.
	pub next_overall: RankLink,
}

impl Ranking {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 17;

	/// Parse a ranking at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			section_rank: cursor.read_u16_le()?,
			section_tie: cursor.read_bool()?,
			overall_rank_with_mps: cursor.read_u16_le()?,
			overall_tie: cursor.read_bool()?,
			qualified: cursor.read_bool()?,
			overall_rank: cursor.read_u16_le()?,
			next_in_section: RankLink::parse(cursor)?,
			next_overall: RankLink::parse(cursor)?,
		})
	}
}
