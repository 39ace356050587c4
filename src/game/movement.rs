use crate::game::bytes::Cursor;
use crate::game::decode::DecodeContext;
use crate::game::layout::{MITCHELL_SLOTS, RecordKind};
use crate::game::scalar::Ptr;
use crate::game::{GameError, Result};

/// One seat reassignment in a movement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct SeatMove {
	/// Table moved from.
	pub from_table: u8,
	/// Direction code moved from.
	pub from_direction: u8,
	/// Table moved to.
	pub to_table: u8,
	/// Direction code moved to.
	pub to_direction: u8,
}

impl SeatMove {
	fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			from_table: cursor.read_u8()?,
			from_direction: cursor.read_u8()?,
			to_table: cursor.read_u8()?,
			to_direction: cursor.read_u8()?,
		})
	}

	/// Return whether the slot is unused.
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// Mitchell movement: per-round reassignments and the initial seating.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MitchellTable {
	/// Reassignments applied between rounds.
	#[serde(serialize_with = "serialize_moves")]
	pub reassignments: [SeatMove; MITCHELL_SLOTS],
	/// Initial seating.
	#[serde(serialize_with = "serialize_moves")]
	pub initial: [SeatMove; MITCHELL_SLOTS],
}

// serde only derives arrays up to 32 elements.
fn serialize_moves<S: serde::Serializer>(moves: &[SeatMove; MITCHELL_SLOTS], serializer: S) -> std::result::Result<S::Ok, S::Error> {
	serializer.collect_seq(moves.iter())
}

/// How pairs move between rounds.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Movement {
	/// No movement table recorded.
	None,
	/// Mitchell movement.
	Mitchell(MitchellTable),
}

/// Movement layout of a section, chosen from its movement pointer and howell flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementShape {
	/// No movement table recorded.
	None,
	/// Mitchell table.
	Mitchell(Ptr),
	/// Howell table.
	Howell(Ptr),
}

impl MovementShape {
	/// Select the layout. A null pointer means no table, whatever the flag says.
	pub fn select(ptr: Ptr, howell: bool) -> Self {
		if ptr.is_null() {
			Self::None
		} else if howell {
			Self::Howell(ptr)
		} else {
			Self::Mitchell(ptr)
		}
	}
}

impl Movement {
	/// Decode the movement a shape selects. Only Mitchell tables are decoded.
	pub fn read(ctx: &DecodeContext<'_>, shape: MovementShape) -> Result<Self> {
		match shape {
			MovementShape::None => Ok(Self::None),
			MovementShape::Mitchell(ptr) => Self::read_mitchell(ctx, ptr),
			MovementShape::Howell(_) => Err(GameError::Unsupported { feature: "howell movement" }),
		}
	}

	fn read_mitchell(ctx: &DecodeContext<'_>, ptr: Ptr) -> Result<Self> {
		let Some(mut record) = ctx.record(ptr, RecordKind::MitchellTable)? else {
			return Ok(Self::None);
		};
		let cursor = record.cursor();
		let reassignments = cursor.parse_fixed(SeatMove::parse)?;
		let initial = cursor.parse_fixed(SeatMove::parse)?;
		record.finish()?;

		Ok(Self::Mitchell(MitchellTable { reassignments, initial }))
	}

	/// Mitchell table when one was decoded.
	pub fn mitchell(&self) -> Option<&MitchellTable> {
		match self {
			Self::Mitchell(table) => Some(table),
			Self::None => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use acblscore_testkit::{GameBuilder, mitchell_table};

	use super::{Movement, MovementShape};
	use crate::game::decode::{DecodeContext, DecodeOptions};
	use crate::game::scalar::Ptr;
	use crate::game::{ErrorKind, GameError};

	fn game_with_table() -> (Vec<u8>, u32) {
		let mut game = GameBuilder::new();
		let ptr = game.append(&mitchell_table(&[[1, 1, 2, 1], [2, 1, 3, 1]], &[[1, 0, 1, 0]]));
		(game.finish(), ptr)
	}

	#[test]
	fn decodes_mitchell_table() {
		let (bytes, ptr) = game_with_table();
		let options = DecodeOptions::default();
		let ctx = DecodeContext::new(&bytes, &options);
		let movement = Movement::read(&ctx, MovementShape::select(Ptr(ptr), false)).expect("mitchell decodes");

		let table = movement.mitchell().expect("mitchell variant");
		assert_eq!(table.reassignments[1].from_table, 2);
		assert_eq!(table.reassignments[1].to_table, 3);
		assert!(table.reassignments[2].is_empty());
		assert_eq!(table.initial[0].from_table, 1);
		assert!(table.initial[39].is_empty());
	}

	#[test]
	fn null_movement_pointer_is_none_even_for_howell() {
		let bytes = GameBuilder::new().finish();
		let options = DecodeOptions::default();
		let ctx = DecodeContext::new(&bytes, &options);
		assert_eq!(Movement::read(&ctx, MovementShape::select(Ptr::NULL, true)).expect("no table"), Movement::None);
	}

	#[test]
	fn shape_follows_pointer_then_howell_flag() {
		assert_eq!(MovementShape::select(Ptr::NULL, false), MovementShape::None);
		assert_eq!(MovementShape::select(Ptr::NULL, true), MovementShape::None);
		assert_eq!(MovementShape::select(Ptr(0x40), false), MovementShape::Mitchell(Ptr(0x40)));
		assert_eq!(MovementShape::select(Ptr(0x40), true), MovementShape::Howell(Ptr(0x40)));
	}

	#[test]
	fn howell_movement_is_unsupported() {
		let (bytes, ptr) = game_with_table();
		let options = DecodeOptions::default();
		let ctx = DecodeContext::new(&bytes, &options);
		let err = Movement::read(&ctx, MovementShape::select(Ptr(ptr), true)).expect_err("howell");
		assert_eq!(err.kind(), ErrorKind::Unsupported);
		assert!(matches!(err, GameError::Unsupported { feature: "howell movement" }));
	}
}
