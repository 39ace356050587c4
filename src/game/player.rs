use crate::game::Result;
use crate::game::bytes::Cursor;

/// One player's identity and masterpoint totals, embedded in pair records.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Player {
	/// Last name.
	pub last_name: String,
	/// First name.
	pub first_name: String,
	/// City.
	pub city: String,
	/// State or province code.
	pub state: String,
	/// Country code.
	pub country: String,
	/// ACBL player number.
	pub acbl_number: String,
	/// ACBL rank letter.
	pub acbl_rank: char,
	/// Lifetime masterpoints.
	pub total_mps: f64,
	/// Masterpoints won in the previous session.
	pub previous_session_mps: f64,
	/// Masterpoints won in the current session.
	pub current_session_mps: f64,
	/// Masterpoints won across all sessions of the event.
	pub all_sessions_mps: f64,
}

impl Player {
	/// Embedded record size in bytes.
	pub const SIZE: usize = 76;

	/// Parse a player at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		Ok(Self {
			last_name: cursor.read_pstring(16)?,
			first_name: cursor.read_pstring(16)?,
			city: cursor.read_pstring(16)?,
			state: cursor.read_pstring(2)?,
			country: cursor.read_pstring(2)?,
			acbl_number: cursor.read_pstring(7)?,
			acbl_rank: cursor.read_char()?,
			total_mps: cursor.read_hundredths_i32()?,
			previous_session_mps: cursor.read_hundredths_i16()?,
			current_session_mps: cursor.read_hundredths_i16()?,
			all_sessions_mps: cursor.read_hundredths_i16()?,
		})
	}

	/// `First Last` display name.
	pub fn full_name(&self) -> String {
		match (self.first_name.is_empty(), self.last_name.is_empty()) {
			(true, _) => self.last_name.clone(),
			(false, true) => self.first_name.clone(),
			(false, false) => format!("{} {}", self.first_name, self.last_name),
		}
	}
}
