use crate::game::Result;
use crate::game::bytes::Cursor;
use crate::game::scalar::Ptr;

/// Read a length-prefixed text block. An absent pointer reads as an empty string.
pub fn read_memo(bytes: &[u8], ptr: Ptr) -> Result<String> {
	let Some(mut cursor) = Cursor::deref(bytes, ptr)? else {
		return Ok(String::new());
	};
	let len = usize::from(cursor.read_u16_le()?);
	let text = cursor.read_exact(len)?;
	Ok(String::from_utf8_lossy(text).into_owned())
}
