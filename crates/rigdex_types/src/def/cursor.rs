//! Forward-only byte cursor over a record buffer.

use crate::error::DecodeError;

/// Sentinel used on the wire for "no id" in unsigned 16-bit id fields.
pub const NONE_U16: u16 = 0xFFFF;

/// Reads big-endian integers from a byte slice, moving strictly forward.
///
/// Every read checks the remaining length first and reports
/// [`DecodeError::BufferOverrun`] instead of panicking, so truncated records
/// from an untrusted cache can never bring the caller down.
///
/// # Examples
///
/// ```
/// use rigdex_types::def::ByteCursor;
///
/// let mut cursor = ByteCursor::new(&[0x01, 0x00, 0x05, 0xFF]);
/// assert_eq!(cursor.read_u8().unwrap(), 1);
/// assert_eq!(cursor.read_u16().unwrap(), 5);
/// assert_eq!(cursor.read_i8().unwrap(), -1);
/// assert!(cursor.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> ByteCursor<'a> {
	/// Creates a cursor positioned at the start of `data`.
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			position: 0,
		}
	}

	/// Current byte offset from the start of the buffer.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Number of unread bytes.
	pub fn remaining(&self) -> usize {
		self.data.len() - self.position
	}

	/// Returns `true` once every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
		let available = self.remaining();
		if available < N {
			return Err(DecodeError::BufferOverrun {
				offset: self.position,
				needed: N,
				available,
			});
		}

		let mut bytes = [0u8; N];
		bytes.copy_from_slice(&self.data[self.position..self.position + N]);
		self.position += N;
		Ok(bytes)
	}

	/// Reads an unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
		self.take::<1>().map(|[b]| b)
	}

	/// Reads a signed byte.
	pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
		self.take::<1>().map(i8::from_be_bytes)
	}

	/// Reads a big-endian unsigned 16-bit integer.
	pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
		self.take::<2>().map(u16::from_be_bytes)
	}

	/// Reads a big-endian signed 16-bit integer.
	pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
		self.take::<2>().map(i16::from_be_bytes)
	}

	/// Reads an unsigned 16-bit id where `0xFFFF` means "none".
	pub fn read_optional_id(&mut self) -> Result<Option<u32>, DecodeError> {
		let value = self.read_u16()?;
		Ok((value != NONE_U16).then_some(u32::from(value)))
	}
}
