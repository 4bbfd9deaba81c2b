//! Opcode dispatch for cache records.
//!
//! Every record type in the cache is stored as a stream of
//! `opcode, fields...` pairs closed by a `0` opcode:
//!
//! ```text
//! ┌────────┬──────────────┬────────┬──────────────┬─────┬──────┐
//! │ opcode │ fields (op)  │ opcode │ fields (op)  │ ... │ 0x00 │
//! └────────┴──────────────┴────────┴──────────────┴─────┴──────┘
//! ```
//!
//! Each record type registers one handler per opcode in a static
//! [`OpcodeTable`]. Handlers read exactly the fields that belong to their
//! opcode, so the decoder never needs lookahead or backtracking. An opcode
//! without a handler ends decoding with [`DecodeError::UnknownOpcode`].

use crate::error::{DecodeError, RecordKind};

use super::cursor::ByteCursor;

/// Opcode that closes a record.
pub const TERMINATOR: u8 = 0;

/// Number of distinct opcode values.
pub const OPCODE_SLOTS: usize = 256;

/// Reads the fields of one opcode into the record under construction.
pub type OpcodeHandler<T> = fn(&mut T, &mut ByteCursor<'_>) -> Result<(), DecodeError>;

/// Opcode → handler lookup for one record type.
///
/// Tables are built in `const` context so each record type can keep its
/// table in a `static`:
///
/// ```
/// use rigdex_types::def::{ByteCursor, OpcodeTable};
/// use rigdex_types::DecodeError;
///
/// #[derive(Default)]
/// struct Size(u8);
///
/// fn read_size(record: &mut Size, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
///     record.0 = cursor.read_u8()?;
///     Ok(())
/// }
///
/// static TABLE: OpcodeTable<Size> = OpcodeTable::new().with(1, read_size);
///
/// assert!(TABLE.handler(1).is_some());
/// assert!(TABLE.handler(2).is_none());
/// assert_eq!(TABLE.opcodes().collect::<Vec<_>>(), vec![1]);
/// ```
pub struct OpcodeTable<T: 'static> {
	handlers: [Option<OpcodeHandler<T>>; OPCODE_SLOTS],
}

impl<T: 'static> OpcodeTable<T> {
	/// Creates a table with no registered opcodes.
	pub const fn new() -> Self {
		Self {
			handlers: [None; OPCODE_SLOTS],
		}
	}

	/// Registers `handler` for `opcode`.
	///
	/// # Panics
	///
	/// Panics (at compile time when used in a `static`) if `opcode` is the
	/// terminator or is already registered.
	pub const fn with(mut self, opcode: u8, handler: OpcodeHandler<T>) -> Self {
		assert!(opcode != TERMINATOR, "opcode 0 is reserved for the terminator");
		assert!(self.handlers[opcode as usize].is_none(), "opcode registered twice");
		self.handlers[opcode as usize] = Some(handler);
		self
	}

	/// Returns the handler registered for `opcode`, if any.
	pub fn handler(&self, opcode: u8) -> Option<OpcodeHandler<T>> {
		self.handlers[opcode as usize]
	}

	/// Iterates the registered opcodes in ascending order.
	pub fn opcodes(&self) -> impl Iterator<Item = u8> + '_ {
		self.handlers
			.iter()
			.enumerate()
			.filter(|(_, handler)| handler.is_some())
			.map(|(opcode, _)| opcode as u8)
	}

	/// Number of registered opcodes.
	pub fn len(&self) -> usize {
		self.handlers.iter().filter(|handler| handler.is_some()).count()
	}

	/// Returns `true` if no opcode is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<T: 'static> Default for OpcodeTable<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// A record type that can be decoded from an opcode stream.
pub trait Definition: Sized + 'static {
	/// Record kind reported in decode errors.
	const KIND: RecordKind;

	/// Creates an empty record with the given identifier.
	fn empty(id: u32) -> Self;

	/// The opcode table for this record type.
	fn opcode_table() -> &'static OpcodeTable<Self>;

	/// Decodes a complete record from `data`.
	///
	/// # Errors
	///
	/// Returns [`DecodeError::UnknownOpcode`] for an unregistered opcode and
	/// [`DecodeError::BufferOverrun`] if the record is truncated. The partially
	/// decoded record is dropped in both cases.
	fn decode(id: u32, data: &[u8]) -> Result<Self, DecodeError> {
		let mut record = Self::empty(id);
		decode_into(&mut record, &mut ByteCursor::new(data))?;
		Ok(record)
	}
}

/// Runs the opcode loop for `record` until the terminator.
///
/// The cursor is left just past the terminator, so several records can be
/// decoded back to back from one buffer.
///
/// # Errors
///
/// See [`Definition::decode`].
pub fn decode_into<T: Definition>(
	record: &mut T,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	let table = T::opcode_table();

	loop {
		let offset = cursor.position();
		let opcode = cursor.read_u8()?;
		if opcode == TERMINATOR {
			return Ok(());
		}

		let handler = table.handler(opcode).ok_or(DecodeError::UnknownOpcode {
			record: T::KIND,
			opcode,
			offset,
		})?;
		handler(record, cursor)?;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Debug, Default, PartialEq)]
	struct Probe {
		id: u32,
		a: u16,
		b: Vec<i8>,
	}

	fn read_a(probe: &mut Probe, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
		probe.a = cursor.read_u16()?;
		Ok(())
	}

	fn read_b(probe: &mut Probe, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
		let count = cursor.read_u8()?;
		for _ in 0..count {
			probe.b.push(cursor.read_i8()?);
		}
		Ok(())
	}

	static PROBE_OPCODES: OpcodeTable<Probe> = OpcodeTable::new().with(3, read_a).with(7, read_b);

	impl Definition for Probe {
		const KIND: RecordKind = RecordKind::Frame;

		fn empty(id: u32) -> Self {
			Self {
				id,
				..Default::default()
			}
		}

		fn opcode_table() -> &'static OpcodeTable<Self> {
			&PROBE_OPCODES
		}
	}

	#[test]
	fn test_table_is_enumerable() {
		assert_eq!(PROBE_OPCODES.opcodes().collect::<Vec<_>>(), vec![3, 7]);
		assert_eq!(PROBE_OPCODES.len(), 2);
		assert!(!PROBE_OPCODES.is_empty());
		assert!(OpcodeTable::<Probe>::new().is_empty());
	}

	#[test]
	fn test_decode_runs_handlers_in_order() {
		let probe = Probe::decode(9, &[7, 2, 0xFF, 0x01, 3, 0x01, 0x00, 0]).unwrap();
		assert_eq!(
			probe,
			Probe {
				id: 9,
				a: 256,
				b: vec![-1, 1],
			}
		);
	}

	#[test]
	fn test_empty_record() {
		let probe = Probe::decode(1, &[0]).unwrap();
		assert_eq!(probe.a, 0);
	}

	#[test]
	fn test_unknown_opcode_reports_offset() {
		let err = Probe::decode(1, &[3, 0, 1, 99, 0]).unwrap_err();
		assert_eq!(
			err,
			DecodeError::UnknownOpcode {
				record: RecordKind::Frame,
				opcode: 99,
				offset: 3,
			}
		);
	}

	#[test]
	fn test_missing_terminator_is_overrun() {
		let err = Probe::decode(1, &[3, 0, 1]).unwrap_err();
		assert!(matches!(err, DecodeError::BufferOverrun { offset: 3, .. }));
	}

	#[test]
	fn test_back_to_back_records() {
		let data = [3, 0, 5, 0, 3, 0, 6, 0];
		let mut cursor = ByteCursor::new(&data);

		let mut first = Probe::empty(0);
		decode_into(&mut first, &mut cursor).unwrap();
		let mut second = Probe::empty(1);
		decode_into(&mut second, &mut cursor).unwrap();

		assert_eq!(first.a, 5);
		assert_eq!(second.a, 6);
		assert!(cursor.is_empty());
	}
}
