//! Error types for record decoding and model geometry.

use thiserror::Error;

/// Kind of record being decoded, used to give decode errors some context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
	/// Animation sequence definition
	Sequence,
	/// NPC definition
	Npc,
	/// Animation pose frame
	Frame,
	/// Skeletal animation sequence
	Skeletal,
}

impl std::fmt::Display for RecordKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Sequence => "sequence",
			Self::Npc => "npc",
			Self::Frame => "frame",
			Self::Skeletal => "skeletal sequence",
		};
		f.write_str(name)
	}
}

/// Errors that abort the decoding of a single record.
///
/// A failed record is discarded as a whole; other records decoded from the
/// same cache are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// The opcode has no registered handler for this record kind
	#[error("Unknown {record} opcode {opcode} at offset {offset}")]
	UnknownOpcode {
		/// Record kind whose table was consulted
		record: RecordKind,
		/// Offending opcode
		opcode: u8,
		/// Byte offset of the opcode within the record
		offset: usize,
	},

	/// A read ran past the end of the record buffer
	#[error("Buffer overrun at offset {offset}: needed {needed} bytes, {available} available")]
	BufferOverrun {
		/// Cursor position when the read was attempted
		offset: usize,
		/// Number of bytes the read required
		needed: usize,
		/// Number of bytes left in the buffer
		available: usize,
	},
}

impl DecodeError {
	/// Returns the opcode if this is an [`DecodeError::UnknownOpcode`].
	pub fn unknown_opcode(&self) -> Option<u8> {
		match self {
			Self::UnknownOpcode {
				opcode,
				..
			} => Some(*opcode),
			Self::BufferOverrun {
				..
			} => None,
		}
	}
}

/// Errors reported when model geometry is internally inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
	/// Vertex coordinate arrays have different lengths
	#[error("Vertex arrays disagree: x={x}, y={y}, z={z}")]
	VertexArrayMismatch {
		/// Length of the X array
		x: usize,
		/// Length of the Y array
		y: usize,
		/// Length of the Z array
		z: usize,
	},

	/// A face references a vertex that does not exist
	#[error("Face {face} references vertex {vertex}, but only {vertex_count} vertices exist")]
	VertexOutOfRange {
		/// Face index
		face: usize,
		/// Referenced vertex index
		vertex: usize,
		/// Number of vertices in the model
		vertex_count: usize,
	},

	/// An optional per-face attribute array has the wrong length
	#[error("Per-face {attribute} array has {actual} entries, expected {expected}")]
	FaceAttributeLength {
		/// Attribute name
		attribute: &'static str,
		/// Number of faces in the model
		expected: usize,
		/// Actual array length
		actual: usize,
	},
}
