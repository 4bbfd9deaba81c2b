//! Pose frame records.
//!
//! Frames are stored per archive; every frame in an archive was authored
//! against the same skeleton base. A frame id packs both halves:
//!
//! ```text
//! bits 31..16  archive
//! bits 15..0   file within the archive
//! ```
//!
//! Only the base reference is decoded here (opcode 1: base id u16); the
//! transform payload belongs to the renderer.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, RecordKind};

use super::{
	cursor::ByteCursor,
	opcode::{Definition, OpcodeTable},
};

/// Packs an archive id and a file id into a frame id.
pub const fn pack_frame_id(archive: u16, file: u16) -> u32 {
	((archive as u32) << 16) | file as u32
}

/// Splits a frame id into `(archive, file)`.
pub const fn unpack_frame_id(frame_id: u32) -> (u16, u16) {
	((frame_id >> 16) as u16, (frame_id & 0xFFFF) as u16)
}

/// A decoded pose frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
	/// Packed frame id
	pub id: u32,
	/// Skeleton base the frame was authored against
	pub base_id: u32,
}

impl Frame {
	/// Archive this frame belongs to.
	pub fn archive(&self) -> u16 {
		unpack_frame_id(self.id).0
	}
}

fn read_base(frame: &mut Frame, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	frame.base_id = u32::from(cursor.read_u16()?);
	Ok(())
}

static FRAME_OPCODES: OpcodeTable<Frame> = OpcodeTable::new().with(1, read_base);

impl Definition for Frame {
	const KIND: RecordKind = RecordKind::Frame;

	fn empty(id: u32) -> Self {
		Self {
			id,
			base_id: 0,
		}
	}

	fn opcode_table() -> &'static OpcodeTable<Self> {
		&FRAME_OPCODES
	}
}
