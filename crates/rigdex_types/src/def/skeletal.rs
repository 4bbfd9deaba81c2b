//! Skeletal sequence records.
//!
//! Opcode 1 carries the skeleton base id (u16), opcode 2 the duration in
//! frames (u16).

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, RecordKind};

use super::{
	cursor::ByteCursor,
	opcode::{Definition, OpcodeTable},
};

/// A decoded skeletal sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletalSequence {
	/// Skeletal sequence id
	pub id: u32,
	/// Skeleton base driven by this sequence
	pub base_id: u32,
	/// Length in frames
	pub duration: u32,
}

fn read_base(skeletal: &mut SkeletalSequence, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	skeletal.base_id = u32::from(cursor.read_u16()?);
	Ok(())
}

fn read_duration(
	skeletal: &mut SkeletalSequence,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	skeletal.duration = u32::from(cursor.read_u16()?);
	Ok(())
}

static SKELETAL_OPCODES: OpcodeTable<SkeletalSequence> =
	OpcodeTable::new().with(1, read_base).with(2, read_duration);

impl Definition for SkeletalSequence {
	const KIND: RecordKind = RecordKind::Skeletal;

	fn empty(id: u32) -> Self {
		Self {
			id,
			..Default::default()
		}
	}

	fn opcode_table() -> &'static OpcodeTable<Self> {
		&SKELETAL_OPCODES
	}
}
