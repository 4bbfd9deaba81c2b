//! Animation sequence definitions.
//!
//! A sequence is either *frame-based* (an ordered list of pose frames, each
//! living in an archive that shares one skeleton base) or *skeletal* (a
//! window `[start, end)` over a continuous skeletal sequence). Opcode 13
//! switches a record to the skeletal variant; the frame list is then ignored
//! for playback.
//!
//! # Opcodes
//!
//! ```text
//! Op  Fields
//! --  ----------------------------------------------------------
//!  1  n u16, n × duration u16, n × file u16, n × archive u16
//!  2  loop offset u16
//!  3  count u8, count × interleaved body part u8
//!  4  stretches
//!  5  forced priority u8
//!  6  left-hand item u16
//!  7  right-hand item u16
//!  8  max loops u8
//!  9  precedence animating u8
//! 10  priority u8
//! 11  reply mode u8
//! 12  n u8, n × file u16, n × archive u16  (chat-head frames)
//! 13  skeletal sequence id u16
//! 14  skeletal window start u16, end u16
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, RecordKind};

use super::{
	cursor::ByteCursor,
	frame::pack_frame_id,
	opcode::{Definition, OpcodeTable},
};

/// Default number of times a looping sequence may replay.
pub const DEFAULT_MAX_LOOPS: u8 = 99;

/// Default forced priority.
pub const DEFAULT_FORCED_PRIORITY: u8 = 5;

/// How a sequence produces poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback<'a> {
	/// Discrete pose frames, by packed frame id
	Frames(&'a [u32]),
	/// A play window over a skeletal sequence
	Skeletal {
		/// Skeletal sequence id
		sequence: u32,
		/// First frame of the window (inclusive)
		start: u32,
		/// End of the window (exclusive)
		end: u32,
	},
}

/// A decoded animation sequence definition.
///
/// `Default` is the record an empty opcode stream decodes to, with id 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDefinition {
	/// Sequence id
	pub id: u32,
	/// Packed frame ids (`archive << 16 | file`)
	pub frame_ids: Vec<u32>,
	/// Per-frame display length in client ticks
	pub frame_durations: Vec<u16>,
	/// Chat-head frame ids
	pub chat_frame_ids: Vec<u32>,
	/// Frame to restart from when looping
	pub loop_offset: Option<u32>,
	/// Body parts animated by this sequence when interleaved with another
	pub interleave: Vec<u8>,
	/// Whether the sequence stretches to cover movement
	pub stretches: bool,
	/// Forced render priority
	pub forced_priority: u8,
	/// Left-hand item override
	pub left_hand_item: Option<u32>,
	/// Right-hand item override
	pub right_hand_item: Option<u32>,
	/// Maximum loop count
	pub max_loops: u8,
	/// Precedence while the character is moving
	pub precedence_animating: Option<u8>,
	/// Priority against other sequences
	pub priority: Option<u8>,
	/// Reply mode
	pub reply_mode: u8,
	/// Skeletal sequence id, set for skeletal sequences
	pub skeletal_id: Option<u32>,
	/// Skeletal play window start
	pub skeletal_start: u32,
	/// Skeletal play window end
	pub skeletal_end: u32,
}

impl SequenceDefinition {
	/// Returns `true` if this sequence is driven by a skeletal sequence.
	pub fn is_skeletal(&self) -> bool {
		self.skeletal_id.is_some()
	}

	/// Returns how this sequence produces poses.
	pub fn playback(&self) -> Playback<'_> {
		match self.skeletal_id {
			Some(sequence) => Playback::Skeletal {
				sequence,
				start: self.skeletal_start,
				end: self.skeletal_end,
			},
			None => Playback::Frames(&self.frame_ids),
		}
	}

	/// Total length of a frame-based sequence in client ticks.
	pub fn total_duration(&self) -> u32 {
		self.frame_durations.iter().map(|&d| u32::from(d)).sum()
	}
}

fn read_frame_ids(cursor: &mut ByteCursor<'_>, count: usize) -> Result<Vec<u32>, DecodeError> {
	let mut files = Vec::with_capacity(count);
	for _ in 0..count {
		files.push(cursor.read_u16()?);
	}

	let mut ids = Vec::with_capacity(count);
	for file in files {
		let archive = cursor.read_u16()?;
		ids.push(pack_frame_id(archive, file));
	}
	Ok(ids)
}

fn read_frames(seq: &mut SequenceDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	let count = cursor.read_u16()? as usize;

	let mut durations = Vec::with_capacity(count);
	for _ in 0..count {
		durations.push(cursor.read_u16()?);
	}

	seq.frame_ids = read_frame_ids(cursor, count)?;
	seq.frame_durations = durations;
	Ok(())
}

fn read_loop_offset(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.loop_offset = cursor.read_optional_id()?;
	Ok(())
}

fn read_interleave(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	let count = cursor.read_u8()?;
	let mut parts = Vec::with_capacity(count as usize);
	for _ in 0..count {
		parts.push(cursor.read_u8()?);
	}
	seq.interleave = parts;
	Ok(())
}

fn set_stretches(seq: &mut SequenceDefinition, _: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	seq.stretches = true;
	Ok(())
}

fn read_forced_priority(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.forced_priority = cursor.read_u8()?;
	Ok(())
}

fn read_left_hand(seq: &mut SequenceDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	seq.left_hand_item = cursor.read_optional_id()?;
	Ok(())
}

fn read_right_hand(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.right_hand_item = cursor.read_optional_id()?;
	Ok(())
}

fn read_max_loops(seq: &mut SequenceDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	seq.max_loops = cursor.read_u8()?;
	Ok(())
}

fn read_precedence(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.precedence_animating = Some(cursor.read_u8()?);
	Ok(())
}

fn read_priority(seq: &mut SequenceDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	seq.priority = Some(cursor.read_u8()?);
	Ok(())
}

fn read_reply_mode(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.reply_mode = cursor.read_u8()?;
	Ok(())
}

fn read_chat_frames(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	let count = cursor.read_u8()? as usize;
	seq.chat_frame_ids = read_frame_ids(cursor, count)?;
	Ok(())
}

fn read_skeletal_id(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.skeletal_id = Some(u32::from(cursor.read_u16()?));
	Ok(())
}

fn read_skeletal_window(
	seq: &mut SequenceDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	seq.skeletal_start = u32::from(cursor.read_u16()?);
	seq.skeletal_end = u32::from(cursor.read_u16()?);
	Ok(())
}

static SEQUENCE_OPCODES: OpcodeTable<SequenceDefinition> = OpcodeTable::new()
	.with(1, read_frames)
	.with(2, read_loop_offset)
	.with(3, read_interleave)
	.with(4, set_stretches)
	.with(5, read_forced_priority)
	.with(6, read_left_hand)
	.with(7, read_right_hand)
	.with(8, read_max_loops)
	.with(9, read_precedence)
	.with(10, read_priority)
	.with(11, read_reply_mode)
	.with(12, read_chat_frames)
	.with(13, read_skeletal_id)
	.with(14, read_skeletal_window);

impl Definition for SequenceDefinition {
	const KIND: RecordKind = RecordKind::Sequence;

	fn empty(id: u32) -> Self {
		Self {
			id,
			frame_ids: Vec::new(),
			frame_durations: Vec::new(),
			chat_frame_ids: Vec::new(),
			loop_offset: None,
			interleave: Vec::new(),
			stretches: false,
			forced_priority: DEFAULT_FORCED_PRIORITY,
			left_hand_item: None,
			right_hand_item: None,
			max_loops: DEFAULT_MAX_LOOPS,
			precedence_animating: None,
			priority: None,
			reply_mode: 0,
			skeletal_id: None,
			skeletal_start: 0,
			skeletal_end: 0,
		}
	}

	fn opcode_table() -> &'static OpcodeTable<Self> {
		&SEQUENCE_OPCODES
	}
}

impl Default for SequenceDefinition {
	fn default() -> Self {
		Self::empty(0)
	}
}
