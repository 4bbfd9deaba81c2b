//! Definition sources: where the index gets its records from.
//!
//! The cache-loading layer is outside this crate; it is seen only through
//! the [`DefinitionSource`] trait. Every lookup returns `Ok(None)` for an id
//! the source does not know, and `Err` only when a record exists but cannot
//! be read or decoded.

mod directory;
mod memory;

use log::warn;
use rigdex_types::def::{Frame, NpcDefinition, Playback, SequenceDefinition, SkeletalSequence};

use crate::error::IndexError;

pub use self::directory::{FRAME_DIR, NPC_DIR, RECORD_EXTENSION, RecordDirectory, SEQUENCE_DIR, SKELETAL_DIR};
pub use self::memory::MemorySource;

/// Read access to decoded cache records.
pub trait DefinitionSource {
	/// Number of sequence ids; valid ids are `0..sequence_count()`.
	fn sequence_count(&self) -> u32;

	/// Loads a sequence definition.
	fn sequence(&self, id: u32) -> Result<Option<SequenceDefinition>, IndexError>;

	/// Loads a frame by packed frame id.
	fn frame(&self, id: u32) -> Result<Option<Frame>, IndexError>;

	/// Loads a skeletal sequence.
	fn skeletal_sequence(&self, id: u32) -> Result<Option<SkeletalSequence>, IndexError>;

	/// Loads an NPC definition.
	fn npc(&self, id: u32) -> Result<Option<NpcDefinition>, IndexError>;
}

impl<S: DefinitionSource + ?Sized> DefinitionSource for &S {
	fn sequence_count(&self) -> u32 {
		(**self).sequence_count()
	}

	fn sequence(&self, id: u32) -> Result<Option<SequenceDefinition>, IndexError> {
		(**self).sequence(id)
	}

	fn frame(&self, id: u32) -> Result<Option<Frame>, IndexError> {
		(**self).frame(id)
	}

	fn skeletal_sequence(&self, id: u32) -> Result<Option<SkeletalSequence>, IndexError> {
		(**self).skeletal_sequence(id)
	}

	fn npc(&self, id: u32) -> Result<Option<NpcDefinition>, IndexError> {
		(**self).npc(id)
	}
}

/// One past the highest id in `ids`, which must be ascending.
///
/// `u32::MAX` has no successor, so a sequence stored under it is left out of
/// the count with a warning. It can still be looked up directly.
pub(crate) fn count_sequences(ids: impl DoubleEndedIterator<Item = u32>) -> u32 {
	ids.rev()
		.find_map(|id| {
			let count = id.checked_add(1);
			if count.is_none() {
				warn!("Sequence id {id} is outside the countable range; builds will skip it");
			}
			count
		})
		.unwrap_or(0)
}

/// Resolves the skeleton bases a sequence animates.
///
/// Skeletal sequences contribute the base of their skeletal sequence.
/// Frame-based sequences contribute the base of their *first* frame only:
/// every frame in an archive shares one base, so the rest add nothing.
/// A sequence without frames resolves to no bases.
///
/// # Errors
///
/// Returns [`IndexError::DependencyUnresolvable`] when the referenced frame or
/// skeletal sequence is missing, or the source's own error if loading fails.
pub fn resolve_bases<S: DefinitionSource + ?Sized>(
	source: &S,
	sequence: &SequenceDefinition,
) -> Result<Vec<u32>, IndexError> {
	match sequence.playback() {
		Playback::Skeletal {
			sequence: skeletal_id,
			..
		} => match source.skeletal_sequence(skeletal_id)? {
			Some(skeletal) => Ok(vec![skeletal.base_id]),
			None => Err(IndexError::unresolvable(
				sequence.id,
				format!("skeletal sequence {skeletal_id} not found"),
			)),
		},
		Playback::Frames(frames) => {
			let Some(&first) = frames.first() else {
				return Ok(Vec::new());
			};
			match source.frame(first)? {
				Some(frame) => Ok(vec![frame.base_id]),
				None => Err(IndexError::unresolvable(sequence.id, format!("frame {first:#010x} not found"))),
			}
		}
	}
}
