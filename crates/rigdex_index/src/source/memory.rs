//! In-memory definition source.

use std::collections::{BTreeMap, HashMap};

use rigdex_types::def::{Frame, NpcDefinition, SequenceDefinition, SkeletalSequence};

use super::{DefinitionSource, count_sequences};
use crate::error::IndexError;

/// Holds already-decoded records in memory.
///
/// `sequence_count` is one past the highest inserted sequence id, so gaps in
/// the id space behave like unknown ids. A sequence with id `u32::MAX` is
/// not counted.
///
/// # Examples
///
/// ```
/// use rigdex_index::source::{DefinitionSource, MemorySource};
/// use rigdex_types::def::SequenceDefinition;
///
/// let mut source = MemorySource::new();
/// source.insert_sequence(SequenceDefinition { id: 4, ..Default::default() });
///
/// assert_eq!(source.sequence_count(), 5);
/// assert!(source.sequence(2).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
	sequences: BTreeMap<u32, SequenceDefinition>,
	frames: HashMap<u32, Frame>,
	skeletal: HashMap<u32, SkeletalSequence>,
	npcs: HashMap<u32, NpcDefinition>,
}

impl MemorySource {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a sequence definition.
	pub fn insert_sequence(&mut self, sequence: SequenceDefinition) {
		self.sequences.insert(sequence.id, sequence);
	}

	/// Adds or replaces a frame.
	pub fn insert_frame(&mut self, frame: Frame) {
		self.frames.insert(frame.id, frame);
	}

	/// Adds or replaces a skeletal sequence.
	pub fn insert_skeletal(&mut self, skeletal: SkeletalSequence) {
		self.skeletal.insert(skeletal.id, skeletal);
	}

	/// Adds or replaces an NPC definition.
	pub fn insert_npc(&mut self, npc: NpcDefinition) {
		self.npcs.insert(npc.id, npc);
	}

	/// Iterates the stored NPC ids in no particular order.
	pub fn npc_ids(&self) -> impl Iterator<Item = u32> + '_ {
		self.npcs.keys().copied()
	}
}

impl DefinitionSource for MemorySource {
	fn sequence_count(&self) -> u32 {
		count_sequences(self.sequences.keys().copied())
	}

	fn sequence(&self, id: u32) -> Result<Option<SequenceDefinition>, IndexError> {
		Ok(self.sequences.get(&id).cloned())
	}

	fn frame(&self, id: u32) -> Result<Option<Frame>, IndexError> {
		Ok(self.frames.get(&id).copied())
	}

	fn skeletal_sequence(&self, id: u32) -> Result<Option<SkeletalSequence>, IndexError> {
		Ok(self.skeletal.get(&id).copied())
	}

	fn npc(&self, id: u32) -> Result<Option<NpcDefinition>, IndexError> {
		Ok(self.npcs.get(&id).cloned())
	}
}
