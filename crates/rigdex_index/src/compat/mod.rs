//! Skeleton compatibility index.
//!
//! Maps every animation sequence to the skeleton bases it animates, and every
//! base back to the sequences that animate it. Two animations sharing a base
//! can be played on the same creature, so the reverse map answers "which
//! animations could this NPC play?".
//!
//! # Lifecycle
//!
//! ```text
//! unbuilt ──begin_build──> BuildPass ──(last step)──> built (frozen)
//!    │                         │
//!    │                         └──drop──> unbuilt
//!    └──load_from_serialized / restore──> built (frozen)
//! ```
//!
//! Once built, the maps never change; queries take `&self`. A build needs
//! `&mut self`, so only one can run at a time.
//!
//! # Usage Examples
//!
//! ```
//! use rigdex_index::{CompatibilityIndex, MemorySource};
//! use rigdex_types::def::{Frame, NpcDefinition, SequenceDefinition, pack_frame_id};
//!
//! let mut source = MemorySource::new();
//! source.insert_frame(Frame { id: pack_frame_id(3, 0), base_id: 10 });
//! source.insert_sequence(SequenceDefinition {
//!     id: 5,
//!     frame_ids: vec![pack_frame_id(3, 0)],
//!     ..Default::default()
//! });
//!
//! let mut index = CompatibilityIndex::new();
//! let report = index.build(&source).unwrap();
//! assert_eq!(report.resolved, 1);
//! assert_eq!(index.bases_of(5), &[10]);
//! assert_eq!(index.animations_of(10), &[5]);
//! ```

mod build;
mod config;
mod info;
mod snapshot;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use rigdex_types::def::NpcDefinition;

use crate::{error::IndexError, source::DefinitionSource, store::KeyValueStore};

pub use self::build::{BuildPass, BuildProgress, BuildReport};
pub use self::config::{DEFAULT_BATCH_SIZE, DEFAULT_SNAPSHOT_KEY, IndexConfig};
pub use self::info::{AnimationInfo, get_animation_info};
pub use self::snapshot::{IndexSnapshot, SNAPSHOT_VERSION};

/// Frozen forward and reverse maps. Value slices are sorted and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CompatibilityMaps {
	pub(crate) forward: BTreeMap<u32, Box<[u32]>>,
	pub(crate) reverse: BTreeMap<u32, Box<[u32]>>,
}

impl CompatibilityMaps {
	fn bases_of(&self, sequence: u32) -> &[u32] {
		self.forward.get(&sequence).map(|bases| &**bases).unwrap_or(&[])
	}

	fn animations_of(&self, base: u32) -> &[u32] {
		self.reverse.get(&base).map(|sequences| &**sequences).unwrap_or(&[])
	}
}

/// Where the index contents came from after [`CompatibilityIndex::restore_or_build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrigin {
	/// Loaded from a stored snapshot
	Restored,
	/// Built from the definition source
	Built(BuildReport),
}

/// Sequence ↔ skeleton base index.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityIndex {
	config: IndexConfig,
	maps: Option<CompatibilityMaps>,
	last_report: Option<BuildReport>,
}

impl CompatibilityIndex {
	/// Creates an unbuilt index with the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an unbuilt index with a custom configuration.
	pub fn with_config(config: IndexConfig) -> Self {
		Self {
			config,
			..Self::default()
		}
	}

	/// The index configuration.
	pub fn config(&self) -> &IndexConfig {
		&self.config
	}

	/// Returns `true` once a build completed or a snapshot was loaded.
	pub fn is_built(&self) -> bool {
		self.maps.is_some()
	}

	/// Report of the last completed build, if this index was built rather
	/// than loaded.
	pub fn last_report(&self) -> Option<BuildReport> {
		self.last_report
	}

	/// Drops the maps, returning the index to the unbuilt state.
	pub fn clear(&mut self) {
		self.maps = None;
		self.last_report = None;
	}

	/// Starts a resumable build.
	///
	/// Returns `None` if the index is already built. Drive the returned pass
	/// with `next()` until it yields a step with `complete == true`; dropping
	/// it earlier cancels the build.
	pub fn begin_build<'a, S: DefinitionSource + ?Sized>(
		&'a mut self,
		source: &'a S,
	) -> Option<BuildPass<'a, S>> {
		if self.is_built() {
			debug!("Compatibility index already built, skipping");
			return None;
		}
		Some(BuildPass::new(self, source))
	}

	/// Builds the index synchronously.
	///
	/// Returns `None` if the index was already built.
	pub fn build<S: DefinitionSource + ?Sized>(&mut self, source: &S) -> Option<BuildReport> {
		self.build_with_progress(source, |_| {})
	}

	/// Builds the index synchronously, reporting progress after every batch
	/// and once more with exactly `1.0` on completion.
	///
	/// Returns `None` if the index was already built; `progress` is not called.
	pub fn build_with_progress<S, F>(&mut self, source: &S, mut progress: F) -> Option<BuildReport>
	where
		S: DefinitionSource + ?Sized,
		F: FnMut(f32),
	{
		let mut pass = self.begin_build(source)?;
		for step in pass.by_ref() {
			progress(step.fraction);
		}
		Some(pass.report())
	}

	pub(crate) fn commit(&mut self, maps: CompatibilityMaps, report: BuildReport) {
		self.maps = Some(maps);
		self.last_report = Some(report);
	}

	/// Skeleton bases animated by `sequence`, ascending. Empty if unknown or
	/// unbuilt.
	pub fn bases_of(&self, sequence: u32) -> &[u32] {
		self.maps.as_ref().map(|maps| maps.bases_of(sequence)).unwrap_or(&[])
	}

	/// Sequences animating `base`, ascending. Empty if unknown or unbuilt.
	pub fn animations_of(&self, base: u32) -> &[u32] {
		self.maps.as_ref().map(|maps| maps.animations_of(base)).unwrap_or(&[])
	}

	/// Number of sequences with at least one base.
	pub fn sequence_count(&self) -> usize {
		self.maps.as_ref().map_or(0, |maps| maps.forward.len())
	}

	/// Number of distinct bases.
	pub fn base_count(&self) -> usize {
		self.maps.as_ref().map_or(0, |maps| maps.reverse.len())
	}

	/// Returns `true` if every forward link has its reverse link and vice versa.
	pub fn is_symmetric(&self) -> bool {
		let Some(maps) = &self.maps else {
			return true;
		};
		let forward_ok = maps.forward.iter().all(|(&sequence, bases)| {
			bases.iter().all(|&base| maps.animations_of(base).binary_search(&sequence).is_ok())
		});
		let reverse_ok = maps.reverse.iter().all(|(&base, sequences)| {
			sequences.iter().all(|&sequence| maps.bases_of(sequence).binary_search(&base).is_ok())
		});
		forward_ok && reverse_ok
	}

	/// Returns every animation an NPC could play, ascending.
	///
	/// Collects the NPC's reference animations, takes the union of their
	/// bases, then the union of every sequence animating one of those bases.
	/// The reference animations themselves are always included.
	///
	/// If the index is unbuilt, or none of the references resolves to a base,
	/// returns the reference animations unchanged, in slot order.
	pub fn find_compatible_animations(&self, npc: &NpcDefinition) -> Vec<u32> {
		let references = npc.reference_animations();
		let Some(maps) = &self.maps else {
			return references;
		};

		let bases: BTreeSet<u32> =
			references.iter().flat_map(|&id| maps.bases_of(id)).copied().collect();
		if bases.is_empty() {
			return references;
		}

		let mut compatible: BTreeSet<u32> =
			bases.iter().flat_map(|&base| maps.animations_of(base)).copied().collect();
		compatible.extend(references);
		compatible.into_iter().collect()
	}

	/// Captures the maps as a snapshot. An unbuilt index yields empty maps.
	pub fn snapshot(&self) -> IndexSnapshot {
		match &self.maps {
			Some(maps) => IndexSnapshot::from_maps(maps),
			None => IndexSnapshot::from_maps(&CompatibilityMaps::default()),
		}
	}

	/// Serializes the maps to JSON.
	pub fn serialize(&self) -> String {
		self.snapshot().to_json()
	}

	/// Replaces the maps with a snapshot and marks the index built.
	///
	/// # Errors
	///
	/// Returns [`IndexError::PersistenceCorrupt`] if `data` cannot be parsed or
	/// has the wrong version; the index is left unbuilt.
	pub fn load_from_serialized(&mut self, data: &str) -> Result<(), IndexError> {
		self.clear();
		let maps = IndexSnapshot::from_json(data)?.into_maps()?;
		self.maps = Some(maps);
		Ok(())
	}

	/// Writes a snapshot under the configured key.
	///
	/// # Errors
	///
	/// Returns the store's error.
	pub fn save<K: KeyValueStore + ?Sized>(&self, store: &mut K) -> Result<(), IndexError> {
		store.set(&self.config.snapshot_key, &self.serialize())
	}

	/// Loads the snapshot stored under the configured key.
	///
	/// Returns `Ok(false)` and leaves the index untouched if nothing is stored.
	///
	/// # Errors
	///
	/// Returns [`IndexError::PersistenceCorrupt`] for unreadable snapshots (the
	/// index is left unbuilt), or the store's error.
	pub fn restore<K: KeyValueStore + ?Sized>(&mut self, store: &K) -> Result<bool, IndexError> {
		match store.get(&self.config.snapshot_key)? {
			Some(data) => self.load_from_serialized(&data).map(|()| true),
			None => Ok(false),
		}
	}

	/// Restores the index from `store`, falling back to a build.
	///
	/// Store failures never escape: a corrupt snapshot is logged, removed and
	/// rebuilt; a failed read is treated as a miss; a failed save after a
	/// build is logged and the built index kept.
	pub fn restore_or_build<K, S, F>(&mut self, store: &mut K, source: &S, progress: F) -> IndexOrigin
	where
		K: KeyValueStore + ?Sized,
		S: DefinitionSource + ?Sized,
		F: FnMut(f32),
	{
		match self.restore(&*store) {
			Ok(true) => return IndexOrigin::Restored,
			Ok(false) => {}
			Err(err) if err.is_corrupt_snapshot() => {
				warn!("Discarding compatibility index snapshot: {err}");
				if let Err(err) = store.remove(&self.config.snapshot_key) {
					warn!("Failed to remove corrupt snapshot: {err}");
				}
			}
			Err(err) => warn!("Failed to read compatibility index snapshot: {err}"),
		}

		let report = match self.build_with_progress(source, progress) {
			Some(report) => report,
			None => self.last_report.unwrap_or_default(),
		};
		if let Err(err) = self.save(store) {
			warn!("Failed to save compatibility index snapshot: {err}");
		}
		IndexOrigin::Built(report)
	}
}
