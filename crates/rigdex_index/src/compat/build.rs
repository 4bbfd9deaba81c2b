//! Resumable, batched construction of the compatibility maps.
//!
//! A [`BuildPass`] is an iterator: each call to `next()` resolves one batch
//! of sequence ids and returns a [`BuildProgress`], then hands control back.
//! The caller decides when to resume, which makes the pass usable from a
//! frame loop, a task queue or a plain `for` loop alike. The final item has
//! `complete == true` and a fraction of exactly `1.0`; at that point the maps
//! are frozen and committed to the index.
//!
//! Dropping a pass before completion cancels it; the index stays unbuilt.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{CompatibilityIndex, CompatibilityMaps};
use crate::{
	error::IndexError,
	source::{DefinitionSource, resolve_bases},
};

/// Progress of a build pass after one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildProgress {
	/// `processed / total`, or `1.0` on the completion step
	pub fraction: f32,
	/// Sequence ids visited so far
	pub processed: u32,
	/// Sequence ids to visit
	pub total: u32,
	/// Sequences skipped so far because a dependency could not be loaded
	pub unresolved: u32,
	/// `true` on the final step, after the maps were committed
	pub complete: bool,
}

/// Summary of a completed build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
	/// Sequence ids visited
	pub processed: u32,
	/// Sequences that resolved to at least one base
	pub resolved: u32,
	/// Sequences skipped because a dependency could not be loaded
	pub unresolved: u32,
	/// Distinct skeleton bases found
	pub bases: u32,
}

/// Forward and reverse maps under construction.
#[derive(Debug, Default)]
pub(crate) struct MapsBuilder {
	forward: BTreeMap<u32, BTreeSet<u32>>,
	reverse: BTreeMap<u32, BTreeSet<u32>>,
}

impl MapsBuilder {
	/// Links `sequence` to each of `bases` in both directions.
	pub(crate) fn link(&mut self, sequence: u32, bases: impl IntoIterator<Item = u32>) {
		for base in bases {
			self.forward.entry(sequence).or_default().insert(base);
			self.reverse.entry(base).or_default().insert(sequence);
		}
	}

	/// Adds `values` under `key` in the forward map only.
	pub(crate) fn extend_forward(&mut self, key: u32, values: impl IntoIterator<Item = u32>) {
		self.forward.entry(key).or_default().extend(values);
	}

	/// Adds `values` under `key` in the reverse map only.
	pub(crate) fn extend_reverse(&mut self, key: u32, values: impl IntoIterator<Item = u32>) {
		self.reverse.entry(key).or_default().extend(values);
	}

	pub(crate) fn freeze(self) -> CompatibilityMaps {
		fn freeze_map(map: BTreeMap<u32, BTreeSet<u32>>) -> BTreeMap<u32, Box<[u32]>> {
			map.into_iter().map(|(key, values)| (key, values.into_iter().collect())).collect()
		}

		CompatibilityMaps {
			forward: freeze_map(self.forward),
			reverse: freeze_map(self.reverse),
		}
	}
}

/// One in-flight build of a [`CompatibilityIndex`].
///
/// Created by [`CompatibilityIndex::begin_build`]. Holds the index mutably,
/// so a second build cannot start while this one is alive.
pub struct BuildPass<'a, S: DefinitionSource + ?Sized> {
	index: &'a mut CompatibilityIndex,
	source: &'a S,
	batch_size: u32,
	next_id: u32,
	total: u32,
	maps: MapsBuilder,
	report: BuildReport,
	finished: bool,
}

impl<'a, S: DefinitionSource + ?Sized> BuildPass<'a, S> {
	pub(crate) fn new(index: &'a mut CompatibilityIndex, source: &'a S) -> Self {
		let batch_size = index.config().effective_batch_size();
		let total = source.sequence_count();
		Self {
			index,
			source,
			batch_size,
			next_id: 0,
			total,
			maps: MapsBuilder::default(),
			report: BuildReport::default(),
			finished: false,
		}
	}

	/// Number of sequence ids this pass will visit.
	pub fn total(&self) -> u32 {
		self.total
	}

	/// Counters so far.
	pub fn report(&self) -> BuildReport {
		self.report
	}

	fn resolve(&self, id: u32) -> Result<Option<Vec<u32>>, IndexError> {
		match self.source.sequence(id)? {
			Some(sequence) => resolve_bases(self.source, &sequence).map(Some),
			None => Ok(None),
		}
	}

	fn visit(&mut self, id: u32) {
		match self.resolve(id) {
			Ok(Some(bases)) => {
				if !bases.is_empty() {
					self.report.resolved += 1;
				}
				self.maps.link(id, bases);
			}
			Ok(None) => {}
			Err(err) => {
				self.report.unresolved += 1;
				debug!("Skipping sequence {id}: {err}");
			}
		}
	}

	fn commit(&mut self) {
		let maps = std::mem::take(&mut self.maps).freeze();
		self.report.processed = self.total;
		self.report.bases = maps.reverse.len() as u32;
		info!(
			"Compatibility index built: {} sequences, {} resolved, {} unresolved, {} bases",
			self.report.processed, self.report.resolved, self.report.unresolved, self.report.bases
		);
		self.index.commit(maps, self.report);
	}
}

impl<S: DefinitionSource + ?Sized> Iterator for BuildPass<'_, S> {
	type Item = BuildProgress;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		if self.next_id < self.total {
			let end = self.next_id.saturating_add(self.batch_size).min(self.total);
			for id in self.next_id..end {
				self.visit(id);
			}
			self.next_id = end;
			self.report.processed = end;

			return Some(BuildProgress {
				fraction: end as f32 / self.total as f32,
				processed: end,
				total: self.total,
				unresolved: self.report.unresolved,
				complete: false,
			});
		}

		self.finished = true;
		self.commit();
		Some(BuildProgress {
			fraction: 1.0,
			processed: self.total,
			total: self.total,
			unresolved: self.report.unresolved,
			complete: true,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_link_is_symmetric() {
		let mut maps = MapsBuilder::default();
		maps.link(1, [10, 11]);
		maps.link(2, [10]);
		let maps = maps.freeze();

		assert_eq!(&*maps.forward[&1], &[10, 11]);
		assert_eq!(&*maps.reverse[&10], &[1, 2]);
		assert_eq!(&*maps.reverse[&11], &[1]);
	}

	#[test]
	fn test_link_without_bases_adds_nothing() {
		let mut maps = MapsBuilder::default();
		maps.link(1, []);
		let maps = maps.freeze();
		assert!(maps.forward.is_empty());
		assert!(maps.reverse.is_empty());
	}
}
