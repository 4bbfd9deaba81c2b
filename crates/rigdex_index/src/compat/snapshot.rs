//! Serialized form of the compatibility maps.

use serde::{Deserialize, Serialize};

use super::{CompatibilityMaps, build::MapsBuilder};
use crate::error::IndexError;

/// Snapshot format version. Snapshots with any other version are corrupt.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Both compatibility maps as ordered `(key, [values])` lists.
///
/// # JSON Shape
///
/// ```json
/// {
///   "version": 1,
///   "seq_to_base_ids": [[5, [10]], [7, [10]]],
///   "base_id_to_seqs": [[10, [5, 7]]]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSnapshot {
	/// Format version
	pub version: u32,
	/// Sequence id to skeleton bases
	pub seq_to_base_ids: Vec<(u32, Vec<u32>)>,
	/// Skeleton base to sequence ids
	pub base_id_to_seqs: Vec<(u32, Vec<u32>)>,
}

impl IndexSnapshot {
	pub(crate) fn from_maps(maps: &CompatibilityMaps) -> Self {
		fn entries(map: &std::collections::BTreeMap<u32, Box<[u32]>>) -> Vec<(u32, Vec<u32>)> {
			map.iter().map(|(&key, values)| (key, values.to_vec())).collect()
		}

		Self {
			version: SNAPSHOT_VERSION,
			seq_to_base_ids: entries(&maps.forward),
			base_id_to_seqs: entries(&maps.reverse),
		}
	}

	pub(crate) fn into_maps(self) -> Result<CompatibilityMaps, IndexError> {
		if self.version != SNAPSHOT_VERSION {
			return Err(IndexError::PersistenceCorrupt(format!(
				"unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
				self.version
			)));
		}

		let mut maps = MapsBuilder::default();
		for (sequence, bases) in self.seq_to_base_ids {
			maps.extend_forward(sequence, bases);
		}
		for (base, sequences) in self.base_id_to_seqs {
			maps.extend_reverse(base, sequences);
		}
		Ok(maps.freeze())
	}

	/// Serializes the snapshot to JSON.
	pub fn to_json(&self) -> String {
		// a struct of integers and vectors always serializes
		serde_json::to_string(self).unwrap_or_default()
	}

	/// Parses a snapshot from JSON.
	///
	/// # Errors
	///
	/// Returns [`IndexError::PersistenceCorrupt`] if `data` is not a snapshot.
	pub fn from_json(data: &str) -> Result<Self, IndexError> {
		serde_json::from_str(data).map_err(|err| IndexError::PersistenceCorrupt(err.to_string()))
	}
}
