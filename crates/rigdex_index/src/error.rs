//! Error types for index building, definition sources and persistence.

use rigdex_types::{DecodeError, RecordKind};
use thiserror::Error;

/// Errors that can occur while resolving definitions or persisting the index
#[derive(Debug, Error)]
pub enum IndexError {
	/// A record needed to resolve a sequence's skeleton base could not be loaded
	#[error("Sequence {sequence} cannot be resolved: {reason}")]
	DependencyUnresolvable {
		/// Sequence being resolved
		sequence: u32,
		/// What was missing
		reason: String,
	},

	/// A persisted snapshot could not be parsed or has the wrong version
	#[error("Index snapshot is corrupt: {0}")]
	PersistenceCorrupt(String),

	/// A record failed to decode
	#[error("Failed to decode {kind} {id}: {source}")]
	Decode {
		/// Kind of record
		kind: RecordKind,
		/// Record id
		id: u32,
		/// Underlying decoder error
		#[source]
		source: DecodeError,
	},

	/// A key cannot be mapped onto the store's backing medium
	#[error("Invalid store key: {0:?}")]
	InvalidKey(String),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl IndexError {
	/// Creates a [`IndexError::DependencyUnresolvable`].
	pub fn unresolvable(sequence: u32, reason: impl Into<String>) -> Self {
		Self::DependencyUnresolvable {
			sequence,
			reason: reason.into(),
		}
	}

	/// Returns `true` for errors that mean the persisted snapshot should be discarded.
	pub fn is_corrupt_snapshot(&self) -> bool {
		matches!(self, Self::PersistenceCorrupt(_))
	}
}
