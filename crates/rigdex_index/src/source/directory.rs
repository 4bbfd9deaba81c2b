//! Definition source backed by a directory of raw record files.
//!
//! # Directory Layout
//!
//! ```text
//! <root>/
//! ├── sequences/<id>.dat    SequenceDefinition records
//! ├── frames/<id>.dat       Frame records, id = archive << 16 | file
//! ├── skeletons/<id>.dat    SkeletalSequence records
//! └── npcs/<id>.dat         NpcDefinition records
//! ```
//!
//! Each file holds exactly one opcode stream as extracted from the cache.
//! Records are decoded on every lookup; nothing is cached.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use rigdex_types::def::{Definition, Frame, NpcDefinition, SequenceDefinition, SkeletalSequence};

use super::{DefinitionSource, count_sequences};
use crate::error::IndexError;

/// Sub-directory holding sequence records.
pub const SEQUENCE_DIR: &str = "sequences";
/// Sub-directory holding frame records.
pub const FRAME_DIR: &str = "frames";
/// Sub-directory holding skeletal sequence records.
pub const SKELETAL_DIR: &str = "skeletons";
/// Sub-directory holding NPC records.
pub const NPC_DIR: &str = "npcs";
/// Extension of record files.
pub const RECORD_EXTENSION: &str = "dat";

/// Raw record files on disk, decoded on demand.
#[derive(Debug, Clone)]
pub struct RecordDirectory {
	root: PathBuf,
	sequence_count: u32,
}

impl RecordDirectory {
	/// Opens a record directory and counts its sequences.
	///
	/// A missing `sequences/` sub-directory is treated as empty. A record
	/// named `4294967295.dat` is not counted.
	///
	/// # Errors
	///
	/// Returns an IO error if `root` is not a readable directory.
	pub fn open(root: impl AsRef<Path>) -> Result<Self, IndexError> {
		let root = root.as_ref().to_path_buf();
		if !fs::metadata(&root)?.is_dir() {
			return Err(IndexError::IOError(io::Error::new(
				io::ErrorKind::NotADirectory,
				format!("{} is not a directory", root.display()),
			)));
		}

		let sequence_count = count_sequences(list_ids(&root.join(SEQUENCE_DIR))?.into_iter());
		Ok(Self {
			root,
			sequence_count,
		})
	}

	/// The directory this source reads from.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Lists every NPC id present on disk, ascending.
	///
	/// # Errors
	///
	/// Returns an IO error if the directory cannot be listed.
	pub fn npc_ids(&self) -> Result<Vec<u32>, IndexError> {
		list_ids(&self.root.join(NPC_DIR))
	}

	/// Path of the record file for `id` in `dir`.
	pub fn record_path(&self, dir: &str, id: u32) -> PathBuf {
		self.root.join(dir).join(format!("{id}.{RECORD_EXTENSION}"))
	}

	fn load<T: Definition>(&self, dir: &str, id: u32) -> Result<Option<T>, IndexError> {
		let data = match fs::read(self.record_path(dir, id)) {
			Ok(data) => data,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(err.into()),
		};

		T::decode(id, &data).map(Some).map_err(|source| IndexError::Decode {
			kind: T::KIND,
			id,
			source,
		})
	}
}

/// Collects the numeric stems of `*.dat` files in `dir`, sorted ascending.
fn list_ids(dir: &Path) -> Result<Vec<u32>, IndexError> {
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
		Err(err) => return Err(err.into()),
	};

	let mut ids = Vec::new();
	for entry in entries {
		let path = entry?.path();
		if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
			continue;
		}
		if let Some(id) = path.file_stem().and_then(|stem| stem.to_str()).and_then(|s| s.parse().ok()) {
			ids.push(id);
		}
	}
	ids.sort_unstable();
	Ok(ids)
}

impl DefinitionSource for RecordDirectory {
	fn sequence_count(&self) -> u32 {
		self.sequence_count
	}

	fn sequence(&self, id: u32) -> Result<Option<SequenceDefinition>, IndexError> {
		self.load(SEQUENCE_DIR, id)
	}

	fn frame(&self, id: u32) -> Result<Option<Frame>, IndexError> {
		self.load(FRAME_DIR, id)
	}

	fn skeletal_sequence(&self, id: u32) -> Result<Option<SkeletalSequence>, IndexError> {
		self.load(SKELETAL_DIR, id)
	}

	fn npc(&self, id: u32) -> Result<Option<NpcDefinition>, IndexError> {
		self.load(NPC_DIR, id)
	}
}
