//! File-per-key store.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use super::KeyValueStore;
use crate::error::IndexError;

/// Stores each key as `<root>/<key>.json`.
///
/// Keys are restricted to ASCII letters, digits, `-`, `_` and `.` (not
/// leading) so they always map to a plain file name inside `root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryStore {
	root: PathBuf,
}

impl DirectoryStore {
	/// Creates a store rooted at `root`. The directory is created on first write.
	pub fn new(root: impl AsRef<Path>) -> Self {
		Self {
			root: root.as_ref().to_path_buf(),
		}
	}

	/// The directory holding the stored files.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn path_for(&self, key: &str) -> Result<PathBuf, IndexError> {
		let valid = !key.is_empty()
			&& !key.starts_with('.')
			&& key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
		if !valid {
			return Err(IndexError::InvalidKey(key.to_owned()));
		}
		Ok(self.root.join(format!("{key}.json")))
	}
}

impl KeyValueStore for DirectoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, IndexError> {
		match fs::read_to_string(self.path_for(key)?) {
			Ok(value) => Ok(Some(value)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), IndexError> {
		let path = self.path_for(key)?;
		fs::create_dir_all(&self.root)?;

		// write next to the target, then swap it in
		let staging = path.with_extension("json.tmp");
		fs::write(&staging, value)?;
		fs::rename(&staging, &path)?;
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), IndexError> {
		match fs::remove_file(self.path_for(key)?) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}
