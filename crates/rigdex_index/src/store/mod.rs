//! Key-value persistence port for index snapshots.
//!
//! The index does not care where snapshots live. Anything that can map a
//! string key to a string value implements [`KeyValueStore`]; tests use
//! [`MemoryStore`], tools use [`DirectoryStore`].

mod directory;

use std::collections::HashMap;

use crate::error::IndexError;

pub use self::directory::DirectoryStore;

/// String key-value storage.
pub trait KeyValueStore {
	/// Reads the value stored under `key`.
	fn get(&self, key: &str) -> Result<Option<String>, IndexError>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&mut self, key: &str, value: &str) -> Result<(), IndexError>;

	/// Removes `key`. Removing a missing key is not an error.
	fn remove(&mut self, key: &str) -> Result<(), IndexError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
	entries: HashMap<String, String>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, IndexError> {
		Ok(self.entries.get(key).cloned())
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), IndexError> {
		self.entries.insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&mut self, key: &str) -> Result<(), IndexError> {
		self.entries.remove(key);
		Ok(())
	}
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
	fn get(&self, key: &str) -> Result<Option<String>, IndexError> {
		(**self).get(key)
	}

	fn set(&mut self, key: &str, value: &str) -> Result<(), IndexError> {
		(**self).set(key, value)
	}

	fn remove(&mut self, key: &str) -> Result<(), IndexError> {
		(**self).remove(key)
	}
}
