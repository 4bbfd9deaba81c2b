//! Configuration for building and persisting the compatibility index.

/// Default number of sequence ids processed per build batch.
pub const DEFAULT_BATCH_SIZE: u32 = 100;

/// Default key under which snapshots are stored.
pub const DEFAULT_SNAPSHOT_KEY: &str = "skeleton-compatibility-index";

/// Controls batching and persistence of a [`CompatibilityIndex`].
///
/// The batch size sets how often a build pass hands control back to its
/// caller. Smaller batches keep an interactive caller responsive, larger ones
/// finish sooner.
///
/// # Presets
///
/// - `default()`: 100 ids per batch
/// - `responsive()`: 25 ids per batch
/// - `throughput()`: 1000 ids per batch
///
/// # Examples
///
/// ```
/// use rigdex_index::IndexConfig;
///
/// let config = IndexConfig::default();
/// assert_eq!(config.batch_size, 100);
///
/// let config = IndexConfig::new(250).with_snapshot_key("rev-231");
/// assert_eq!(config.snapshot_key, "rev-231");
/// ```
///
/// [`CompatibilityIndex`]: super::CompatibilityIndex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
	/// Sequence ids per batch; 0 is treated as 1
	pub batch_size: u32,
	/// Store key for snapshots
	pub snapshot_key: String,
}

impl Default for IndexConfig {
	fn default() -> Self {
		Self {
			batch_size: DEFAULT_BATCH_SIZE,
			snapshot_key: DEFAULT_SNAPSHOT_KEY.to_owned(),
		}
	}
}

impl IndexConfig {
	/// Create a configuration with a custom batch size.
	pub fn new(batch_size: u32) -> Self {
		Self {
			batch_size,
			..Self::default()
		}
	}

	/// Small batches for callers that must stay interactive.
	pub fn responsive() -> Self {
		Self::new(25)
	}

	/// Large batches for offline tools.
	pub fn throughput() -> Self {
		Self::new(1000)
	}

	/// Replaces the snapshot key.
	pub fn with_snapshot_key(mut self, key: impl Into<String>) -> Self {
		self.snapshot_key = key.into();
		self
	}

	pub(crate) fn effective_batch_size(&self) -> u32 {
		self.batch_size.max(1)
	}
}
