//! Prelude module for `rigdex_index`.
//!
//! # Examples
//!
//! ```
//! use rigdex_index::prelude::*;
//!
//! let mut index = CompatibilityIndex::new();
//! let mut store = MemoryStore::new();
//! let origin = index.restore_or_build(&mut store, &MemorySource::new(), |_| {});
//! assert!(matches!(origin, IndexOrigin::Built(_)));
//! assert!(index.restore(&store).unwrap());
//! ```

#[doc(inline)]
pub use crate::compat::{
	AnimationInfo, BuildPass, BuildProgress, BuildReport, CompatibilityIndex, DEFAULT_BATCH_SIZE,
	IndexConfig, IndexOrigin, IndexSnapshot, get_animation_info,
};

#[doc(inline)]
pub use crate::source::{DefinitionSource, MemorySource, RecordDirectory};

#[doc(inline)]
pub use crate::store::{DirectoryStore, KeyValueStore, MemoryStore};

#[doc(inline)]
pub use crate::IndexError;
