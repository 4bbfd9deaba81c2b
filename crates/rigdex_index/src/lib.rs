//! Skeleton compatibility index over decoded animation records.
//!
//! - [`source`]: where records come from ([`DefinitionSource`])
//! - [`compat`]: the index itself, its resumable build and snapshots
//! - [`store`]: key-value persistence for snapshots ([`KeyValueStore`])

mod error;

/// `use rigdex_index::prelude::*;` to import commonly used items.
pub mod prelude;

pub mod compat;
pub mod source;
pub mod store;

pub use compat::{
	AnimationInfo, BuildPass, BuildProgress, BuildReport, CompatibilityIndex, IndexConfig, IndexOrigin,
	IndexSnapshot, get_animation_info,
};
pub use error::IndexError;
pub use source::{DefinitionSource, MemorySource, RecordDirectory, resolve_bases};
pub use store::{DirectoryStore, KeyValueStore, MemoryStore};
