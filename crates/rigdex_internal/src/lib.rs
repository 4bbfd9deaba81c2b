//! This module is separated into its own crate so the `rigdex` facade stays a thin re-export, and should not be used directly.

/// `use rigdex::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export member crates for convenience
pub use rigdex_index;
pub use rigdex_types;

// Re-export commonly used types at crate root
pub use rigdex_index::{CompatibilityIndex, DefinitionSource, IndexConfig, IndexError, KeyValueStore};
pub use rigdex_types::{
	DecodeError, GeometryError,
	def::{Definition, NpcDefinition, SequenceDefinition},
	model::{ModelGeometry, PackedMesh, ShadingMode, encode_model},
};
