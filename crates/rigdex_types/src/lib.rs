//! This crate provides the cache record types and the render codec for the `rigdex` project.
//!
//! # Modules
//!
//! - **def**: Opcode-driven decoder and the records it produces (sequences, NPCs, frames,
//!   skeletal sequences)
//! - **model**: Model geometry, normals and the bit-exact packed vertex format
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use rigdex_types::prelude::*;
//!
//! let npc = NpcDefinition::decode(1, &[0x01, 0x00, 0x05, 0x00, 0x0A, 0x00]).unwrap();
//! assert_eq!(npc.reference_animations(), vec![5, 10]);
//!
//! let normal = pack_normal(0.0, 1.0, 0.0);
//! assert_eq!(normal.components(), [0, 511, 0]);
//! ```

mod error;

pub mod def;
pub mod model;

/// `use rigdex_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::{DecodeError, GeometryError, RecordKind};
