//! Prelude module for `rigdex_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use rigdex_internal::prelude::*;
//!
//! // Decode an NPC and ask the (unbuilt) index what it can play
//! let npc = NpcDefinition::decode(1, &[0x01, 0x00, 0x05, 0x00, 0x0A, 0x00]).unwrap();
//! let index = CompatibilityIndex::new();
//! assert_eq!(index.find_compatible_animations(&npc), vec![5, 10]);
//!
//! // Pack a vertex
//! let packed = pack_vertex(VertexInput::default());
//! assert_eq!(packed.position(), [16384, 16384, 16384]);
//! ```

// Re-export everything from both preludes
#[doc(inline)]
pub use rigdex_index::prelude::*;
#[doc(inline)]
pub use rigdex_types::prelude::*;

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use rigdex_index;
#[doc(inline)]
pub use rigdex_types;
