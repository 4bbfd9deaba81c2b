//! Prelude module for `rigdex_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and functions.
//!
//! # Examples
//!
//! ```
//! use rigdex_types::prelude::*;
//!
//! let seq = SequenceDefinition::decode(7, &[13, 0x00, 0x2A, 0]).unwrap();
//! assert!(seq.is_skeletal());
//! ```

#[doc(inline)]
pub use crate::def::{
	AnimationSlot, BodyPartTransform, ByteCursor, Definition, Frame, NpcDefinition, Playback,
	ReferenceAnimations, SequenceDefinition, SkeletalSequence, pack_frame_id, unpack_frame_id,
};

#[doc(inline)]
pub use crate::model::{
	FaceColors, FaceShading, ModelGeometry, PackedMesh, PackedNormal, PackedVertex, ShadingMode,
	VertexInput, encode_model, pack_normal, pack_vertex,
};

#[doc(inline)]
pub use crate::{DecodeError, GeometryError, RecordKind};

// Re-export the modules for advanced usage
#[doc(inline)]
pub use crate::{def, model};
