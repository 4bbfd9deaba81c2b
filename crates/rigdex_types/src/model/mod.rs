//! Model geometry and the packed vertex format consumed by the model shader.
//!
//! The codec is write-only: [`encode_model`] turns a decoded
//! [`ModelGeometry`] into [`PackedMesh`] buffers, and the per-vertex
//! primitives [`pack_vertex`] and [`pack_normal`] define the bit layout.
//!
//! # Usage Examples
//!
//! ```
//! use rigdex_types::model::{FaceColors, ModelGeometry, ShadingMode, encode_model};
//!
//! let model = ModelGeometry {
//!     vertices_x: vec![0, 128, 0],
//!     vertices_y: vec![0, 0, 128],
//!     vertices_z: vec![0, 0, 0],
//!     faces: vec![[0, 1, 2]],
//!     face_colors: vec![FaceColors([100, 200, 300])],
//!     ..Default::default()
//! };
//!
//! let mesh = encode_model(&model, ShadingMode::Smooth).unwrap();
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.vertex_bytes().len(), 36);
//! ```

pub mod geometry;
pub mod mesh;
pub mod normals;
pub mod packing;

pub use self::geometry::{FLAT_SHADED, FaceColors, FaceShading, HIDDEN_FACE, ModelGeometry};
pub use self::mesh::{PackedMesh, encode_model};
pub use self::normals::{DEFAULT_NORMAL, ShadingMode, face_normal, vertex_normals};
pub use self::packing::{
	PackedNormal, PackedVertex, VertexInput, pack_normal, pack_normal_vec3, pack_vertex,
};
