//! Decoded model geometry for one creature pose.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Third colour channel marking a flat-shaded face.
pub const FLAT_SHADED: i32 = -1;

/// Third colour channel marking a face that is not drawn.
pub const HIDDEN_FACE: i32 = -2;

/// Colour triple of one face, one HSL colour per corner.
///
/// The third channel doubles as a shading marker: [`FLAT_SHADED`] means the
/// whole face uses channel 1, [`HIDDEN_FACE`] means the face is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceColors(pub [i32; 3]);

/// Resolved shading of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShading {
	/// One colour per corner
	Gouraud([u16; 3]),
	/// One colour for the whole face
	Flat(u16),
	/// Not drawn
	Hidden,
}

impl FaceShading {
	/// Colours for the three corners, or `None` for hidden faces.
	pub fn corner_colors(&self) -> Option<[u16; 3]> {
		match *self {
			Self::Gouraud(colors) => Some(colors),
			Self::Flat(color) => Some([color; 3]),
			Self::Hidden => None,
		}
	}
}

impl FaceColors {
	/// Interprets the colour triple.
	pub fn shading(&self) -> FaceShading {
		let [a, b, c] = self.0;
		match c {
			HIDDEN_FACE => FaceShading::Hidden,
			FLAT_SHADED => FaceShading::Flat(a as u16),
			_ => FaceShading::Gouraud([a as u16, b as u16, c as u16]),
		}
	}
}

/// Vertex and face data of a model, ready for packing.
///
/// Optional per-face arrays, when present, hold exactly one entry per face.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelGeometry {
	/// Vertex X coordinates
	pub vertices_x: Vec<i32>,
	/// Vertex Y coordinates
	pub vertices_y: Vec<i32>,
	/// Vertex Z coordinates
	pub vertices_z: Vec<i32>,
	/// Vertex indices of each face
	pub faces: Vec<[u32; 3]>,
	/// Colour triple of each face
	pub face_colors: Vec<FaceColors>,
	/// Per-face alpha (255 = opaque)
	pub face_alphas: Option<Vec<u8>>,
	/// Per-face render priority
	pub face_priorities: Option<Vec<u8>>,
	/// Per-face texture id
	pub face_textures: Option<Vec<Option<u16>>>,
	/// Per-face UVs: `[u0, v0, u1, v1, u2, v2]`
	pub face_uvs: Option<Vec<[f32; 6]>>,
}

impl ModelGeometry {
	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices_x.len()
	}

	/// Number of faces.
	pub fn face_count(&self) -> usize {
		self.faces.len()
	}

	/// Position of vertex `index`.
	pub fn vertex(&self, index: usize) -> [i32; 3] {
		[self.vertices_x[index], self.vertices_y[index], self.vertices_z[index]]
	}

	/// Alpha of face `face`, opaque when absent.
	pub fn face_alpha(&self, face: usize) -> u8 {
		self.face_alphas.as_ref().map_or(u8::MAX, |alphas| alphas[face])
	}

	/// Priority of face `face`, 0 when absent.
	pub fn face_priority(&self, face: usize) -> u8 {
		self.face_priorities.as_ref().map_or(0, |priorities| priorities[face])
	}

	/// Texture of face `face`.
	pub fn face_texture(&self, face: usize) -> Option<u16> {
		self.face_textures.as_ref().and_then(|textures| textures[face])
	}

	/// UVs of face `face`, zero when absent.
	pub fn face_uv(&self, face: usize) -> [f32; 6] {
		self.face_uvs.as_ref().map_or([0.0; 6], |uvs| uvs[face])
	}

	/// Checks that every array agrees with the vertex and face counts.
	///
	/// # Errors
	///
	/// Returns a [`GeometryError`] describing the first inconsistency found.
	pub fn validate(&self) -> Result<(), GeometryError> {
		let (x, y, z) = (self.vertices_x.len(), self.vertices_y.len(), self.vertices_z.len());
		if x != y || x != z {
			return Err(GeometryError::VertexArrayMismatch {
				x,
				y,
				z,
			});
		}

		let face_count = self.face_count();
		check_face_attribute("colour", face_count, Some(self.face_colors.len()))?;
		check_face_attribute("alpha", face_count, self.face_alphas.as_ref().map(Vec::len))?;
		check_face_attribute("priority", face_count, self.face_priorities.as_ref().map(Vec::len))?;
		check_face_attribute("texture", face_count, self.face_textures.as_ref().map(Vec::len))?;
		check_face_attribute("uv", face_count, self.face_uvs.as_ref().map(Vec::len))?;

		for (face, indices) in self.faces.iter().enumerate() {
			if let Some(&vertex) = indices.iter().find(|&&v| v as usize >= x) {
				return Err(GeometryError::VertexOutOfRange {
					face,
					vertex: vertex as usize,
					vertex_count: x,
				});
			}
		}

		Ok(())
	}
}

fn check_face_attribute(
	attribute: &'static str,
	expected: usize,
	actual: Option<usize>,
) -> Result<(), GeometryError> {
	match actual {
		Some(actual) if actual != expected => Err(GeometryError::FaceAttributeLength {
			attribute,
			expected,
			actual,
		}),
		_ => Ok(()),
	}
}
