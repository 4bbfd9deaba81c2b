//! Whole-model encoding into GPU buffers.

use crate::error::GeometryError;

use super::{
	geometry::ModelGeometry,
	normals::{ShadingMode, face_normal, vertex_normals},
	packing::{PackedNormal, PackedVertex, VertexInput, pack_normal_vec3, pack_vertex},
};

/// Packed vertex and normal streams for one model.
///
/// Faces are expanded: every visible face contributes three consecutive
/// vertices and three matching normals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedMesh {
	/// Packed vertices, three per visible face
	pub vertices: Vec<PackedVertex>,
	/// Packed normals, parallel to `vertices`
	pub normals: Vec<PackedNormal>,
}

impl PackedMesh {
	/// Number of packed vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of packed faces.
	pub fn face_count(&self) -> usize {
		self.vertices.len() / 3
	}

	/// Vertex stream as raw bytes.
	pub fn vertex_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.vertices)
	}

	/// Normal stream as raw bytes.
	pub fn normal_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.normals)
	}
}

/// Packs every visible face of `model`.
///
/// # Errors
///
/// Returns a [`GeometryError`] if the model fails [`ModelGeometry::validate`].
pub fn encode_model(model: &ModelGeometry, shading: ShadingMode) -> Result<PackedMesh, GeometryError> {
	model.validate()?;

	let smooth = match shading {
		ShadingMode::Smooth => Some(vertex_normals(model)),
		ShadingMode::Flat => None,
	};

	let mut mesh = PackedMesh {
		vertices: Vec::with_capacity(model.face_count() * 3),
		normals: Vec::with_capacity(model.face_count() * 3),
	};

	for (face, indices) in model.faces.iter().enumerate() {
		let Some(colors) = model.face_colors[face].shading().corner_colors() else {
			continue;
		};

		let alpha = model.face_alpha(face);
		let priority = model.face_priority(face);
		let texture_id = model.face_texture(face);
		let uvs = model.face_uv(face);
		let flat_normal = pack_normal_vec3(face_normal(model, face));

		for corner in 0..3 {
			let vertex = indices[corner] as usize;
			mesh.vertices.push(pack_vertex(VertexInput {
				position: model.vertex(vertex),
				color: colors[corner],
				alpha,
				uv: [uvs[corner * 2], uvs[corner * 2 + 1]],
				texture_id,
				priority,
			}));

			let normal = match &smooth {
				Some(normals) => pack_normal_vec3(normals[vertex]),
				None => flat_normal,
			};
			mesh.normals.push(normal);
		}
	}

	Ok(mesh)
}
