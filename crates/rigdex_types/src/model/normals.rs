//! Face and vertex normals.
//!
//! Normals are computed in render space, i.e. with Y flipped the same way
//! [`pack_vertex`](super::pack_vertex) flips it, so lighting agrees with the
//! packed positions.

use glam::Vec3;

use super::geometry::ModelGeometry;

/// Direction used when a normal cannot be derived.
pub const DEFAULT_NORMAL: Vec3 = Vec3::Y;

/// How normals are assigned to the vertices of a face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShadingMode {
	/// Face normal replicated to all three corners
	#[default]
	Flat,
	/// Per-vertex average of adjacent face normals
	Smooth,
}

fn render_position(model: &ModelGeometry, index: u32) -> Vec3 {
	let [x, y, z] = model.vertex(index as usize);
	Vec3::new(x as f32, -(y as f32), z as f32)
}

fn raw_face_normal(model: &ModelGeometry, face: usize) -> Option<Vec3> {
	let [a, b, c] = model.faces[face];
	let a = render_position(model, a);
	let b = render_position(model, b);
	let c = render_position(model, c);
	(b - a).cross(c - a).try_normalize()
}

/// Unit normal of `face`, or [`DEFAULT_NORMAL`] for degenerate faces.
pub fn face_normal(model: &ModelGeometry, face: usize) -> Vec3 {
	raw_face_normal(model, face).unwrap_or(DEFAULT_NORMAL)
}

/// Per-vertex normals from the sum of adjacent visible face normals.
///
/// Vertices that touch no visible face, or whose accumulated normal cancels
/// out, get [`DEFAULT_NORMAL`].
pub fn vertex_normals(model: &ModelGeometry) -> Vec<Vec3> {
	let mut sums = vec![Vec3::ZERO; model.vertex_count()];

	for (face, colors) in model.face_colors.iter().enumerate() {
		if colors.shading().corner_colors().is_none() {
			continue;
		}
		let Some(normal) = raw_face_normal(model, face) else {
			continue;
		};
		for &vertex in &model.faces[face] {
			sums[vertex as usize] += normal;
		}
	}

	sums.into_iter().map(|sum| sum.try_normalize().unwrap_or(DEFAULT_NORMAL)).collect()
}
