//! Model geometry through the packing codec.

use rigdex::prelude::*;
use rigdex::rigdex_types::model::{FLAT_SHADED, HIDDEN_FACE};

fn field(word: u32, shift: u32, bits: u32) -> u32 {
	(word >> shift) & ((1 << bits) - 1)
}

#[test_log::test]
fn test_position_boundaries_do_not_bleed() {
	let low = pack_vertex(VertexInput {
		position: [-16384, -16384, -16384],
		alpha: 0,
		..Default::default()
	});
	let high = pack_vertex(VertexInput {
		position: [16383, 16383, 16383],
		alpha: 0,
		..Default::default()
	});

	// Y is flipped before offsetting
	assert_eq!(low.position(), [0, 32767, 0]);
	assert_eq!(high.position(), [32767, 1, 32767]);

	for vertex in [low, high] {
		let [w0, w1, w2] = vertex.words;
		assert_eq!(field(w0, 0, 17), 0, "uv bits of word0");
		assert_eq!(field(w1, 15, 17), 0, "colour bits of word1");
		assert_eq!(field(w2, 0, 17), 0, "attribute bits of word2");
	}
}

#[test_log::test]
fn test_up_normal() {
	assert_eq!(pack_normal(0.0, 1.0, 0.0).components(), [0, 511, 0]);
}

/// Two triangles over the same vertices with opposite winding, plus a hidden one.
fn model() -> ModelGeometry {
	ModelGeometry {
		vertices_x: vec![0, 128, 0],
		vertices_y: vec![0, 0, 0],
		vertices_z: vec![0, 0, 128],
		faces: vec![[0, 1, 2], [0, 2, 1], [1, 2, 0]],
		face_colors: vec![
			FaceColors([500, 0, FLAT_SHADED]),
			FaceColors([10, 20, 30]),
			FaceColors([0, 0, HIDDEN_FACE]),
		],
		face_alphas: Some(vec![255, 128, 0]),
		face_textures: Some(vec![None, Some(0x2AB), None]),
		..Default::default()
	}
}

#[test_log::test]
fn test_encode_model_flat() {
	let mesh = encode_model(&model(), ShadingMode::Flat).unwrap();

	assert_eq!(mesh.face_count(), 2);
	assert_eq!(mesh.vertex_bytes().len(), 2 * 3 * 12);
	assert_eq!(mesh.normal_bytes().len(), 2 * 3 * 4);

	let (first, second) = mesh.vertices.split_at(3);
	assert!(first.iter().all(|v| v.color() == 500 && v.alpha() == 255 && !v.is_textured()));
	assert_eq!(second.iter().map(PackedVertex::alpha).collect::<Vec<_>>(), vec![128; 3]);
	assert!(second.iter().all(|v| v.texture_id() == Some(0x2AB)));
	assert_eq!(second[0].color() & 0x7F, 10);

	assert!(mesh.normals[..3].iter().all(|n| n.components() == [0, -511, 0]));
	assert!(mesh.normals[3..].iter().all(|n| n.components() == [0, 511, 0]));
}

#[test_log::test]
fn test_encode_model_smooth_cancels_to_default() {
	let mesh = encode_model(&model(), ShadingMode::Smooth).unwrap();

	// opposite windings cancel out at every shared vertex
	assert!(mesh.normals.iter().all(|n| n.components() == [0, 511, 0]));
}

#[test_log::test]
fn test_invalid_model_is_rejected() {
	let mut model = model();
	model.faces[0] = [0, 1, 7];
	assert!(matches!(
		encode_model(&model, ShadingMode::Flat),
		Err(GeometryError::VertexOutOfRange { face: 0, vertex: 7, .. })
	));
}
