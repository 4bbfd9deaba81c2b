//! Benchmark helper utilities for rigdex
//!
//! This module generates synthetic record sets and models for the benchmark
//! suite. Generation is deterministic so runs are comparable.

use rigdex_index::MemorySource;
use rigdex_types::{
	def::{AnimationSlot, Frame, NpcDefinition, SequenceDefinition, SkeletalSequence, pack_frame_id},
	model::{FLAT_SHADED, FaceColors, ModelGeometry},
};

/// Generates a record set with `sequences` sequences spread over `bases`
/// skeleton bases.
///
/// Every fourth sequence is skeletal; the rest use frames from one archive
/// per sequence. Every 50th sequence points at a missing archive so the
/// unresolved path is exercised too.
pub fn generate_source(sequences: u32, bases: u32) -> MemorySource {
	let bases = bases.max(1);
	let mut source = MemorySource::new();

	for id in 0..sequences {
		let base = id % bases;
		let archive = (id & 0xFFFF) as u16;

		if id % 4 == 3 {
			let skeletal = 100_000 + id;
			source.insert_skeletal(SkeletalSequence {
				id: skeletal,
				base_id: base,
				duration: 30,
			});
			source.insert_sequence(SequenceDefinition {
				id,
				skeletal_id: Some(skeletal),
				skeletal_end: 30,
				..Default::default()
			});
			continue;
		}

		if id % 50 != 49 {
			source.insert_frame(Frame {
				id: pack_frame_id(archive, 0),
				base_id: base,
			});
		}
		source.insert_sequence(SequenceDefinition {
			id,
			frame_ids: (0..8).map(|file| pack_frame_id(archive, file)).collect(),
			frame_durations: vec![4; 8],
			..Default::default()
		});
	}

	source
}

/// Generates an NPC whose reference animations are `first..first + 5`.
pub fn generate_npc(first: u32) -> NpcDefinition {
	let mut npc = NpcDefinition::default();
	for (offset, slot) in AnimationSlot::ALL.iter().take(5).enumerate() {
		npc.animations.set(*slot, Some(first + offset as u32));
	}
	npc
}

/// Generates a grid model of `size` x `size` quads (two triangles each).
///
/// Heights follow a fixed pattern so face normals vary; every seventh face is
/// flat shaded and every other face is textured.
pub fn generate_grid_model(size: u32) -> ModelGeometry {
	let stride = size + 1;
	let mut model = ModelGeometry::default();

	for row in 0..stride {
		for col in 0..stride {
			model.vertices_x.push((col * 32) as i32 - 4096);
			model.vertices_y.push(((row * 7 + col * 13) % 64) as i32);
			model.vertices_z.push((row * 32) as i32 - 4096);
		}
	}

	let mut textures = Vec::new();
	for row in 0..size {
		for col in 0..size {
			let a = row * stride + col;
			let b = a + 1;
			let c = a + stride;
			let d = c + 1;
			model.faces.push([a, c, b]);
			model.faces.push([b, c, d]);
		}
	}

	for face in 0..model.faces.len() {
		let color = (face % 0xFFFF) as i32;
		model.face_colors.push(match face % 7 {
			0 => FaceColors([color, 0, FLAT_SHADED]),
			_ => FaceColors([color, color + 1, color + 2]),
		});
		textures.push((face % 2 == 1).then_some((face % 1024) as u16));
	}
	model.face_textures = Some(textures);

	model
}

/// Common benchmark sizes
pub mod sizes {
	/// Small cache: 1,000 sequences
	pub const SMALL_CACHE: u32 = 1_000;
	/// Full cache: 10,000 sequences, about a live revision
	pub const FULL_CACHE: u32 = 10_000;
	/// Skeleton bases in a generated cache
	pub const BASES: u32 = 400;
	/// Grid model sizes (quads per side)
	pub const GRIDS: [u32; 3] = [8, 32, 96];
}

#[cfg(test)]
mod tests {
	use super::*;
	use rigdex_index::{CompatibilityIndex, DefinitionSource};
	use rigdex_types::model::{ShadingMode, encode_model};

	#[test]
	fn test_generate_source() {
		let source = generate_source(200, 10);
		assert_eq!(source.sequence_count(), 200);

		let mut index = CompatibilityIndex::new();
		let report = index.build(&source).unwrap();
		// ids 49, 149 point at missing archives
		assert_eq!(report.unresolved, 2);
		assert_eq!(report.resolved, 198);
		assert_eq!(report.bases, 10);
	}

	#[test]
	fn test_generate_npc() {
		assert_eq!(generate_npc(20).reference_animations(), vec![20, 21, 22, 23, 24]);
	}

	#[test]
	fn test_generate_grid_model() {
		let model = generate_grid_model(4);
		assert_eq!(model.vertex_count(), 25);
		assert_eq!(model.face_count(), 32);
		assert!(model.validate().is_ok());
		assert_eq!(encode_model(&model, ShadingMode::Smooth).unwrap().face_count(), 32);
	}
}
