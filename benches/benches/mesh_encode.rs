//! Benchmark suite for the vertex/normal packing codec
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench mesh_encode

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rigdex_benches::{generate_grid_model, sizes};
use rigdex_types::model::{ShadingMode, VertexInput, encode_model, pack_normal, pack_vertex};
use std::hint::black_box;

/// Benchmark the per-vertex primitives
fn bench_primitives(c: &mut Criterion) {
	let mut group = c.benchmark_group("packing");

	let inputs: Vec<VertexInput> = (0..4096)
		.map(|i| VertexInput {
			position: [i * 3 - 6000, 2000 - i, i * 5 - 10000],
			color: (i * 17) as u16,
			alpha: (i % 256) as u8,
			uv: [(i % 64) as f32 / 64.0, (i % 32) as f32 / 32.0],
			texture_id: (i % 3 == 0).then_some((i % 1024) as u16),
			priority: (i % 8) as u8,
		})
		.collect();

	group.throughput(Throughput::Elements(inputs.len() as u64));
	group.bench_function("pack_vertex", |b| {
		b.iter(|| {
			for input in &inputs {
				black_box(pack_vertex(black_box(*input)));
			}
		});
	});

	group.bench_function("pack_normal", |b| {
		b.iter(|| {
			for (i, input) in inputs.iter().enumerate() {
				let t = i as f32 * 0.001;
				black_box(pack_normal(t.sin(), t.cos(), input.uv[0] - 0.5));
			}
		});
	});

	group.finish();
}

/// Benchmark whole-model encoding in both shading modes
fn bench_encode_model(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode_model");

	for size in sizes::GRIDS {
		let model = generate_grid_model(size);
		group.throughput(Throughput::Elements(model.face_count() as u64));

		for (name, shading) in [("flat", ShadingMode::Flat), ("smooth", ShadingMode::Smooth)] {
			group.bench_with_input(BenchmarkId::new(name, size), &model, |b, model| {
				b.iter(|| black_box(encode_model(black_box(model), shading)));
			});
		}
	}

	group.finish();
}

criterion_group!(benches, bench_primitives, bench_encode_model);

criterion_main!(benches);
