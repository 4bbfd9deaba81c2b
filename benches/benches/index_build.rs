//! Benchmark suite for the compatibility index
//!
//! Measures full builds, batch granularity, snapshot round trips and
//! queries against synthetic record sets.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml --bench index_build

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rigdex_benches::{generate_npc, generate_source, sizes};
use rigdex_index::{CompatibilityIndex, IndexConfig};
use rigdex_types::def::{Definition, SequenceDefinition};
use std::hint::black_box;

/// Benchmark a full build at two cache sizes
fn bench_build(c: &mut Criterion) {
	let mut group = c.benchmark_group("index_build");

	for sequences in [sizes::SMALL_CACHE, sizes::FULL_CACHE] {
		let source = generate_source(sequences, sizes::BASES);
		group.throughput(Throughput::Elements(u64::from(sequences)));
		group.bench_with_input(BenchmarkId::new("build", sequences), &source, |b, source| {
			b.iter(|| {
				let mut index = CompatibilityIndex::new();
				black_box(index.build(black_box(source)))
			});
		});
	}

	group.finish();
}

/// Benchmark the cost of yielding more often
fn bench_batch_size(c: &mut Criterion) {
	let mut group = c.benchmark_group("index_batch_size");
	let source = generate_source(sizes::FULL_CACHE, sizes::BASES);

	for batch in [10, 100, 1000] {
		group.bench_with_input(BenchmarkId::new("build", batch), &batch, |b, &batch| {
			b.iter(|| {
				let mut index = CompatibilityIndex::with_config(IndexConfig::new(batch));
				let steps = index.begin_build(&source).map_or(0, Iterator::count);
				black_box(steps)
			});
		});
	}

	group.finish();
}

/// Benchmark snapshot serialization and loading
fn bench_snapshot(c: &mut Criterion) {
	let mut group = c.benchmark_group("index_snapshot");

	let mut index = CompatibilityIndex::new();
	index.build(&generate_source(sizes::FULL_CACHE, sizes::BASES));
	let json = index.serialize();
	group.throughput(Throughput::Bytes(json.len() as u64));

	group.bench_function("serialize", |b| {
		b.iter(|| black_box(index.serialize()));
	});

	group.bench_function("load_from_serialized", |b| {
		b.iter(|| {
			let mut restored = CompatibilityIndex::new();
			black_box(restored.load_from_serialized(black_box(&json)))
		});
	});

	group.finish();
}

/// Benchmark compatibility queries
fn bench_query(c: &mut Criterion) {
	let mut group = c.benchmark_group("index_query");

	let mut index = CompatibilityIndex::new();
	index.build(&generate_source(sizes::FULL_CACHE, sizes::BASES));
	let npcs: Vec<_> = (0..64).map(|i| generate_npc(i * 97)).collect();

	group.throughput(Throughput::Elements(npcs.len() as u64));
	group.bench_function("find_compatible_animations", |b| {
		b.iter(|| {
			for npc in &npcs {
				black_box(index.find_compatible_animations(black_box(npc)));
			}
		});
	});

	group.finish();
}

/// Benchmark decoding a frame-based sequence record
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("sequence_decode");

	let frames = 64u16;
	let mut data = vec![1];
	data.extend_from_slice(&frames.to_be_bytes());
	for i in 0..frames {
		data.extend_from_slice(&(4 + i % 3).to_be_bytes());
	}
	for i in 0..frames {
		data.extend_from_slice(&i.to_be_bytes());
	}
	for _ in 0..frames {
		data.extend_from_slice(&1234u16.to_be_bytes());
	}
	data.extend_from_slice(&[5, 7, 8, 3, 0]);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("decode", |b| {
		b.iter(|| black_box(SequenceDefinition::decode(1, black_box(&data))));
	});

	group.finish();
}

criterion_group!(benches, bench_build, bench_batch_size, bench_snapshot, bench_query, bench_decode);

criterion_main!(benches);
