//! Index built from record files, cached through a `DirectoryStore`.

use std::fs;

use rigdex::prelude::*;

use crate::fixtures::scenario;

fn npcs(source: &RecordDirectory) -> Vec<NpcDefinition> {
	source
		.npc_ids()
		.unwrap()
		.into_iter()
		.map(|id| source.npc(id).unwrap().unwrap())
		.collect()
}

#[test_log::test]
fn test_scenario_from_disk() {
	let records = scenario();
	let source = RecordDirectory::open(records.path()).unwrap();

	let mut index = CompatibilityIndex::new();
	let report = index.build(&source).unwrap();

	assert_eq!(report.processed, 12);
	assert_eq!(report.resolved, 3);
	assert_eq!(report.unresolved, 2);
	assert_eq!(report.bases, 2);

	let idle_five = source.npc(1).unwrap().unwrap();
	assert_eq!(index.find_compatible_animations(&idle_five), vec![5, 7]);

	let mixed = source.npc(2).unwrap().unwrap();
	assert_eq!(index.find_compatible_animations(&mixed), vec![5, 7, 8]);

	// sequence 9 never resolves, so the reference list comes back as is
	let broken = source.npc(3).unwrap().unwrap();
	assert_eq!(index.find_compatible_animations(&broken), vec![9]);
}

#[test_log::test]
fn test_compatible_is_superset_of_references() {
	let records = scenario();
	let source = RecordDirectory::open(records.path()).unwrap();
	let mut index = CompatibilityIndex::new();
	index.build(&source);

	assert!(index.is_symmetric());
	for npc in npcs(&source) {
		let compatible = index.find_compatible_animations(&npc);
		for reference in npc.reference_animations() {
			assert!(compatible.contains(&reference), "npc {} lost {reference}", npc.id);
		}
	}
}

#[test_log::test]
fn test_build_twice_matches_build_once() {
	let records = scenario();
	let source = RecordDirectory::open(records.path()).unwrap();

	let mut once = CompatibilityIndex::new();
	once.build(&source);

	let mut twice = CompatibilityIndex::new();
	twice.build(&source);
	assert!(twice.build(&source).is_none());

	assert_eq!(once.snapshot(), twice.snapshot());
}

#[test_log::test]
fn test_progress_reaches_one() {
	let records = scenario();
	let source = RecordDirectory::open(records.path()).unwrap();

	let mut index = CompatibilityIndex::with_config(IndexConfig::new(5));
	let mut values = Vec::new();
	index.build_with_progress(&source, |p| values.push(p));

	assert_eq!(values.len(), 4);
	assert!(values.windows(2).all(|w| w[0] <= w[1]));
	assert!(values.iter().all(|p| (0.0..=1.0).contains(p)));
	assert_eq!(*values.last().unwrap(), 1.0);
}

#[test_log::test]
fn test_snapshot_cache_round_trip() {
	let records = scenario();
	let cache = tempfile::tempdir().unwrap();
	let source = RecordDirectory::open(records.path()).unwrap();
	let mut store = DirectoryStore::new(cache.path());

	let mut built = CompatibilityIndex::new();
	let origin = built.restore_or_build(&mut store, &source, |_| {});
	assert!(matches!(origin, IndexOrigin::Built(_)));

	let mut restored = CompatibilityIndex::new();
	let origin = restored.restore_or_build(&mut store, &source, |_| {});
	assert_eq!(origin, IndexOrigin::Restored);

	for npc in npcs(&source) {
		assert_eq!(
			restored.find_compatible_animations(&npc),
			built.find_compatible_animations(&npc)
		);
	}
}

#[test_log::test]
fn test_corrupt_cache_file_is_rebuilt() {
	let records = scenario();
	let cache = tempfile::tempdir().unwrap();
	let source = RecordDirectory::open(records.path()).unwrap();

	let snapshot_path = cache.path().join(format!("{}.json", IndexConfig::default().snapshot_key));
	fs::write(&snapshot_path, b"{\"version\":1,\"seq_to_base_ids\":[[5,").unwrap();

	let mut store = DirectoryStore::new(cache.path());
	let mut index = CompatibilityIndex::new();
	assert!(index.restore(&store).unwrap_err().is_corrupt_snapshot());
	assert!(!index.is_built());

	let origin = index.restore_or_build(&mut store, &source, |_| {});
	assert!(matches!(origin, IndexOrigin::Built(report) if report.resolved == 3));

	let rewritten = fs::read_to_string(&snapshot_path).unwrap();
	let mut reloaded = CompatibilityIndex::new();
	reloaded.load_from_serialized(&rewritten).unwrap();
	assert_eq!(reloaded.animations_of(10), &[5, 7]);
}

#[test_log::test]
fn test_animation_info_from_disk() {
	let records = scenario();
	let source = RecordDirectory::open(records.path()).unwrap();

	let frames = get_animation_info(&source, 5).unwrap().unwrap();
	assert_eq!(frames.frame_count, 2);
	assert!(!frames.is_skeletal);

	// zero play window falls back to the skeletal duration
	let skeletal = get_animation_info(&source, 7).unwrap().unwrap();
	assert_eq!(skeletal.frame_count, 48);
	assert!(skeletal.is_skeletal);

	assert!(get_animation_info(&source, 6).unwrap().is_none());
	// undecodable record reads as not found
	assert!(get_animation_info(&source, 9).unwrap().is_none());
}
