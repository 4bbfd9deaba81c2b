//! Record byte builders and an on-disk scenario.

use std::{fs, path::Path};

use rigdex::rigdex_index::source::{FRAME_DIR, NPC_DIR, SEQUENCE_DIR, SKELETAL_DIR};
use rigdex::rigdex_types::def::{NONE_U16, pack_frame_id};
use tempfile::TempDir;

pub fn frame_record(base: u16) -> Vec<u8> {
	let mut data = vec![1];
	data.extend_from_slice(&base.to_be_bytes());
	data.push(0);
	data
}

pub fn skeletal_record(base: u16, duration: u16) -> Vec<u8> {
	let mut data = vec![1];
	data.extend_from_slice(&base.to_be_bytes());
	data.push(2);
	data.extend_from_slice(&duration.to_be_bytes());
	data.push(0);
	data
}

/// Frame-based sequence; each frame is `(archive, file, duration)`.
pub fn frames_sequence_record(frames: &[(u16, u16, u16)]) -> Vec<u8> {
	let mut data = vec![1];
	data.extend_from_slice(&(frames.len() as u16).to_be_bytes());
	for &(_, _, duration) in frames {
		data.extend_from_slice(&duration.to_be_bytes());
	}
	for &(_, file, _) in frames {
		data.extend_from_slice(&file.to_be_bytes());
	}
	for &(archive, _, _) in frames {
		data.extend_from_slice(&archive.to_be_bytes());
	}
	data.push(0);
	data
}

pub fn skeletal_sequence_record(skeletal: u16, start: u16, end: u16) -> Vec<u8> {
	let mut data = vec![13];
	data.extend_from_slice(&skeletal.to_be_bytes());
	data.push(14);
	data.extend_from_slice(&start.to_be_bytes());
	data.extend_from_slice(&end.to_be_bytes());
	data.push(0);
	data
}

/// NPC with idle and walk animations set by opcode 1.
pub fn npc_record(idle: Option<u16>, walk: Option<u16>) -> Vec<u8> {
	let mut data = vec![1];
	data.extend_from_slice(&idle.unwrap_or(NONE_U16).to_be_bytes());
	data.extend_from_slice(&walk.unwrap_or(NONE_U16).to_be_bytes());
	data.push(0);
	data
}

pub fn write_record(root: &Path, dir: &str, id: u32, data: &[u8]) {
	let dir = root.join(dir);
	fs::create_dir_all(&dir).unwrap();
	fs::write(dir.join(format!("{id}.dat")), data).unwrap();
}

/// Writes the reference scenario:
///
/// - sequence 5: frames of archive 3 (base 10)
/// - sequence 7: skeletal sequence 100 (base 10), zero play window
/// - sequence 8: frames of archive 4 (base 20)
/// - sequence 9: unknown opcode, never resolves
/// - sequence 11: frames of archive 6, which has no frame records
/// - NPC 1: idle 5; NPC 2: idle 8, walk 5; NPC 3: idle 9; NPC 4: nothing
pub fn scenario() -> TempDir {
	let tmp = tempfile::tempdir().unwrap();
	let root = tmp.path();

	write_record(root, FRAME_DIR, pack_frame_id(3, 0), &frame_record(10));
	write_record(root, FRAME_DIR, pack_frame_id(3, 1), &frame_record(10));
	write_record(root, FRAME_DIR, pack_frame_id(4, 0), &frame_record(20));
	write_record(root, SKELETAL_DIR, 100, &skeletal_record(10, 48));

	write_record(root, SEQUENCE_DIR, 5, &frames_sequence_record(&[(3, 0, 4), (3, 1, 6)]));
	write_record(root, SEQUENCE_DIR, 7, &skeletal_sequence_record(100, 0, 0));
	write_record(root, SEQUENCE_DIR, 8, &frames_sequence_record(&[(4, 0, 5)]));
	write_record(root, SEQUENCE_DIR, 9, &[99, 0]);
	write_record(root, SEQUENCE_DIR, 11, &frames_sequence_record(&[(6, 0, 5)]));

	write_record(root, NPC_DIR, 1, &npc_record(Some(5), None));
	write_record(root, NPC_DIR, 2, &npc_record(Some(8), Some(5)));
	write_record(root, NPC_DIR, 3, &npc_record(Some(9), None));
	write_record(root, NPC_DIR, 4, &npc_record(None, None));

	tmp
}
