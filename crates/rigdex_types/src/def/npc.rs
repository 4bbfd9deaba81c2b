//! NPC definition records.
//!
//! Only the fields that matter for picking and previewing animations are
//! modelled: the reference animation slots, scale/size, lighting tweaks and
//! the per-body-part transforms some creatures carry.
//!
//! # Opcodes
//!
//! ```text
//! Op  Fields
//! --  ----------------------------------------------------------
//!  1  idle u16, walk u16
//!  2  walk-back u16, walk-left u16, walk-right u16
//!  3  turn-left u16, turn-right u16
//!  4  run u16, run-back u16, run-left u16, run-right u16
//!  5  crawl u16, crawl-back u16, crawl-left u16, crawl-right u16
//!  6  size u8
//!  7  combat level u16
//!  8  width scale u16, height scale u16
//!  9  ambient i8, contrast i8
//! 10  head icon u16
//! 11  rotation speed u16
//! 12  hidden on minimap
//! 13  not interactable
//! 14  category u16
//! 15  count u8, count × (part u8, rx i16, ry i16, rz i16, tx i16, ty i16, tz i16)
//! ```
//!
//! Animation ids of `0xFFFF` decode to `None`.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, RecordKind};

use super::{
	cursor::ByteCursor,
	opcode::{Definition, OpcodeTable},
};

/// Default model scale (128 = 1.0).
pub const DEFAULT_SCALE: u16 = 128;

/// Default rotation speed in JAU per tick.
pub const DEFAULT_ROTATION_SPEED: u16 = 32;

/// Reference animation slots an NPC can define.
///
/// The order of the variants is the order in which
/// [`NpcDefinition::reference_animations`] reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationSlot {
	/// Standing still
	Idle,
	/// Walking forward
	Walk,
	/// Walking backward
	WalkBack,
	/// Strafing left
	WalkLeft,
	/// Strafing right
	WalkRight,
	/// Turning on the spot, left
	TurnLeft,
	/// Turning on the spot, right
	TurnRight,
	/// Running forward
	Run,
	/// Running backward
	RunBack,
	/// Running left
	RunLeft,
	/// Running right
	RunRight,
	/// Crawling forward
	Crawl,
	/// Crawling backward
	CrawlBack,
	/// Crawling left
	CrawlLeft,
	/// Crawling right
	CrawlRight,
}

impl AnimationSlot {
	/// Every slot, in reporting order.
	pub const ALL: [Self; 15] = [
		Self::Idle,
		Self::Walk,
		Self::WalkBack,
		Self::WalkLeft,
		Self::WalkRight,
		Self::TurnLeft,
		Self::TurnRight,
		Self::Run,
		Self::RunBack,
		Self::RunLeft,
		Self::RunRight,
		Self::Crawl,
		Self::CrawlBack,
		Self::CrawlLeft,
		Self::CrawlRight,
	];
}

/// Reference animation ids of an NPC, one per [`AnimationSlot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceAnimations {
	slots: [Option<u32>; 15],
}

impl ReferenceAnimations {
	/// Returns the sequence id stored in `slot`.
	pub fn get(&self, slot: AnimationSlot) -> Option<u32> {
		self.slots[slot as usize]
	}

	/// Stores a sequence id in `slot`.
	pub fn set(&mut self, slot: AnimationSlot, sequence: Option<u32>) {
		self.slots[slot as usize] = sequence;
	}

	/// Iterates `(slot, id)` for every populated slot.
	pub fn iter(&self) -> impl Iterator<Item = (AnimationSlot, u32)> + '_ {
		AnimationSlot::ALL.into_iter().filter_map(|slot| self.get(slot).map(|id| (slot, id)))
	}
}

/// Rotation and translation applied to one body part of an NPC model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartTransform {
	/// Body part index
	pub part: u8,
	/// Rotation around X, Y, Z
	pub rotation: [i16; 3],
	/// Translation along X, Y, Z
	pub translation: [i16; 3],
}

/// A decoded NPC definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcDefinition {
	/// NPC id
	pub id: u32,
	/// Reference animations
	pub animations: ReferenceAnimations,
	/// Tile footprint
	pub size: u8,
	/// Combat level, if the NPC can be fought
	pub combat_level: Option<u32>,
	/// Horizontal scale (128 = 1.0)
	pub width_scale: u16,
	/// Vertical scale (128 = 1.0)
	pub height_scale: u16,
	/// Ambient lighting offset
	pub ambient: i8,
	/// Contrast lighting offset
	pub contrast: i8,
	/// Overhead icon
	pub head_icon: Option<u32>,
	/// Turn speed
	pub rotation_speed: u16,
	/// Drawn on the minimap
	pub minimap_visible: bool,
	/// Can be clicked
	pub interactable: bool,
	/// Category id
	pub category: Option<u32>,
	/// Per-body-part transforms
	pub body_transforms: Vec<BodyPartTransform>,
}

impl NpcDefinition {
	/// Returns the populated reference animation ids, de-duplicated, in slot
	/// order of first occurrence.
	pub fn reference_animations(&self) -> Vec<u32> {
		let mut ids: Vec<u32> = Vec::new();
		for (_, id) in self.animations.iter() {
			if !ids.contains(&id) {
				ids.push(id);
			}
		}
		ids
	}
}

fn read_slots(
	npc: &mut NpcDefinition,
	cursor: &mut ByteCursor<'_>,
	slots: &[AnimationSlot],
) -> Result<(), DecodeError> {
	for &slot in slots {
		let id = cursor.read_optional_id()?;
		npc.animations.set(slot, id);
	}
	Ok(())
}

fn read_idle_walk(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	read_slots(npc, cursor, &[AnimationSlot::Idle, AnimationSlot::Walk])
}

fn read_walk_directions(
	npc: &mut NpcDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	read_slots(
		npc,
		cursor,
		&[AnimationSlot::WalkBack, AnimationSlot::WalkLeft, AnimationSlot::WalkRight],
	)
}

fn read_turns(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	read_slots(npc, cursor, &[AnimationSlot::TurnLeft, AnimationSlot::TurnRight])
}

fn read_runs(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	read_slots(
		npc,
		cursor,
		&[AnimationSlot::Run, AnimationSlot::RunBack, AnimationSlot::RunLeft, AnimationSlot::RunRight],
	)
}

fn read_crawls(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	read_slots(
		npc,
		cursor,
		&[
			AnimationSlot::Crawl,
			AnimationSlot::CrawlBack,
			AnimationSlot::CrawlLeft,
			AnimationSlot::CrawlRight,
		],
	)
}

fn read_size(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.size = cursor.read_u8()?;
	Ok(())
}

fn read_combat_level(
	npc: &mut NpcDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	npc.combat_level = cursor.read_optional_id()?;
	Ok(())
}

fn read_scale(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.width_scale = cursor.read_u16()?;
	npc.height_scale = cursor.read_u16()?;
	Ok(())
}

fn read_lighting(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.ambient = cursor.read_i8()?;
	npc.contrast = cursor.read_i8()?;
	Ok(())
}

fn read_head_icon(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.head_icon = cursor.read_optional_id()?;
	Ok(())
}

fn read_rotation_speed(
	npc: &mut NpcDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	npc.rotation_speed = cursor.read_u16()?;
	Ok(())
}

fn hide_on_minimap(npc: &mut NpcDefinition, _: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.minimap_visible = false;
	Ok(())
}

fn disable_interaction(npc: &mut NpcDefinition, _: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.interactable = false;
	Ok(())
}

fn read_category(npc: &mut NpcDefinition, cursor: &mut ByteCursor<'_>) -> Result<(), DecodeError> {
	npc.category = cursor.read_optional_id()?;
	Ok(())
}

fn read_body_transforms(
	npc: &mut NpcDefinition,
	cursor: &mut ByteCursor<'_>,
) -> Result<(), DecodeError> {
	let count = cursor.read_u8()?;
	let mut transforms = Vec::with_capacity(count as usize);
	for _ in 0..count {
		let part = cursor.read_u8()?;
		let rotation = [cursor.read_i16()?, cursor.read_i16()?, cursor.read_i16()?];
		let translation = [cursor.read_i16()?, cursor.read_i16()?, cursor.read_i16()?];
		transforms.push(BodyPartTransform {
			part,
			rotation,
			translation,
		});
	}
	npc.body_transforms = transforms;
	Ok(())
}

static NPC_OPCODES: OpcodeTable<NpcDefinition> = OpcodeTable::new()
	.with(1, read_idle_walk)
	.with(2, read_walk_directions)
	.with(3, read_turns)
	.with(4, read_runs)
	.with(5, read_crawls)
	.with(6, read_size)
	.with(7, read_combat_level)
	.with(8, read_scale)
	.with(9, read_lighting)
	.with(10, read_head_icon)
	.with(11, read_rotation_speed)
	.with(12, hide_on_minimap)
	.with(13, disable_interaction)
	.with(14, read_category)
	.with(15, read_body_transforms);

impl Definition for NpcDefinition {
	const KIND: RecordKind = RecordKind::Npc;

	fn empty(id: u32) -> Self {
		Self {
			id,
			animations: ReferenceAnimations::default(),
			size: 1,
			combat_level: None,
			width_scale: DEFAULT_SCALE,
			height_scale: DEFAULT_SCALE,
			ambient: 0,
			contrast: 0,
			head_icon: None,
			rotation_speed: DEFAULT_ROTATION_SPEED,
			minimap_visible: true,
			interactable: true,
			category: None,
			body_transforms: Vec::new(),
		}
	}

	fn opcode_table() -> &'static OpcodeTable<Self> {
		&NPC_OPCODES
	}
}

impl Default for NpcDefinition {
	fn default() -> Self {
		Self::empty(0)
	}
}
