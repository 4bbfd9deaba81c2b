//! Cache record definitions and the opcode decoder that reads them.
//!
//! Every record is decoded by [`Definition::decode`], which looks each
//! opcode up in the record type's static [`OpcodeTable`]. Decoding is a pure
//! function of the input bytes; no state survives between records.
//!
//! # Usage Examples
//!
//! ```
//! use rigdex_types::def::{AnimationSlot, Definition, NpcDefinition};
//!
//! // opcode 1: idle = 5, walk = 10, then the terminator
//! let npc = NpcDefinition::decode(0, &[0x01, 0x00, 0x05, 0x00, 0x0A, 0x00]).unwrap();
//! assert_eq!(npc.animations.get(AnimationSlot::Idle), Some(5));
//! assert_eq!(npc.animations.get(AnimationSlot::Walk), Some(10));
//! ```

pub mod cursor;
pub mod frame;
pub mod npc;
pub mod opcode;
pub mod sequence;
pub mod skeletal;

pub use self::cursor::{ByteCursor, NONE_U16};
pub use self::frame::{Frame, pack_frame_id, unpack_frame_id};
pub use self::npc::{AnimationSlot, BodyPartTransform, NpcDefinition, ReferenceAnimations};
pub use self::opcode::{Definition, OpcodeHandler, OpcodeTable, TERMINATOR, decode_into};
pub use self::sequence::{Playback, SequenceDefinition};
pub use self::skeletal::SkeletalSequence;
