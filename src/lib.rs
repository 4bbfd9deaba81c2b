#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `rigdex` decodes animation cache records, indexes which animations share a
//! skeleton, and packs model geometry into the fixed vertex layout shaders read.
//!
//! ```
//! use rigdex::prelude::*;
//!
//! let mut source = MemorySource::new();
//! source.insert_frame(Frame { id: pack_frame_id(3, 0), base_id: 10 });
//! source.insert_skeletal(SkeletalSequence { id: 100, base_id: 10, duration: 30 });
//! source.insert_sequence(SequenceDefinition::decode(
//!     5,
//!     // one frame: duration 4, file 0 of archive 3
//!     &[1, 0x00, 0x01, 0x00, 0x04, 0x00, 0x00, 0x00, 0x03, 0],
//! ).unwrap());
//! source.insert_sequence(SequenceDefinition::decode(7, &[13, 0x00, 0x64, 0]).unwrap());
//!
//! let mut index = CompatibilityIndex::new();
//! index.build(&source);
//!
//! let npc = NpcDefinition::decode(1, &[1, 0x00, 0x05, 0xFF, 0xFF, 0]).unwrap();
//! assert_eq!(index.find_compatible_animations(&npc), vec![5, 7]);
//! ```
pub use rigdex_internal::*;
