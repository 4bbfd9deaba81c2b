//! Per-sequence summary lookups.

use log::debug;
use rigdex_types::def::Playback;
use serde::{Deserialize, Serialize};

use crate::{error::IndexError, source::DefinitionSource};

/// Frame count and kind of one animation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationInfo {
	/// Sequence id
	pub id: u32,
	/// Number of frames the sequence plays
	pub frame_count: u32,
	/// Whether the sequence is driven by a skeletal sequence
	pub is_skeletal: bool,
}

/// Looks up the frame count and kind of sequence `id`.
///
/// Frame-based sequences count their frame ids. Skeletal sequences count
/// `end - start` of their play window; a zero-length window falls back to the
/// skeletal sequence's own duration, or 0 if that cannot be loaded.
///
/// Returns `Ok(None)` if the source has no such sequence or its record
/// cannot be decoded.
///
/// # Errors
///
/// Returns the source's error if the sequence cannot be read, e.g. on IO
/// failure.
pub fn get_animation_info<S: DefinitionSource + ?Sized>(
	source: &S,
	id: u32,
) -> Result<Option<AnimationInfo>, IndexError> {
	let sequence = match source.sequence(id) {
		Ok(Some(sequence)) => sequence,
		Ok(None) => return Ok(None),
		Err(err @ IndexError::Decode { .. }) => {
			debug!("Sequence {id} cannot be decoded: {err}");
			return Ok(None);
		}
		Err(err) => return Err(err),
	};

	let frame_count = match sequence.playback() {
		Playback::Frames(frames) => frames.len() as u32,
		Playback::Skeletal {
			sequence: skeletal_id,
			start,
			end,
		} => match end.saturating_sub(start) {
			0 => source.skeletal_sequence(skeletal_id).ok().flatten().map_or(0, |s| s.duration),
			window => window,
		},
	};

	Ok(Some(AnimationInfo {
		id,
		frame_count,
		is_skeletal: sequence.is_skeletal(),
	}))
}
