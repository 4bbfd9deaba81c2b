//! Vertex and normal packing for the model shader.
//!
//! The vertex shader reads three `u32` words per vertex and one `u32` per
//! normal. The layout below is shared with the shader source and must stay
//! bit-exact:
//!
//! ```text
//! word0  31..17 x (15)   16..11 u low (6)   10..0 v (11)
//! word1  31 textured     30..15 colour (16)  14..0 y (15)
//! word2  31..17 z (15)   16..9 alpha (8)     8..6 priority (3)
//!        5 texture bit 9                     4..0 u high (5)
//!
//! normal 31..22 nx (10)  21..12 ny (10)      11..2 nz (10)   1..0 unused
//! ```
//!
//! Positions are model-space fixed point in `[-16384, 16383]`; Y is flipped
//! so that up is positive in clip space. UVs are quantized to 11 bits.

use bytemuck::{Pod, Zeroable};

// ============================================================================
// Layout Constants
// ============================================================================

/// Offset added to each position axis before packing.
pub const POSITION_OFFSET: i32 = 16384;

/// Largest packed position value (15 bits).
pub const POSITION_MAX: i32 = 0x7FFF;

/// UV quantization scale.
pub const UV_SCALE: f32 = 2048.0;

/// Largest packed UV value (11 bits).
pub const UV_MAX: i32 = 0x7FF;

/// Colour bits kept when a face is textured (HSL lightness).
pub const TEXTURED_COLOR_MASK: u16 = 0x7F;

/// Texture id bits stored in the colour field.
pub const TEXTURE_LOW_MASK: u16 = 0x1FF;

/// Render priority mask (3 bits).
pub const PRIORITY_MASK: u8 = 0x7;

/// Scale applied to normal components.
pub const NORMAL_SCALE: f32 = 511.0;

const NORMAL_BITS_MASK: u32 = 0x3FF;

// ============================================================================
// Vertices
// ============================================================================

/// Attributes of one vertex before packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInput {
	/// Model-space position
	pub position: [i32; 3],
	/// 16-bit HSL colour
	pub color: u16,
	/// Opacity, 255 = opaque
	pub alpha: u8,
	/// Texture coordinates in `[0, 1)`
	pub uv: [f32; 2],
	/// Texture id for textured faces (10 bits used)
	pub texture_id: Option<u16>,
	/// Render priority (3 bits used)
	pub priority: u8,
}

impl Default for VertexInput {
	fn default() -> Self {
		Self {
			position: [0; 3],
			color: 0,
			alpha: u8::MAX,
			uv: [0.0; 2],
			texture_id: None,
			priority: 0,
		}
	}
}

/// One vertex in shader layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedVertex {
	/// The three packed words
	pub words: [u32; 3],
}

impl PackedVertex {
	/// Packed `(x, y, z)` fields, each in `[0, 32767]`.
	pub fn position(&self) -> [u32; 3] {
		[self.words[0] >> 17, self.words[1] & 0x7FFF, self.words[2] >> 17]
	}

	/// Packed `(u, v)` fields, each in `[0, 2047]`.
	pub fn uv(&self) -> [u32; 2] {
		let u = ((self.words[2] & 0x1F) << 6) | ((self.words[0] >> 11) & 0x3F);
		[u, self.words[0] & 0x7FF]
	}

	/// Colour field, including texture id bits when textured.
	pub fn color(&self) -> u16 {
		((self.words[1] >> 15) & 0xFFFF) as u16
	}

	/// Returns `true` if the textured flag is set.
	pub fn is_textured(&self) -> bool {
		self.words[1] >> 31 != 0
	}

	/// Texture id for textured vertices.
	pub fn texture_id(&self) -> Option<u16> {
		self.is_textured().then(|| {
			let low = self.color() >> 7;
			let high = ((self.words[2] >> 5) & 1) as u16;
			(high << 9) | low
		})
	}

	/// Alpha field.
	pub fn alpha(&self) -> u8 {
		((self.words[2] >> 9) & 0xFF) as u8
	}

	/// Priority field.
	pub fn priority(&self) -> u8 {
		((self.words[2] >> 6) & 0x7) as u8
	}
}

#[inline]
fn pack_axis(value: i32) -> u32 {
	value.saturating_add(POSITION_OFFSET).clamp(0, POSITION_MAX) as u32
}

#[inline]
fn quantize_uv(value: f32) -> u32 {
	// `as` saturates and maps NaN to 0
	((value * UV_SCALE) as i32).clamp(0, UV_MAX) as u32
}

/// Packs one vertex into the three-word shader layout.
///
/// # Examples
///
/// ```
/// use rigdex_types::model::{VertexInput, pack_vertex};
///
/// let packed = pack_vertex(VertexInput {
///     position: [-16384, 0, 16383],
///     ..Default::default()
/// });
/// assert_eq!(packed.position(), [0, 16384, 32767]);
/// assert_eq!(packed.alpha(), 255);
/// ```
pub fn pack_vertex(input: VertexInput) -> PackedVertex {
	let [x, y, z] = input.position;
	let x = pack_axis(x);
	let y = pack_axis(y.saturating_neg());
	let z = pack_axis(z);

	let u = quantize_uv(input.uv[0]);
	let v = quantize_uv(input.uv[1]);

	let (color, textured, texture_high) = match input.texture_id {
		Some(texture) => {
			let color = (input.color & TEXTURED_COLOR_MASK) | ((texture & TEXTURE_LOW_MASK) << 7);
			(color, 1u32, u32::from((texture >> 9) & 1))
		}
		None => (input.color, 0, 0),
	};

	let alpha = u32::from(input.alpha);
	let priority = u32::from(input.priority & PRIORITY_MASK);

	PackedVertex {
		words: [
			(x << 17) | ((u & 0x3F) << 11) | v,
			y | (u32::from(color) << 15) | (textured << 31),
			(z << 17) | (alpha << 9) | (priority << 6) | (texture_high << 5) | (u >> 6),
		],
	}
}

// ============================================================================
// Normals
// ============================================================================

/// A unit direction as three 10-bit signed-normalized components.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct PackedNormal(pub u32);

impl PackedNormal {
	/// Sign-extended `(nx, ny, nz)` components in `[-511, 511]`.
	pub fn components(&self) -> [i16; 3] {
		let field = |shift: u32| {
			let raw = ((self.0 >> shift) & NORMAL_BITS_MASK) as i16;
			if raw >= 512 { raw - 1024 } else { raw }
		};
		[field(22), field(12), field(2)]
	}
}

#[inline]
fn snorm10(value: f32) -> u32 {
	let scaled = (value.clamp(-1.0, 1.0) * NORMAL_SCALE).round() as i32;
	let encoded = if scaled < 0 { scaled + 1024 } else { scaled };
	encoded as u32 & NORMAL_BITS_MASK
}

/// Packs a unit normal into one word.
///
/// Each component is clamped to `[-1, 1]`, scaled by 511 and rounded to the
/// nearest integer. Exact ties round away from zero, so `-0.5` encodes as
/// `-256` and `0.5` as `256`. NaN components encode as 0.
///
/// # Examples
///
/// ```
/// use rigdex_types::model::pack_normal;
///
/// let up = pack_normal(0.0, 1.0, 0.0);
/// assert_eq!(up.components(), [0, 511, 0]);
/// ```
pub fn pack_normal(nx: f32, ny: f32, nz: f32) -> PackedNormal {
	PackedNormal((snorm10(nx) << 22) | (snorm10(ny) << 12) | (snorm10(nz) << 2))
}

/// Packs a [`glam::Vec3`] normal.
#[inline]
pub fn pack_normal_vec3(normal: glam::Vec3) -> PackedNormal {
	pack_normal(normal.x, normal.y, normal.z)
}
