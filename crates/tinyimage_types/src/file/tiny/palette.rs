//! Color and palette types for tiny images.
//!
//! A tiny image stores every distinct color exactly once, in an
//! insertion-ordered palette, and refers to colors by index from the run
//! table. Palette index 0 is reserved for the background color; see
//! [`Palette`] for the invariant.

use std::fmt;

use serde::Serialize;

/// A 24-bit RGB color packed as `0x00RRGGBB`.
///
/// Construction masks the value to the low 24 bits, so a `Color` can never
/// carry an alpha byte or other high-bit data: pixels that differ only
/// above bit 23 compare equal and share one palette entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Color(u32);

impl Color {
	/// Mask covering the 24 significant bits.
	pub const RGB_MASK: u32 = 0x00FF_FFFF;

	/// Creates a color from a packed `0xRRGGBB` value.
	///
	/// Bits above the low 24 (for instance the alpha byte of `0xAARRGGBB`
	/// pixel data) are discarded.
	///
	/// # Examples
	///
	/// ```
	/// use tinyimage_types::file::tiny::Color;
	///
	/// assert_eq!(Color::new(0xFF123456), Color::new(0x123456));
	/// ```
	pub const fn new(rgb: u32) -> Self {
		Self(rgb & Self::RGB_MASK)
	}

	/// Creates a color from individual channel values.
	pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
		Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
	}

	/// Returns the packed 24-bit value.
	pub const fn value(&self) -> u32 {
		self.0
	}

	/// Returns the red component.
	pub const fn r(&self) -> u8 {
		((self.0 >> 16) & 0xFF) as u8
	}

	/// Returns the green component.
	pub const fn g(&self) -> u8 {
		((self.0 >> 8) & 0xFF) as u8
	}

	/// Returns the blue component.
	pub const fn b(&self) -> u8 {
		(self.0 & 0xFF) as u8
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:06X}", self.0)
	}
}

impl From<u32> for Color {
	fn from(rgb: u32) -> Self {
		Self::new(rgb)
	}
}

/// An insertion-ordered palette of distinct 24-bit colors.
///
/// # Index 0 is the background
///
/// Position 0 holds the image's background color, the color with the most
/// runs. Consumers rely on that position having this meaning: a pixel
/// offset that no emitted run covers resolves to `palette[0]`, which is
/// what lets the encoder drop every background run from the output table.
///
/// Remaining colors appear in first-seen scan order. No color appears
/// twice; the encoder owns construction and preserves both invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Palette {
	colors: Vec<Color>,
}

impl Palette {
	/// Creates an empty palette.
	///
	/// Only the degenerate zero-pixel image encodes to an empty palette;
	/// every other image has at least a background color.
	pub fn new() -> Self {
		Self {
			colors: Vec::new(),
		}
	}

	/// Appends a color and returns its index.
	///
	/// Callers must have checked that the color is not already present.
	pub(crate) fn push(&mut self, color: Color) -> usize {
		debug_assert!(!self.contains(color), "palette colors must be distinct");
		self.colors.push(color);
		self.colors.len() - 1
	}

	/// Returns the background color (palette index 0), if any.
	pub fn background(&self) -> Option<Color> {
		self.colors.first().copied()
	}

	/// Returns the color at `index`, or `None` if out of range.
	pub fn get(&self, index: usize) -> Option<Color> {
		self.colors.get(index).copied()
	}

	/// Returns the index of `color`, or `None` if not present.
	pub fn index_of(&self, color: Color) -> Option<usize> {
		self.colors.iter().position(|&c| c == color)
	}

	/// Returns `true` if the palette contains `color`.
	pub fn contains(&self, color: Color) -> bool {
		self.index_of(color).is_some()
	}

	/// Returns the number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Returns `true` if the palette holds no colors.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Returns the colors as a slice, background first.
	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	/// Returns an iterator over the colors in palette order.
	pub fn iter(&self) -> impl Iterator<Item = &Color> {
		self.colors.iter()
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Palette: {} colors", self.colors.len())
	}
}

impl std::ops::Index<usize> for Palette {
	type Output = Color;

	fn index(&self, index: usize) -> &Self::Output {
		&self.colors[index]
	}
}
