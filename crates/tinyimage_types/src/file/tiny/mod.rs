//! Tiny image format support for the `tinyimage-rs` project.
//!
//! A tiny image stores a raster image as two parallel tables built for
//! `PROGMEM` embedding: a palette of distinct 24-bit colors and a list of
//! same-color pixel runs referencing the palette by index. Palette index
//! 0 holds the background color, the color with the most runs, and its
//! runs are never stored: the firmware-side lookup treats any offset
//! without a run as background, which is where the format wins its size.

mod decode;
mod encode;
mod grid;
mod header;
mod palette;
mod run;

use std::fmt::Display;

use serde::Serialize;

pub use encode::encode;
pub use grid::PixelGrid;
pub use header::EmitOptions;
pub use palette::{Color, Palette};
pub use run::Run;

/// Bytes one palette entry occupies in the emitted artifact (`uint32_t`).
const PALETTE_ENTRY_BYTES: usize = 4;

/// Bytes one run entry occupies in the emitted artifact (three `uint16_t`).
const RUN_ENTRY_BYTES: usize = 6;

/// A run-length encoded image: palette, run table, and dimensions.
///
/// Produced by [`encode`]; immutable afterwards. The run table holds only
/// non-background runs, sorted by start offset, so consumers can
/// binary-search it and fall back to [`Palette::background`] for any
/// uncovered offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedImage {
	/// Image width in pixels
	width: u32,

	/// Image height in pixels
	height: u32,

	/// Total pixel count of the source image
	pixel_count: usize,

	/// Distinct colors, background first
	palette: Palette,

	/// Stored runs, background runs omitted
	runs: Vec<Run>,
}

impl EncodedImage {
	/// Assembles an encoded image from parts the encoder has validated.
	pub(crate) fn from_parts(
		width: u32,
		height: u32,
		pixel_count: usize,
		palette: Palette,
		runs: Vec<Run>,
	) -> Self {
		Self {
			width,
			height,
			pixel_count,
			palette,
			runs,
		}
	}

	/// Returns the image width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the image height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the total pixel count of the source image.
	pub fn pixel_count(&self) -> usize {
		self.pixel_count
	}

	/// Returns the color palette, background first.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Returns the stored runs in scan order.
	pub fn runs(&self) -> &[Run] {
		&self.runs
	}

	/// Returns the number of stored runs.
	pub fn run_count(&self) -> usize {
		self.runs.len()
	}

	/// Returns the bytes the palette and run tables occupy once emitted.
	pub fn table_bytes(&self) -> usize {
		self.palette.len() * PALETTE_ENTRY_BYTES + self.runs.len() * RUN_ENTRY_BYTES
	}

	/// Returns the bytes the source image would occupy stored raw, one
	/// packed 24-bit color per pixel.
	pub fn raw_bytes(&self) -> usize {
		self.pixel_count * 3
	}
}

impl Display for EncodedImage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Tiny Image:\n\
			- Width: {} pixels\n\
			- Height: {} pixels\n\
			- Palette: {} colors\n\
			- Stored Runs: {}\n\
			- Table Size: {} bytes (raw: {} bytes)",
			self.width,
			self.height,
			self.palette.len(),
			self.runs.len(),
			self.table_bytes(),
			self.raw_bytes(),
		)
	}
}
