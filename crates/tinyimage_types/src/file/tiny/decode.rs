//! Tiny Image Reconstruction
//!
//! ## Overview
//!
//! This module implements pixel lookup and full-grid reconstruction from
//! an encoded image, mirroring what the firmware-side consumer does with
//! the emitted tables: binary-search the run table for the run covering a
//! pixel offset, and fall back to palette index 0 (the background) when
//! no run covers it.
//!
//! Reconstruction is mainly a verification tool on the host side: a grid
//! that survives `encode` → [`EncodedImage::to_grid`] unchanged proves
//! the tables describe the image exactly.

use super::{Color, EncodedImage, PixelGrid, Run};

impl EncodedImage {
	/// Returns the color of the pixel at `(x, y)`, or `None` if the
	/// coordinates lie outside the image.
	///
	/// Offsets not covered by any stored run resolve to the background
	/// color, exactly as the firmware-side lookup does.
	pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}

		let offset = y as usize * self.width as usize + x as usize;
		match self.run_covering(offset) {
			Some(run) => self.palette.get(run.palette_index),
			None => self.palette.background(),
		}
	}

	/// Finds the stored run covering `offset`, if any.
	///
	/// Runs are sorted by start offset, so the candidate is the last run
	/// starting at or before `offset`; it either covers the offset or
	/// nothing does.
	fn run_covering(&self, offset: usize) -> Option<&Run> {
		let upper = self.runs.partition_point(|run| run.start_offset <= offset);
		let run = self.runs[..upper].last()?;
		run.covers(offset).then_some(run)
	}

	/// Reconstructs the full pixel grid the tables describe.
	///
	/// Every pixel starts as the background color, then each stored run
	/// paints its span. Dimensions survive even for zero-pixel images.
	pub fn to_grid(&self) -> PixelGrid {
		let background = self.palette.background().unwrap_or_default();
		let mut pixels = vec![background; self.pixel_count];

		for run in &self.runs {
			let color = self.palette[run.palette_index];
			pixels[run.start_offset..run.start_offset + run.length].fill(color);
		}

		PixelGrid::from_vec(self.width, self.height, pixels)
	}
}
