//! Run table entries.

use std::fmt;

use serde::Serialize;

/// One maximal stretch of same-colored pixels in row-major scan order.
///
/// Offsets count pixels from the top-left corner, left to right then top
/// to bottom, ignoring row boundaries: a run may span the end of one row
/// and the start of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
	/// Offset of the run's first pixel.
	pub start_offset: usize,
	/// Number of pixels the run covers, always at least 1.
	pub length: usize,
	/// Index of the run's color in the image palette.
	pub palette_index: usize,
}

impl Run {
	/// Creates a run.
	pub const fn new(start_offset: usize, length: usize, palette_index: usize) -> Self {
		Self {
			start_offset,
			length,
			palette_index,
		}
	}

	/// Returns the offset one past the run's last pixel.
	pub const fn end_offset(&self) -> usize {
		self.start_offset + self.length
	}

	/// Returns `true` if the run covers the pixel at `offset`.
	pub const fn covers(&self, offset: usize) -> bool {
		offset >= self.start_offset && offset < self.end_offset()
	}
}

impl fmt::Display for Run {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Run: start {} len {} palette {}",
			self.start_offset, self.length, self.palette_index
		)
	}
}
