//! Error types for tiny image construction and emission.

use thiserror::Error;

/// Errors that can occur when building a pixel grid, loading a raster
/// image, or emitting a C header.
///
/// The encoder itself ([`crate::file::tiny::encode`]) is total over valid
/// grids and has no error outcomes; every failure mode lives at the
/// boundaries around it.
#[derive(Debug, Error)]
pub enum TinyImageError {
	/// Pixel buffer length does not match the declared dimensions
	#[error(
		"Pixel count mismatch: a {width}x{height} grid needs {expected} pixels, got {actual}"
	)]
	PixelCountMismatch {
		/// Declared grid width
		width: u32,
		/// Declared grid height
		height: u32,
		/// Expected number of pixels (width × height)
		expected: usize,
		/// Actual number of pixels supplied
		actual: usize,
	},

	/// A value does not fit the artifact's 16-bit table fields
	#[error("{field} {value} exceeds the artifact limit of {limit}")]
	ValueTooLarge {
		/// Which artifact field overflowed
		field: &'static str,
		/// The value that did not fit
		value: u64,
		/// The largest value the field can hold
		limit: u64,
	},

	/// The image has no pixels, so there is nothing to emit
	#[error("Cannot emit a header for an empty {width}x{height} image")]
	EmptyImage {
		/// Declared grid width
		width: u32,
		/// Declared grid height
		height: u32,
	},

	/// Raster file could not be decoded
	#[error(transparent)]
	DecodeError(#[from] image::ImageError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
