//! Source pixel grids.
//!
//! A [`PixelGrid`] is the encoder's input: a width, a height, and one
//! [`Color`] per pixel in row-major order. Grids come from decoded image
//! files via [`PixelGrid::open`], from raw packed values via
//! [`PixelGrid::from_raw`], or from any other producer via
//! [`PixelGrid::new`].

use std::path::Path;

use image::RgbImage;

use crate::file::error::TinyImageError;
use crate::file::tiny::palette::Color;

/// A rectangular grid of 24-bit pixels in row-major order.
///
/// The pixel buffer length always equals `width * height`; construction
/// rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
	width: u32,
	height: u32,
	pixels: Vec<Color>,
}

impl PixelGrid {
	/// Creates a grid from pre-built colors.
	///
	/// # Errors
	///
	/// Returns [`TinyImageError::PixelCountMismatch`] if `pixels` does not
	/// hold exactly `width * height` entries.
	pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, TinyImageError> {
		let expected = width as usize * height as usize;
		if pixels.len() != expected {
			return Err(TinyImageError::PixelCountMismatch {
				width,
				height,
				expected,
				actual: pixels.len(),
			});
		}
		Ok(Self {
			width,
			height,
			pixels,
		})
	}

	/// Creates a grid from packed `0xRRGGBB` values.
	///
	/// Bits above the low 24 of each value (typically alpha bytes) are
	/// discarded, exactly as [`Color::new`] does.
	///
	/// # Errors
	///
	/// Returns [`TinyImageError::PixelCountMismatch`] if `raw` does not
	/// hold exactly `width * height` entries.
	pub fn from_raw(width: u32, height: u32, raw: &[u32]) -> Result<Self, TinyImageError> {
		let pixels = raw.iter().map(|&value| Color::new(value)).collect();
		Self::new(width, height, pixels)
	}

	/// Creates an empty zero by zero grid.
	pub fn empty() -> Self {
		Self {
			width: 0,
			height: 0,
			pixels: Vec::new(),
		}
	}

	/// Loads a grid from an image file.
	///
	/// Any format the `image` crate recognizes works; pixels are converted
	/// to RGB, dropping alpha.
	///
	/// # Errors
	///
	/// Returns [`TinyImageError::DecodeError`] if the file cannot be read
	/// or decoded.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TinyImageError> {
		let image = image::open(path)?.to_rgb8();
		Ok(Self::from_rgb_image(&image))
	}

	/// Creates a grid from a decoded RGB image.
	pub fn from_rgb_image(image: &RgbImage) -> Self {
		let pixels = image
			.pixels()
			.map(|pixel| {
				let [r, g, b] = pixel.0;
				Color::from_rgb(r, g, b)
			})
			.collect();
		Self {
			width: image.width(),
			height: image.height(),
			pixels,
		}
	}

	/// Builds a grid from parts the caller has already validated.
	pub(crate) fn from_vec(width: u32, height: u32, pixels: Vec<Color>) -> Self {
		debug_assert_eq!(pixels.len(), width as usize * height as usize);
		Self {
			width,
			height,
			pixels,
		}
	}

	/// Returns the grid width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Returns the grid height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Returns the total pixel count.
	pub fn pixel_count(&self) -> usize {
		self.pixels.len()
	}

	/// Returns the pixels in row-major order.
	pub fn pixels(&self) -> &[Color] {
		&self.pixels
	}

	/// Returns the pixel at `(x, y)`, or `None` if out of bounds.
	pub fn get(&self, x: u32, y: u32) -> Option<Color> {
		if x >= self.width || y >= self.height {
			return None;
		}
		let offset = y as usize * self.width as usize + x as usize;
		self.pixels.get(offset).copied()
	}
}
