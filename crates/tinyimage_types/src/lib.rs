//! This crate provides the core data types and the encoder for the
//! `tinyimage-rs` project.
//!
//! A tiny image is a palette-indexed, run-length representation of a raster
//! image, built for embedding as a read-only lookup table in microcontroller
//! firmware. The encoder deduplicates colors into an insertion-ordered
//! palette, partitions the pixel stream into maximal same-color runs, and
//! drops every run of the background color (palette index 0): the firmware
//! side treats any offset without a run as background, so the dominant fill
//! color of an image costs no storage at all.
//!
//! # Pipeline
//!
//! - [`file::tiny::PixelGrid`]: validated W×H grid of 24-bit RGB pixels,
//!   loadable from any raster file the `image` crate can decode
//! - [`file::tiny::encode`]: the deterministic grid → [`file::tiny::EncodedImage`]
//!   transform
//! - [`file::tiny::EncodedImage::write_header`]: renders the `PROGMEM` C
//!   header consumed by the firmware-side `TinyImage.h` routines
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use tinyimage_types::prelude::*;
//!
//! // A 3x1 image: red, green, red. Red has the most runs, so it becomes
//! // the background and only the green run is stored.
//! let grid = PixelGrid::from_raw(3, 1, &[0xFF0000, 0x00FF00, 0xFF0000]).unwrap();
//! let encoded = encode(&grid);
//!
//! assert_eq!(encoded.palette().background(), Some(Color::new(0xFF0000)));
//! assert_eq!(encoded.runs(), &[Run::new(1, 1, 1)]);
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use tinyimage_types::file::tiny::{self, EmitOptions, PixelGrid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = PixelGrid::open("logo.png")?;
//! let encoded = tiny::encode(&grid);
//! encoded.save_header("logo.h", "logo", &EmitOptions::default())?;
//! # Ok(())
//! # }
//! ```

pub mod file;

/// `use tinyimage_types::prelude::*;` to import commonly used items.
pub mod prelude;
