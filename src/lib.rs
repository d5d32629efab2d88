//! `tinyimage-rs` turns raster images into run-length palette tables small
//! enough to live in microcontroller `PROGMEM`, along with the C header
//! glue the firmware side needs to render them.
//!
//! The heavy lifting lives in the `tinyimage_types` crate; this facade
//! re-exports it. See [`prelude`] for the common imports and the
//! `tinyimage_utils` example for the command-line workflow.
//!
//! ```
//! use tinyimage_rs::prelude::*;
//!
//! let grid = PixelGrid::from_raw(3, 1, &[0xFF0000, 0x00FF00, 0xFF0000]).unwrap();
//! let encoded = encode(&grid);
//! assert_eq!(encoded.run_count(), 1);
//! ```

pub use tinyimage_types::*;

// Re-export commonly used types at crate root
pub use tinyimage_types::file::{
	Color, EmitOptions, EncodedImage, Palette, PixelGrid, Run, TinyImageError, encode,
};
