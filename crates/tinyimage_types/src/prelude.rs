//! Prelude module for `tinyimage_types`.
//!
//! This module provides a convenient way to import commonly used types,
//! functions, and the error type.
//!
//! # Examples
//!
//! ```
//! use tinyimage_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let grid = PixelGrid::from_raw(2, 2, &[0, 0, 0xFFFFFF, 0]).unwrap();
//! let encoded = encode(&grid);
//! assert_eq!(encoded.palette().len(), 2);
//! ```

#[doc(inline)]
pub use crate::file::{
	// Color and palette types
	Color,
	// Header emission
	EmitOptions,
	// Encoder output
	EncodedImage,
	Palette,
	// Encoder input
	PixelGrid,
	Run,

	// Unified error type
	TinyImageError,

	// The encoder itself
	encode,
};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
