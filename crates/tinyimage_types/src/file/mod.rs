//! File format support for `tinyimage-rs`.

mod error;

pub mod tiny;

// Re-export unified error type
pub use error::TinyImageError;

// Re-export main types
pub use tiny::{Color, EmitOptions, EncodedImage, Palette, PixelGrid, Run, encode};
