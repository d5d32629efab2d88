//! C header emission for tiny images.
//!
//! This module renders an [`EncodedImage`] as the `PROGMEM` header file
//! the firmware-side `TinyImage.h` routines consume: a `uint32_t` palette
//! array, a `TinyImageData` run array, and a `TinyImage` instance tying
//! them together with the image dimensions. Every table field is a
//! `uint16_t` on the firmware side, so emission range-checks all values
//! before rendering anything.

use std::fs::File as FsFile;
use std::io::Write;
use std::path::Path;

use crate::file::TinyImageError;

use super::EncodedImage;

/// Largest value the firmware-side `uint16_t` table fields can hold.
const FIELD_LIMIT: u64 = u16::MAX as u64;

/// Table items rendered per output line.
const ITEMS_PER_LINE: usize = 10;

/// Options controlling C header emission.
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
	/// Emit only the variable and data tables, skipping the banner
	/// comment, include guard, and `#include` line. Useful when the
	/// output is pasted into a larger header.
	pub data_only: bool,
	/// Text for the banner's `DATE:` line. `None` omits the line, which
	/// keeps the output byte-identical from build to build.
	pub timestamp: Option<String>,
}

impl EncodedImage {
	/// Renders the image as C header text.
	///
	/// `name` becomes the suffix of the emitted symbols
	/// (`pallet_data_<name>`, `image_data_<name>`, `image_<name>`) after
	/// being reduced to a valid identifier fragment.
	///
	/// # Errors
	///
	/// Returns [`TinyImageError::EmptyImage`] for a zero-pixel image and
	/// [`TinyImageError::ValueTooLarge`] when a dimension, run count, or
	/// run field exceeds the firmware's 16-bit range.
	///
	/// # Examples
	///
	/// ```
	/// use tinyimage_types::file::tiny::{EmitOptions, PixelGrid, encode};
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let grid = PixelGrid::from_raw(3, 1, &[0xFF0000, 0x00FF00, 0xFF0000])?;
	/// let header = encode(&grid).to_header_string("logo", &EmitOptions::default())?;
	///
	/// assert!(header.contains("const uint32_t pallet_data_logo[] PROGMEM"));
	/// assert!(header.contains("{1, 1, 1},"));
	/// # Ok(())
	/// # }
	/// ```
	pub fn to_header_string(
		&self,
		name: &str,
		options: &EmitOptions,
	) -> Result<String, TinyImageError> {
		if self.pixel_count == 0 {
			return Err(TinyImageError::EmptyImage {
				width: self.width,
				height: self.height,
			});
		}

		check_field("image width", self.width as u64)?;
		check_field("image height", self.height as u64)?;
		check_field("run count", self.runs.len() as u64)?;
		for run in &self.runs {
			check_field("run start offset", run.start_offset as u64)?;
			check_field("run length", run.length as u64)?;
			check_field("run palette index", run.palette_index as u64)?;
		}

		let name = sanitize_identifier(name);
		let mut out = String::new();

		if !options.data_only {
			out.push_str("/***********************************************\n");
			out.push_str(&format!(" * FILE: {name}.h\n"));
			if let Some(timestamp) = &options.timestamp {
				out.push_str(&format!(" * DATE: {timestamp}\n"));
			}
			out.push_str(" **********************************************/\n");

			let guard = format!("__{}_H__", name.to_uppercase());
			out.push_str(&format!("#ifndef {guard}\n"));
			out.push_str(&format!("#define {guard}\n\n"));
			out.push_str("#include \"TinyImage.h\"\n\n");
		}

		// Emitted symbols keep the firmware header's "pallet" spelling
		out.push_str(&format!("const uint32_t pallet_data_{name}[] PROGMEM = {{"));
		for (index, color) in self.palette.iter().enumerate() {
			if index % ITEMS_PER_LINE == 0 {
				out.push_str("\n    ");
			}
			out.push_str(&format!("0x{:x},", color.value()));
		}
		out.push_str("\n};\n\n");

		out.push_str(&format!("const TinyImageData image_data_{name}[] PROGMEM = {{"));
		for (index, run) in self.runs.iter().enumerate() {
			if index % ITEMS_PER_LINE == 0 {
				out.push_str("\n    ");
			}
			out.push_str(&format!(
				"{{{}, {}, {}}},",
				run.start_offset, run.length, run.palette_index
			));
		}
		out.push_str("\n};\n\n");

		out.push_str(&format!(
			"const TinyImage image_{name} PROGMEM = {{ image_data_{name}, {}, pallet_data_{name}, {}, {} }};\n",
			self.runs.len(),
			self.width,
			self.height
		));

		if !options.data_only {
			out.push_str("\n#endif\n");
		}

		Ok(out)
	}

	/// Writes the rendered header to the given writer.
	///
	/// # Examples
	///
	/// ```no_run
	/// use tinyimage_types::file::tiny::{EmitOptions, PixelGrid, encode};
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let encoded = encode(&PixelGrid::open("logo.png")?);
	/// let mut stdout = std::io::stdout();
	/// encoded.write_header(&mut stdout, "logo", &EmitOptions::default())?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn write_header<W: Write>(
		&self,
		writer: &mut W,
		name: &str,
		options: &EmitOptions,
	) -> Result<(), TinyImageError> {
		let header = self.to_header_string(name, options)?;
		writer.write_all(header.as_bytes())?;
		Ok(())
	}

	/// Renders the header and saves it to the given path.
	///
	/// # Examples
	///
	/// ```no_run
	/// use tinyimage_types::file::tiny::{EmitOptions, PixelGrid, encode};
	///
	/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
	/// let encoded = encode(&PixelGrid::open("logo.png")?);
	/// encoded.save_header("logo.h", "logo", &EmitOptions::default())?;
	/// # Ok(())
	/// # }
	/// ```
	pub fn save_header(
		&self,
		path: impl AsRef<Path>,
		name: &str,
		options: &EmitOptions,
	) -> Result<(), TinyImageError> {
		let mut file = FsFile::create(path)?;
		self.write_header(&mut file, name, options)
	}
}

/// Checks one value against the firmware's field range.
fn check_field(field: &'static str, value: u64) -> Result<(), TinyImageError> {
	if value > FIELD_LIMIT {
		return Err(TinyImageError::ValueTooLarge {
			field,
			value,
			limit: FIELD_LIMIT,
		});
	}
	Ok(())
}

/// Reduces `name` to a valid C identifier fragment.
///
/// Anything outside `[A-Za-z0-9_]` becomes an underscore, so file stems
/// like `nav-arrow` or `logo.small` yield compilable symbol names. An
/// empty name falls back to `image`.
fn sanitize_identifier(name: &str) -> String {
	let identifier: String = name
		.chars()
		.map(|c| {
			if c.is_ascii_alphanumeric() || c == '_' {
				c
			} else {
				'_'
			}
		})
		.collect();

	if identifier.is_empty() {
		"image".to_string()
	} else {
		identifier
	}
}
