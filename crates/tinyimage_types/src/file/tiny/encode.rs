//! Tiny Image Run-Length Encoding
//!
//! ## Overview
//!
//! This module implements the encoding algorithm for the tiny image
//! format: a deduplicated color palette plus a run table, with palette
//! index 0 reserved for the background color and the background's runs
//! omitted from the table entirely.
//!
//! ## Algorithm
//!
//! 1. Scan pixels in row-major order and partition them into maximal
//!    same-color runs (runs ignore row boundaries)
//! 2. Count runs per color and pick the background: the color with the
//!    most runs, earliest in scan order winning ties
//! 3. Walk the run list again, appending each first-seen color to the
//!    palette and resolving every run's palette index
//! 4. Drop the background runs; any offset not covered by a surviving
//!    run is implicitly background
//!
//! The whole transform is two passes over the run list after a single
//! pass over the pixels, so encoding is O(pixels + runs).

use std::collections::HashMap;

use super::{Color, EncodedImage, Palette, PixelGrid, Run};

/// A run before palette assignment: raw color instead of palette index.
#[derive(Debug, Clone, Copy)]
struct ScannedRun {
	color: Color,
	start_offset: usize,
	length: usize,
}

/// Partitions `pixels` into maximal same-color runs in scan order.
///
/// The result is gapless: the first run starts at offset 0, each run ends
/// exactly where the next begins, and the last run ends at the pixel
/// count. Adjacent runs always differ in color.
fn scan_runs(pixels: &[Color]) -> Vec<ScannedRun> {
	let mut runs: Vec<ScannedRun> = Vec::new();

	for (offset, &color) in pixels.iter().enumerate() {
		match runs.last_mut() {
			Some(run) if run.color == color => run.length += 1,
			_ => runs.push(ScannedRun {
				color,
				start_offset: offset,
				length: 1,
			}),
		}
	}

	runs
}

/// Picks the color that will own palette index 0.
///
/// The background is the color with the most runs, not the most pixels:
/// a color that keeps interrupting other colors produces many short runs,
/// and dropping those saves the most table entries. Counts are gathered
/// over the whole run list before a winner is chosen, so on ties the
/// color seen earliest in scan order wins regardless of where its later
/// runs fall.
fn select_background(runs: &[ScannedRun]) -> Option<Color> {
	let mut counts: HashMap<Color, usize> = HashMap::new();
	for run in runs {
		*counts.entry(run.color).or_insert(0) += 1;
	}

	let max_count = counts.values().copied().max()?;
	runs.iter()
		.find(|run| counts[&run.color] == max_count)
		.map(|run| run.color)
}

/// Encodes a pixel grid into palette and run tables.
///
/// Encoding is a pure function of the grid: the same input always yields
/// the same palette order and the same run sequence. A zero-pixel grid
/// (width or height 0) encodes to an empty palette and an empty run
/// table rather than failing.
///
/// # Examples
///
/// ```
/// use tinyimage_types::file::tiny::{PixelGrid, Run, encode};
///
/// // Red, green, red: red has two runs, so it becomes the background
/// // and only the green run survives filtering.
/// let grid = PixelGrid::from_raw(3, 1, &[0xFF0000, 0x00FF00, 0xFF0000]).unwrap();
/// let encoded = encode(&grid);
///
/// assert_eq!(encoded.palette().len(), 2);
/// assert_eq!(encoded.runs(), &[Run::new(1, 1, 1)]);
/// ```
pub fn encode(grid: &PixelGrid) -> EncodedImage {
	// Partition the pixel stream into maximal same-color runs
	let scanned = scan_runs(grid.pixels());

	// Reserve palette index 0 for the background color
	let mut palette = Palette::new();
	let mut index_by_color: HashMap<Color, usize> = HashMap::new();
	if let Some(background) = select_background(&scanned) {
		let index = palette.push(background);
		index_by_color.insert(background, index);
	}

	// Assign palette indexes in first-seen order and drop background runs
	let mut runs = Vec::new();
	for run in &scanned {
		let index = match index_by_color.get(&run.color) {
			Some(&index) => index,
			None => {
				let index = palette.push(run.color);
				index_by_color.insert(run.color, index);
				index
			}
		};

		if index != 0 {
			runs.push(Run::new(run.start_offset, run.length, index));
		}
	}

	EncodedImage::from_parts(grid.width(), grid.height(), grid.pixel_count(), palette, runs)
}
