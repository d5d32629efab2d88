//! Benchmark helper utilities for tinyimage-rs
//!
//! This module provides deterministic synthetic pixel grids covering the
//! workloads the encoder sees in practice: solid fills, checkerboards,
//! banded gradients, sprite-like art over a dominant background, and
//! worst-case noise where almost every pixel starts a new run.
//!
//! All generators are pure functions of their arguments, so benchmark
//! runs are comparable across machines and revisions.

use tinyimage_types::file::tiny::PixelGrid;

/// Generates a single-color grid
///
/// Best case for the encoder: one run, and even that run is dropped as
/// background.
pub fn solid_grid(width: u32, height: u32, color: u32) -> PixelGrid {
	let raw = vec![color; width as usize * height as usize];
	PixelGrid::from_raw(width, height, &raw).unwrap()
}

/// Generates a two-color checkerboard with the given cell size
///
/// With `cell = 1` this is the many-short-runs case: every run is a
/// single pixel except where row parity lines up at a row boundary.
pub fn checkerboard_grid(width: u32, height: u32, cell: u32) -> PixelGrid {
	let cell = cell.max(1);
	let raw: Vec<u32> = (0..u64::from(width) * u64::from(height))
		.map(|offset| {
			let x = (offset % u64::from(width)) as u32;
			let y = (offset / u64::from(width)) as u32;
			if ((x / cell) + (y / cell)) % 2 == 0 {
				0xFFFFFF
			} else {
				0x000000
			}
		})
		.collect();
	PixelGrid::from_raw(width, height, &raw).unwrap()
}

/// Generates horizontal bands cycling through a small palette
pub fn banded_grid(width: u32, height: u32, band_height: u32, colors: &[u32]) -> PixelGrid {
	let band_height = band_height.max(1);
	let raw: Vec<u32> = (0..u64::from(width) * u64::from(height))
		.map(|offset| {
			let y = (offset / u64::from(width)) as u32;
			colors[((y / band_height) as usize) % colors.len()]
		})
		.collect();
	PixelGrid::from_raw(width, height, &raw).unwrap()
}

/// Generates sprite-like art: a dominant background with scattered
/// foreground shapes drawn from a handful of colors
///
/// This is the workload the format was built for and sits between the
/// solid and noise extremes.
pub fn sprite_grid(width: u32, height: u32) -> PixelGrid {
	const BACKGROUND: u32 = 0x101820;
	const FOREGROUND: [u32; 4] = [0xE84118, 0xFBC531, 0x4CD137, 0x00A8FF];

	let raw: Vec<u32> = (0..u64::from(width) * u64::from(height))
		.map(|offset| {
			let x = (offset % u64::from(width)) as u32;
			let y = (offset / u64::from(width)) as u32;

			// Diamond-ish blobs on a sparse lattice
			let cx = (x % 16) as i64 - 8;
			let cy = (y % 16) as i64 - 8;
			if cx.abs() + cy.abs() < 5 {
				FOREGROUND[(((x / 16) + (y / 16)) % FOREGROUND.len() as u32) as usize]
			} else {
				BACKGROUND
			}
		})
		.collect();
	PixelGrid::from_raw(width, height, &raw).unwrap()
}

/// Generates pseudo-random noise where nearly every pixel differs from
/// its neighbor
///
/// Worst case: run count approaches pixel count and the palette grows
/// with the image.
pub fn noise_grid(width: u32, height: u32) -> PixelGrid {
	let mut state = 0x2545_F491u32;
	let raw: Vec<u32> = (0..u64::from(width) * u64::from(height))
		.map(|_| {
			// xorshift32 keeps the stream deterministic without an RNG dependency
			state ^= state << 13;
			state ^= state >> 17;
			state ^= state << 5;
			state
		})
		.collect();
	PixelGrid::from_raw(width, height, &raw).unwrap()
}

/// Common benchmark sizes for synthetic grids
pub mod sizes {
	/// Icon: 16x16 (256 pixels)
	pub const ICON: (u32, u32) = (16, 16);
	/// Sprite sheet cell: 32x32 (1,024 pixels)
	pub const SPRITE: (u32, u32) = (32, 32);
	/// Display frame: 64x64 (4,096 pixels) - POV clock face size
	pub const FRAME: (u32, u32) = (64, 64);
	/// Small TFT splash: 160x128 (20,480 pixels)
	pub const SPLASH: (u32, u32) = (160, 128);
	/// QVGA panel: 320x240 (76,800 pixels)
	pub const PANEL: (u32, u32) = (320, 240);
}

#[cfg(test)]
mod tests {
	use super::*;
	use tinyimage_types::file::tiny::encode;

	#[test]
	fn test_solid_grid() {
		let grid = solid_grid(8, 8, 0x123456);
		assert_eq!(grid.pixel_count(), 64);

		let encoded = encode(&grid);
		assert_eq!(encoded.palette().len(), 1);
		assert_eq!(encoded.run_count(), 0);
	}

	#[test]
	fn test_checkerboard_grid_alternates() {
		let grid = checkerboard_grid(4, 2, 1);
		let pixels = grid.pixels();
		assert_ne!(pixels[0], pixels[1]);
		assert_ne!(pixels[1], pixels[2]);

		let encoded = encode(&grid);
		assert_eq!(encoded.palette().len(), 2);
	}

	#[test]
	fn test_banded_grid_cycles_colors() {
		let grid = banded_grid(4, 6, 2, &[0xAA, 0xBB, 0xCC]);
		assert_eq!(grid.get(0, 0), grid.get(3, 1));
		assert_ne!(grid.get(0, 1), grid.get(0, 2));
		assert_eq!(encode(&grid).palette().len(), 3);
	}

	#[test]
	fn test_sprite_grid_has_dominant_background() {
		let encoded = encode(&sprite_grid(64, 64));

		// Background must win index 0, with the accent colors behind it
		assert_eq!(
			encoded.palette().background().map(|color| color.value()),
			Some(0x101820)
		);
		assert!(encoded.palette().len() <= 5);
		assert!(encoded.run_count() > 0);
	}

	#[test]
	fn test_noise_grid_is_deterministic() {
		assert_eq!(noise_grid(16, 16), noise_grid(16, 16));
	}

	#[test]
	fn test_sizes_constants() {
		assert_eq!(sizes::ICON, (16, 16));
		assert_eq!(sizes::FRAME, (64, 64));
		assert_eq!(sizes::PANEL, (320, 240));
	}
}
