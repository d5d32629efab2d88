//! Benchmark suite for tiny image encoding
//!
//! This benchmark measures run-length encoding across the pixel
//! patterns the encoder meets in practice and helps identify hot
//! paths in the scan and palette stages.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinyimage_benches::{banded_grid, checkerboard_grid, noise_grid, sizes, solid_grid, sprite_grid};
use tinyimage_types::file::tiny::{EmitOptions, encode};

/// Benchmark encoding across representative pixel patterns
fn bench_encode_patterns(c: &mut Criterion) {
	let mut group = c.benchmark_group("tiny_encode_patterns");

	let (width, height) = sizes::FRAME;
	let grids = vec![
		("solid", solid_grid(width, height, 0x101820)),
		("checkerboard", checkerboard_grid(width, height, 1)),
		("banded", banded_grid(width, height, 4, &[0xE84118, 0xFBC531, 0x4CD137])),
		("sprite", sprite_grid(width, height)),
		("noise", noise_grid(width, height)),
	];

	for (name, grid) in &grids {
		group.throughput(Throughput::Elements(grid.pixel_count() as u64));
		group.bench_with_input(BenchmarkId::new("encode", name), grid, |b, grid| {
			b.iter(|| {
				let result = encode(black_box(grid));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark how encoding scales with image size
fn bench_encode_sizes(c: &mut Criterion) {
	let mut group = c.benchmark_group("tiny_encode_sizes");

	let cases = [
		("icon", sizes::ICON),
		("sprite", sizes::SPRITE),
		("frame", sizes::FRAME),
		("splash", sizes::SPLASH),
		("panel", sizes::PANEL),
	];

	for (name, (width, height)) in cases {
		let grid = sprite_grid(width, height);
		group.throughput(Throughput::Elements(grid.pixel_count() as u64));
		group.bench_with_input(BenchmarkId::new("sprite", name), &grid, |b, grid| {
			b.iter(|| {
				let result = encode(black_box(grid));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark C header rendering separately from encoding
fn bench_header_rendering(c: &mut Criterion) {
	let mut group = c.benchmark_group("tiny_header");

	let (width, height) = sizes::FRAME;
	let encoded = encode(&sprite_grid(width, height));
	let options = EmitOptions::default();

	group.throughput(Throughput::Elements(encoded.run_count() as u64));
	group.bench_function("render_header", |b| {
		b.iter(|| {
			let result = encoded.to_header_string(black_box("bench"), &options);
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark reconstruction back to pixels
fn bench_reconstruction(c: &mut Criterion) {
	let mut group = c.benchmark_group("tiny_reconstruct");

	let (width, height) = sizes::FRAME;
	let encoded = encode(&sprite_grid(width, height));

	group.throughput(Throughput::Elements(encoded.pixel_count() as u64));
	group.bench_function("to_grid", |b| {
		b.iter(|| {
			let result = black_box(&encoded).to_grid();
			black_box(result)
		});
	});

	group.bench_function("color_at_sweep", |b| {
		b.iter(|| {
			let mut sum = 0u64;
			for y in 0..height {
				for x in 0..width {
					if let Some(color) = encoded.color_at(x, y) {
						sum = sum.wrapping_add(u64::from(color.value()));
					}
				}
			}
			black_box(sum)
		});
	});

	group.finish();
}

/// Full encode-and-render pipeline at panel resolution
fn bench_realistic_workload(c: &mut Criterion) {
	let mut group = c.benchmark_group("tiny_realistic");

	let (width, height) = sizes::PANEL;
	let grid = sprite_grid(width, height);

	group.throughput(Throughput::Elements(grid.pixel_count() as u64));
	group.sample_size(50); // Fewer samples for larger workload

	group.bench_function("encode_and_render", |b| {
		b.iter(|| {
			let encoded = encode(black_box(&grid));
			let header = encoded.to_header_string("panel", &EmitOptions::default());
			black_box(header)
		});
	});

	group.finish();

	// Print summary statistics
	let encoded = encode(&grid);
	println!("\n=== Benchmark Summary ===");
	println!("Image size: {}x{} ({} pixels)", width, height, grid.pixel_count());
	println!(
		"Palette: {} colors, {} runs",
		encoded.palette().len(),
		encoded.run_count()
	);
	println!(
		"Table size: {} bytes (raw RGB: {} bytes)",
		encoded.table_bytes(),
		encoded.raw_bytes()
	);
}

criterion_group!(
	benches,
	bench_encode_patterns,
	bench_encode_sizes,
	bench_header_rendering,
	bench_reconstruction,
	bench_realistic_workload,
);

criterion_main!(benches);
