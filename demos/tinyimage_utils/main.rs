//! Tiny Image CLI Utility
//!
//! A command-line tool for turning raster images into `PROGMEM`-friendly
//! C headers, and for inspecting and verifying the encoded tables.
//!
//! # Features
//!
//! - **generate**: Encode an image and render its C header
//! - **inspect**: Print encoding statistics, optionally as JSON
//! - **verify**: Re-expand the tables and compare against the source pixels
//! - **batch**: Generate headers for every image under a directory
//!
//! # Usage
//!
//! ```bash
//! # Render logo.png to stdout
//! cargo run --example tinyimage_utils generate logo.png
//!
//! # Write logo.h with reproducible (date-free) output
//! cargo run --example tinyimage_utils generate logo.png logo.h --no-date
//!
//! # Convert a whole sprite directory
//! cargo run --example tinyimage_utils batch assets/sprites -o firmware/include
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tinyimage_rs::prelude::file::tiny::{
	EmitOptions, EncodedImage, Palette, PixelGrid, Run, encode,
};
use walkdir::WalkDir;

/// File extensions treated as source images during batch scans
const IMAGE_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "tga", "tiff"];

#[derive(Parser)]
#[command(name = "tinyimage_utils")]
#[command(author = "tinyimage-rs project")]
#[command(version)]
#[command(about = "Tiny image utility - generate, inspect, and verify PROGMEM headers", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Generate a C header from an image file
	Generate {
		/// Input image file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Output header path (stdout when omitted)
		#[arg(value_name = "OUTPUT")]
		output: Option<PathBuf>,

		/// Symbol name suffix (defaults to the input file stem)
		#[arg(short, long, value_name = "NAME")]
		name: Option<String>,

		/// Emit only the variable and data tables
		#[arg(short, long)]
		data_only: bool,

		/// Skip the DATE line so output is reproducible
		#[arg(long)]
		no_date: bool,

		/// Show verbose output
		#[arg(short, long)]
		verbose: bool,
	},

	/// Print encoding statistics for an image file
	Inspect {
		/// Input image file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Emit the report as pretty-printed JSON
		#[arg(short, long)]
		json: bool,
	},

	/// Re-expand the encoded tables and compare them against the source
	Verify {
		/// Input image file path
		#[arg(value_name = "INPUT")]
		input: PathBuf,

		/// Also check every pixel through the point-lookup path
		#[arg(short, long)]
		verbose: bool,
	},

	/// Generate headers for every image under a directory
	Batch {
		/// Directory containing source images
		#[arg(value_name = "INPUT_DIR")]
		input_dir: PathBuf,

		/// Directory for generated headers (defaults to the input directory)
		#[arg(short, long, value_name = "DIR")]
		output_dir: Option<PathBuf>,

		/// Recurse into sub-directories while scanning
		#[arg(short, long)]
		recursive: bool,

		/// Emit only the variable and data tables
		#[arg(short, long)]
		data_only: bool,

		/// Skip the DATE line so output is reproducible
		#[arg(long)]
		no_date: bool,
	},
}

/// JSON payload for `inspect --json`
#[derive(Serialize)]
struct InspectReport<'a> {
	file: String,
	width: u32,
	height: u32,
	pixel_count: usize,
	palette_size: usize,
	run_count: usize,
	table_bytes: usize,
	raw_bytes: usize,
	savings_percent: f64,
	palette: &'a Palette,
	runs: &'a [Run],
}

#[derive(Default)]
struct BatchTotals {
	files_total: usize,
	files_ok: usize,
	files_failed: usize,
	table_bytes: usize,
	raw_bytes: usize,
}

/// Loads and encodes one image file
fn load_and_encode(input: &Path) -> Result<EncodedImage> {
	let grid = PixelGrid::open(input)
		.with_context(|| format!("Failed to load {}", input.display()))?;
	Ok(encode(&grid))
}

/// Table size as a percentage saved against raw 24-bit storage
fn savings_percent(table_bytes: usize, raw_bytes: usize) -> f64 {
	if raw_bytes == 0 {
		return 0.0;
	}
	(1.0 - table_bytes as f64 / raw_bytes as f64) * 100.0
}

/// Picks the symbol name: explicit override, else the input file stem
fn symbol_name(input: &Path, explicit: Option<&str>) -> String {
	match explicit {
		Some(name) => name.to_string(),
		None => input
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_else(|| "image".to_string()),
	}
}

/// Banner timestamp, unless reproducible output was requested
fn timestamp(no_date: bool) -> Option<String> {
	(!no_date).then(|| Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Handle generate command
fn handle_generate(
	input: PathBuf,
	output: Option<PathBuf>,
	name: Option<String>,
	data_only: bool,
	no_date: bool,
	verbose: bool,
) -> Result<()> {
	let to_file = output.is_some();

	if verbose && to_file {
		println!("🔄 Generating tiny image header");
		println!("   Input:  {}", input.display());
	}

	let grid = PixelGrid::open(&input)
		.with_context(|| format!("Failed to load {}", input.display()))?;
	let encoded = encode(&grid);
	let saved = savings_percent(encoded.table_bytes(), encoded.raw_bytes());

	if verbose && to_file {
		println!("   ✓ Loaded {}x{} image ({} pixels)", grid.width(), grid.height(), grid.pixel_count());
		println!("   ✓ Palette: {} colors", encoded.palette().len());
		println!("   ✓ Stored runs: {}", encoded.run_count());
		println!(
			"   ✓ Table size: {} bytes (raw {} bytes, {:.1}% saved)",
			encoded.table_bytes(),
			encoded.raw_bytes(),
			saved
		);
	}

	let name = symbol_name(&input, name.as_deref());
	let options = EmitOptions {
		data_only,
		timestamp: timestamp(no_date),
	};

	match output {
		Some(path) => {
			encoded
				.save_header(&path, &name, &options)
				.with_context(|| format!("Failed to write {}", path.display()))?;

			if verbose {
				println!("   ✓ Saved to {}", path.display());
				println!("\n✅ Header generated successfully!");
			} else {
				println!("✓ Generated {} -> {} ({:.1}% saved)", input.display(), path.display(), saved);
			}
		}
		None => {
			// Header goes to stdout, so diagnostics stay on stderr
			encoded
				.write_header(&mut io::stdout(), &name, &options)
				.context("Failed to write header to stdout")?;
			log::debug!("wrote header for {} to stdout", input.display());
		}
	}

	Ok(())
}

/// Handle inspect command
fn handle_inspect(input: PathBuf, json: bool) -> Result<()> {
	let encoded = load_and_encode(&input)?;
	let saved = savings_percent(encoded.table_bytes(), encoded.raw_bytes());

	if json {
		let report = InspectReport {
			file: input.display().to_string(),
			width: encoded.width(),
			height: encoded.height(),
			pixel_count: encoded.pixel_count(),
			palette_size: encoded.palette().len(),
			run_count: encoded.run_count(),
			table_bytes: encoded.table_bytes(),
			raw_bytes: encoded.raw_bytes(),
			savings_percent: saved,
			palette: encoded.palette(),
			runs: encoded.runs(),
		};
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("File: {}", input.display());
		println!("{}", encoded);
		println!("- Savings: {saved:.1}% vs raw 24-bit storage");
	}

	Ok(())
}

/// Handle verify command
fn handle_verify(input: PathBuf, verbose: bool) -> Result<()> {
	let grid = PixelGrid::open(&input)
		.with_context(|| format!("Failed to load {}", input.display()))?;
	let encoded = encode(&grid);
	let reconstructed = encoded.to_grid();

	if reconstructed != grid {
		let mismatches = grid
			.pixels()
			.iter()
			.zip(reconstructed.pixels().iter())
			.filter(|(expected, actual)| expected != actual)
			.count();

		println!("❌ Verification FAILED: reconstructed image differs from source");
		println!("   - Differing pixels: {} / {}", mismatches, grid.pixel_count());
		bail!("Verification failed");
	}

	if verbose {
		// Exercise the point-lookup path on top of full reconstruction
		for y in 0..grid.height() {
			for x in 0..grid.width() {
				if encoded.color_at(x, y) != grid.get(x, y) {
					bail!("Pixel lookup mismatch at ({x}, {y})");
				}
			}
		}
		println!("   ✓ Point lookups verified for {} pixels", grid.pixel_count());

		println!("   Palette:");
		for (index, color) in encoded.palette().iter().enumerate() {
			let role = if index == 0 {
				" (background)"
			} else {
				""
			};
			println!("     [{index}] {color}{role}");
		}
	}

	println!("✅ Verification PASSED: tables reproduce the image exactly");
	println!("   - Dimensions: {}x{}", encoded.width(), encoded.height());
	println!("   - Palette: {} colors", encoded.palette().len());
	println!("   - Stored runs: {}", encoded.run_count());
	println!(
		"   - Table bytes: {} (raw {}, {:.1}% saved)",
		encoded.table_bytes(),
		encoded.raw_bytes(),
		savings_percent(encoded.table_bytes(), encoded.raw_bytes())
	);

	Ok(())
}

/// Handle batch command
fn handle_batch(
	input_dir: PathBuf,
	output_dir: Option<PathBuf>,
	recursive: bool,
	data_only: bool,
	no_date: bool,
) -> Result<()> {
	if !input_dir.is_dir() {
		bail!("{} is not a directory", input_dir.display());
	}

	let output_dir = output_dir.unwrap_or_else(|| input_dir.clone());
	fs::create_dir_all(&output_dir)
		.with_context(|| format!("Failed to create {}", output_dir.display()))?;

	let files = collect_image_files(&input_dir, recursive);
	if files.is_empty() {
		println!("No image files found under {}", input_dir.display());
		return Ok(());
	}

	let options = EmitOptions {
		data_only,
		timestamp: timestamp(no_date),
	};
	let mut totals = BatchTotals::default();

	for path in files {
		totals.files_total += 1;
		let name = symbol_name(&path, None);
		let target = output_dir.join(format!("{name}.h"));

		match generate_one(&path, &target, &name, &options) {
			Ok(encoded) => {
				totals.files_ok += 1;
				totals.table_bytes += encoded.table_bytes();
				totals.raw_bytes += encoded.raw_bytes();
				println!(
					"✓ {} -> {} ({}x{}, {} colors, {} runs)",
					path.display(),
					target.display(),
					encoded.width(),
					encoded.height(),
					encoded.palette().len(),
					encoded.run_count()
				);
			}
			Err(err) => {
				totals.files_failed += 1;
				println!("❌ {} - {err:#}", path.display());
			}
		}
	}

	println!(
		"\nSummary: files={} ok={} failed={} | table bytes={} raw bytes={} saved={:.1}%",
		totals.files_total,
		totals.files_ok,
		totals.files_failed,
		totals.table_bytes,
		totals.raw_bytes,
		savings_percent(totals.table_bytes, totals.raw_bytes)
	);

	if totals.files_failed > 0 {
		bail!("Batch finished with failures (see summary)");
	}

	Ok(())
}

/// Encodes one file and writes its header, for batch mode
fn generate_one(
	input: &Path,
	target: &Path,
	name: &str,
	options: &EmitOptions,
) -> Result<EncodedImage> {
	let encoded = load_and_encode(input)?;
	encoded
		.save_header(target, name, options)
		.with_context(|| format!("Failed to write {}", target.display()))?;

	log::debug!(
		"{}: {} palette colors, {} stored runs",
		input.display(),
		encoded.palette().len(),
		encoded.run_count()
	);

	Ok(encoded)
}

/// Collects image files under `root`, sorted for stable output order
fn collect_image_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false).into_iter() {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				log::warn!("{err}");
				continue;
			}
		};

		if !entry.file_type().is_file() {
			continue;
		}

		let path = entry.into_path();
		let is_image = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

		if is_image {
			files.push(path);
		}
	}

	files.sort();
	files
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match cli.command {
		Commands::Generate {
			input,
			output,
			name,
			data_only,
			no_date,
			verbose,
		} => handle_generate(input, output, name, data_only, no_date, verbose),

		Commands::Inspect {
			input,
			json,
		} => handle_inspect(input, json),

		Commands::Verify {
			input,
			verbose,
		} => handle_verify(input, verbose),

		Commands::Batch {
			input_dir,
			output_dir,
			recursive,
			data_only,
			no_date,
		} => handle_batch(input_dir, output_dir, recursive, data_only, no_date),
	}
}
