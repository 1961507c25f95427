//! BBS ANSI art to PNG converter.
//!
//! Reads a Big5-encoded art file with ANSI color sequences and writes a PNG
//! image, or dumps the decoded grid as JSON.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use ansart::render::{canvas_size, load_font, rasterize, PixmapSurface};

use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut input_file: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut font_path: Option<PathBuf> = None;
    let mut cell_height = 24u32;
    let mut json_output = false;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-s" | "--size" => {
                i += 1;
                if i < args.len() {
                    cell_height = args[i].parse().unwrap_or(24);
                }
            },
            "--font" => {
                i += 1;
                if i < args.len() {
                    font_path = Some(PathBuf::from(&args[i]));
                }
            },
            "-j" | "--json" => {
                json_output = true;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(PathBuf::from(&args[i]));
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    let Some(input_file) = input_file else {
        eprintln!("Error: no input file given (see --help)");
        return ExitCode::FAILURE;
    };

    let input_data = match std::fs::read(&input_file) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_file.display(), e);
            return ExitCode::FAILURE;
        },
    };

    let grid = match ansart::decode(&input_data) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error decoding '{}': {}", input_file.display(), e);
            return ExitCode::FAILURE;
        },
    };

    if json_output {
        match serde_json::to_string_pretty(&grid) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing grid: {}", e);
                return ExitCode::FAILURE;
            },
        }
        return ExitCode::SUCCESS;
    }

    if grid.is_empty() {
        eprintln!("Error: '{}' decoded to an empty grid", input_file.display());
        return ExitCode::FAILURE;
    }

    let output_file = output_file.unwrap_or_else(|| input_file.with_extension("png"));

    // Square full-width cells: each column is half a cell wide.
    let cell_px = cell_height as f32;
    let (width, height) = canvas_size(&grid, cell_px, cell_px);
    let mut surface = PixmapSurface::new(width, height);

    // An explicit font that fails to load is an error; a failed probe of
    // system locations only disables text glyphs.
    match load_font(font_path.as_deref()) {
        Ok(font) => surface.set_font(font, cell_height as f32),
        Err(e) if font_path.is_some() => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
        Err(e) => {
            warn!("{e}; text glyphs will be blank");
        },
    }

    rasterize(&grid, cell_px, cell_px, &mut surface);

    if let Err(e) = surface.write_png(&output_file) {
        eprintln!("Error writing '{}': {}", output_file.display(), e);
        return ExitCode::FAILURE;
    }

    println!(
        "{} -> {} ({}x{}, {} rows x {} cols)",
        input_file.display(),
        output_file.display(),
        width,
        height,
        grid.rows(),
        grid.columns(),
    );

    ExitCode::SUCCESS
}

fn print_help() {
    println!("ansart - BBS ANSI art to PNG converter");
    println!();
    println!("Usage: ansart [OPTIONS] <INPUT_FILE>");
    println!();
    println!("Options:");
    println!("  -o, --output <PATH>  Output PNG path (default: input with .png extension)");
    println!("  -s, --size <N>       Cell height in pixels (default: 24)");
    println!("      --font <PATH>    TTF/OTF font for text glyphs");
    println!("  -j, --json           Dump the decoded grid as JSON instead of rendering");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Examples:");
    println!("  ansart artwork.ans");
    println!("  ansart -s 32 -o big.png artwork.ans");
    println!("  ansart --json artwork.ans > grid.json");
}
