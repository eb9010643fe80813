//! CLI logic for the Tessera board renderer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use tessera::{BoardBuilder, TesseraError};

/// Run the Tessera CLI application
///
/// Loads the configuration, builds the board with the requested highlights
/// and orientation, and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `TesseraError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Squares outside the board
pub fn run(args: &Args) -> Result<(), TesseraError> {
    info!(
        output_path = args.output,
        highlights = args.highlights.len(),
        flip = args.flip;
        "Rendering board"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let builder = BoardBuilder::new(app_config);
    let board = builder.build(&args.highlights, args.flip)?;
    let svg = builder.render_svg(&board);

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
