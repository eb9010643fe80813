//! Command-line argument definitions for the Tessera CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, configuration file
//! selection, board orientation, highlighted squares and logging verbosity.

use clap::Parser;

use tessera::board::Square;

/// Command-line arguments for the Tessera board renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output SVG file
    #[arg(short, long, default_value = "board.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show the board from the opposite side
    #[arg(long)]
    pub flip: bool,

    /// Highlight a square, given as `row,column` (repeatable)
    #[arg(long = "highlight", value_name = "ROW,COLUMN")]
    pub highlights: Vec<Square>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tessera"]).unwrap();
        assert_eq!(args.output, "board.svg");
        assert!(args.config.is_none());
        assert!(!args.flip);
        assert!(args.highlights.is_empty());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_repeated_highlights() {
        let args = Args::try_parse_from([
            "tessera",
            "--highlight",
            "6,4",
            "--highlight",
            "4,4",
            "--flip",
            "-o",
            "out.svg",
        ])
        .unwrap();

        assert_eq!(args.highlights, vec![Square::new(6, 4), Square::new(4, 4)]);
        assert!(args.flip);
        assert_eq!(args.output, "out.svg");
    }

    #[test]
    fn test_malformed_highlight_is_rejected() {
        assert!(Args::try_parse_from(["tessera", "--highlight", "e4"]).is_err());
    }
}
