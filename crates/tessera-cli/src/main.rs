//! `tessera` command: render a tile board to an SVG file.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use tessera_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    debug!(args:?; "Parsed arguments");

    if let Err(err) = tessera_cli::run(&args) {
        let mut report = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut report, &ErrorAdapter(&err))
            .expect("Writing to String buffer is infallible");

        error!("{report}");
        process::exit(1);
    }

    info!(
        output = args.output,
        highlights = args.highlights.len(),
        flipped = args.flip;
        "Board rendered"
    );
}

/// Installs `env_logger` at `level`, falling back to `warn` for unknown names.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
