//! Error adapter for converting TesseraError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tessera::{TesseraError, config::MAX_TILES};

/// Adapter that renders a [`TesseraError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a TesseraError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            TesseraError::Io(_) => "tessera::io",
            TesseraError::Config(_) => "tessera::config",
            TesseraError::Board(_) => "tessera::board",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            TesseraError::Io(_) => return None,
            TesseraError::Config(_) => format!(
                "a board holds at most {MAX_TILES} tiles; colors accept any CSS color, \
                 e.g. \"#F0D9B5\", \"rgb(181, 136, 99)\" or \"teal\""
            ),
            TesseraError::Board(_) => {
                "squares are `row,column` and count from 0 at the top-left corner".to_string()
            }
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
