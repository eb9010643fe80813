//! Error types for Tessera operations.
//!
//! This module provides the main error type [`TesseraError`] which wraps
//! the error conditions that can occur while building or writing a board.
//! Shapes themselves never fail; errors come from configuration, board
//! addressing and I/O.

use std::io;

use thiserror::Error;

/// The main error type for Tessera operations.
#[derive(Debug, Error)]
pub enum TesseraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Board error: {0}")]
    Board(String),
}
