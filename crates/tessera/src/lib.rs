//! Tessera - tiled game boards rendered as retained SVG.
//!
//! Boards are composed from [`RectangleShape`](tessera_core::draw::RectangleShape)
//! tiles attached under a single `svg` root. The scene stays live: tiles can
//! be restyled, highlighted or turned around after the board is built, and
//! every change shows up in the next render.

pub mod board;
pub mod config;

mod error;

pub use tessera_core::{color, draw, geometry, scene};

pub use error::TesseraError;

use log::{debug, info};

use board::{Board, Square};
use config::AppConfig;
use scene::SvgScene;

/// Builder for creating and rendering boards.
///
/// # Examples
///
/// ```
/// use tessera::{BoardBuilder, board::Square, config::AppConfig};
///
/// let builder = BoardBuilder::new(AppConfig::default());
/// let board = builder
///     .build(&[Square::new(6, 4)], false)
///     .expect("Failed to build board");
///
/// let svg = builder.render_svg(&board);
/// assert!(svg.contains("<rect"));
/// ```
#[derive(Default)]
pub struct BoardBuilder {
    config: AppConfig,
}

impl BoardBuilder {
    /// Create a new board builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a board, highlight `highlights` and optionally flip it.
    ///
    /// # Errors
    ///
    /// Returns `TesseraError` if a configured color is invalid, the board
    /// exceeds the tile limit, or a highlighted square is outside the board.
    pub fn build(&self, highlights: &[Square], flipped: bool) -> Result<Board, TesseraError> {
        info!(
            rows = self.config.board().rows(),
            columns = self.config.board().columns();
            "Building board"
        );

        let mut board = Board::new(SvgScene::new(), self.config.board(), self.config.style())?;
        for square in highlights {
            board.highlight(*square)?;
        }
        if flipped {
            board.flip();
        }

        debug!(highlights = highlights.len(), flipped; "Board ready");
        Ok(board)
    }

    /// Render a board to an SVG string.
    pub fn render_svg(&self, board: &Board) -> String {
        let svg = board.render();
        debug!(bytes = svg.len(); "Board rendered");
        svg
    }
}
