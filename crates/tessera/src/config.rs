//! Configuration types for Tessera board rendering.
//!
//! All types implement [`serde::Deserialize`] and fall back to defaults for
//! any field that is not set, so a partial configuration file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining board and style settings.
//! - [`BoardConfig`] - Grid dimensions and tile size.
//! - [`StyleConfig`] - Tile, highlight and background colors.
//!
//! # Example
//!
//! ```
//! # use tessera::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.board().rows(), 8);
//! assert!(config.validate().is_ok());
//! ```

use serde::Deserialize;

use tessera_core::color::Color;

/// Largest number of tiles a board may have.
pub const MAX_TILES: usize = 65_536;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Board geometry section.
    #[serde(default)]
    board: BoardConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(board: BoardConfig, style: StyleConfig) -> Self {
        Self { board, style }
    }

    /// Returns the board configuration.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that the board is within [`MAX_TILES`] and that every
    /// configured color string parses.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending setting.
    pub fn validate(&self) -> Result<(), String> {
        self.board.tile_count()?;
        self.style.validate()
    }
}

/// Grid dimensions of the board.
///
/// A board with zero rows simply has no tiles; the total tile count is
/// capped by [`MAX_TILES`] (see [`BoardConfig::tile_count`]).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    rows: usize,
    columns: usize,
    tile_size: f32,
}

impl BoardConfig {
    /// # Arguments
    ///
    /// * `rows` - Number of tile rows.
    /// * `columns` - Number of tile columns.
    /// * `tile_size` - Side length of a square tile in scene units.
    pub fn new(rows: usize, columns: usize, tile_size: f32) -> Self {
        Self {
            rows,
            columns,
            tile_size,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Returns `rows * columns`.
    ///
    /// # Errors
    ///
    /// Returns an error if the product overflows or exceeds [`MAX_TILES`].
    pub fn tile_count(&self) -> Result<usize, String> {
        self.rows
            .checked_mul(self.columns)
            .filter(|count| *count <= MAX_TILES)
            .ok_or_else(|| {
                format!(
                    "Board of {} rows by {} columns exceeds the limit of {MAX_TILES} tiles",
                    self.rows, self.columns
                )
            })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            tile_size: 60.0,
        }
    }
}

/// Visual styling of the board.
///
/// Colors are kept as the strings written in the configuration. Accessors
/// parse them to reject bad colors but hand back the original text, so the
/// rendered fill is exactly what was configured.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    light_color: String,
    dark_color: String,
    highlight_color: String,
    highlight_opacity: f32,
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the color of light tiles (square `0,0` is light).
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn light_color(&self) -> Result<&str, String> {
        parse_color("light_color", &self.light_color)
    }

    /// Returns the color of dark tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn dark_color(&self) -> Result<&str, String> {
        parse_color("dark_color", &self.dark_color)
    }

    /// Returns the color of highlight overlays.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn highlight_color(&self) -> Result<&str, String> {
        parse_color("highlight_color", &self.highlight_color)
    }

    /// Opacity applied to highlight overlays. Not range-checked.
    pub fn highlight_opacity(&self) -> f32 {
        self.highlight_opacity
    }

    /// Returns the background color, or `None` if no background is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<&str>, String> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    /// Checks that every configured color string parses.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid color field.
    pub fn validate(&self) -> Result<(), String> {
        self.light_color()?;
        self.dark_color()?;
        self.highlight_color()?;
        self.background_color()?;
        Ok(())
    }

    pub fn with_light_color(mut self, color: impl Into<String>) -> Self {
        self.light_color = color.into();
        self
    }

    pub fn with_dark_color(mut self, color: impl Into<String>) -> Self {
        self.dark_color = color.into();
        self
    }

    pub fn with_highlight(mut self, color: impl Into<String>, opacity: f32) -> Self {
        self.highlight_color = color.into();
        self.highlight_opacity = opacity;
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            light_color: "#F0D9B5".to_string(),
            dark_color: "#B58863".to_string(),
            highlight_color: "#F76902".to_string(),
            highlight_opacity: 0.5,
            background_color: None,
        }
    }
}

fn parse_color<'a>(field: &str, value: &'a str) -> Result<&'a str, String> {
    Color::new(value)
        .map(|_| value)
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}
