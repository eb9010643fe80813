//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).
//! A loaded file is checked section by section before any tile is built:
//! the `[board]` grid must fit within [`MAX_TILES`] and every `[style]`
//! color must parse.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tessera::{
    TesseraError,
    config::{AppConfig, MAX_TILES},
};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid board in {}: {message}", path.display())]
    Board { path: PathBuf, message: String },

    #[error("Invalid style in {}: {message}", path.display())]
    Style { path: PathBuf, message: String },
}

impl From<ConfigError> for TesseraError {
    fn from(err: ConfigError) -> Self {
        TesseraError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tessera/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - The board has more than [`MAX_TILES`] tiles
/// - A configured color is invalid
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TesseraError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("tessera/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "tessera", "tessera") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load a TOML file and check its board and style sections
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TesseraError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    let board = config.board();
    let tiles = board.tile_count().map_err(|message| ConfigError::Board {
        path: path.to_path_buf(),
        message,
    })?;
    config.style().validate().map_err(|message| ConfigError::Style {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(
        rows = board.rows(),
        columns = board.columns(),
        tiles,
        tile_size = board.tile_size();
        "Board configuration loaded"
    );

    Ok(config)
}
