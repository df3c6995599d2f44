use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Board, Side, CONNECTIONS_REQUIRED, STANDARD_HEIGHT, STANDARD_WIDTH};

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub connections_required: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            connections_required: CONNECTIONS_REQUIRED,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub first_side: Side,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            first_side: Side::First,
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values against the board construction rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        Board::new(board.width, board.height, board.connections_required)
            .map(|_| ())
            .map_err(|e| ConfigError::Validation(format!("[board] {e}")))
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
