use std::fmt;
use std::path::PathBuf;

/// Optional human-readable detail attached to a [`GameError`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(Option<String>);

impl Message {
    pub fn none() -> Self {
        Message(None)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message(Some(text.to_string()))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message(Some(text))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(text) => write!(f, ": {text}"),
            None => Ok(()),
        }
    }
}

/// Precondition violations raised while applying a move.
///
/// None of these are produced by the win-check algorithms themselves; they
/// are returned by board construction, placement and turn validation before
/// a check ever runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate is outside the game board bounds{0}")]
    OutOfGameBoardBounds(Message),

    #[error("the board is full{0}")]
    BoardFull(Message),

    #[error("invalid board dimensions{0}")]
    InvalidBoardDimensions(Message),

    #[error("move made by the wrong player{0}")]
    WrongPlayerMove(Message),

    #[error("column is full{0}")]
    ColumnFull(Message),

    #[error("cell is already occupied{0}")]
    CellOccupied(Message),

    #[error("the game is already over{0}")]
    GameOver(Message),
}

impl GameError {
    /// The detail message, if one was attached.
    pub fn message(&self) -> Option<&str> {
        match self {
            GameError::OutOfGameBoardBounds(m)
            | GameError::BoardFull(m)
            | GameError::InvalidBoardDimensions(m)
            | GameError::WrongPlayerMove(m)
            | GameError::ColumnFull(m)
            | GameError::CellOccupied(m)
            | GameError::GameOver(m) => m.as_str(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
