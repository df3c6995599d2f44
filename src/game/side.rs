use serde::{Deserialize, Serialize};

/// One of the two players owning pieces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Get side name for display
    pub fn name(self) -> &'static str {
        match self {
            Side::First => "First",
            Side::Second => "Second",
        }
    }

    /// Board glyph used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}
