//! Core Connect Four game model: board, sides, placed pieces, and the game
//! session that enforces turn order and records the outcome.

mod board;
mod piece;
mod side;
mod state;

pub use board::{Board, CONNECTIONS_REQUIRED, MAX_CELLS, STANDARD_HEIGHT, STANDARD_WIDTH};
pub use piece::Piece;
pub use side::Side;
pub use state::{Game, GameOutcome, MoveOutcome};
