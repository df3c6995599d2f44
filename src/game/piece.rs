use serde::Serialize;

use super::Side;

/// A token placed on the board.
///
/// Side and coordinate are fixed when the piece is created by
/// [`Board::place`](super::Board::place) or
/// [`Board::drop_piece`](super::Board::drop_piece); there are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    side: Side,
    x: usize,
    y: usize,
}

impl Piece {
    pub(super) fn new(side: Side, x: usize, y: usize) -> Self {
        Piece { side, x, y }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Column index
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row index, 0 is the bottom row
    pub fn y(&self) -> usize {
        self.y
    }
}
