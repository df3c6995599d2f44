use std::fmt;

use super::{Piece, Side};
use crate::error::GameError;

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;
pub const CONNECTIONS_REQUIRED: usize = 4;
/// Upper limit on `width * height`
pub const MAX_CELLS: usize = 1 << 16;

/// Fixed-size grid of cells indexed by `(x, y)`.
///
/// `x` runs left to right over `0..width`, `y` runs bottom to top over
/// `0..height`, so pieces dropped into a column stack upward from `y = 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    connections_required: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Width, height and the run length needed to win must all be positive,
    /// the run must fit along at least one axis, and the grid may hold at
    /// most [`MAX_CELLS`] cells.
    pub fn new(
        width: usize,
        height: usize,
        connections_required: usize,
    ) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidBoardDimensions(
                format!("width and height must be positive, got {width}x{height}").into(),
            ));
        }
        if connections_required == 0 {
            return Err(GameError::InvalidBoardDimensions(
                "connections required must be positive".into(),
            ));
        }
        if connections_required > width.max(height) {
            return Err(GameError::InvalidBoardDimensions(
                format!(
                    "a run of {connections_required} does not fit on a {width}x{height} board"
                )
                .into(),
            ));
        }
        let cell_count = width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or_else(|| {
                GameError::InvalidBoardDimensions(
                    format!("a {width}x{height} board exceeds {MAX_CELLS} cells").into(),
                )
            })?;

        Ok(Board {
            width,
            height,
            connections_required,
            cells: vec![None; cell_count],
        })
    }

    /// The classic 7 wide, 6 high board with four in a row to win
    pub fn standard() -> Self {
        Board {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            connections_required: CONNECTIONS_REQUIRED,
            cells: vec![None; STANDARD_WIDTH * STANDARD_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Run length a side needs to win on this board
    pub fn connections_required(&self) -> usize {
        self.connections_required
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Fail with [`GameError::OutOfGameBoardBounds`] unless `(x, y)` is on the board
    pub fn ensure_in_bounds(&self, x: usize, y: usize) -> Result<(), GameError> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(GameError::OutOfGameBoardBounds(
                format!(
                    "({x}, {y}) is outside a {}x{} board",
                    self.width, self.height
                )
                .into(),
            ))
        }
    }

    /// Get the piece at a position, `None` for empty or off-board cells
    pub fn get(&self, x: usize, y: usize) -> Option<&Piece> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Owner of the piece at a position, if any
    pub fn side_at(&self, x: usize, y: usize) -> Option<Side> {
        self.get(x, y).map(Piece::side)
    }

    /// Place a piece directly at `(x, y)` without gravity.
    pub fn place(&mut self, x: usize, y: usize, side: Side) -> Result<Piece, GameError> {
        self.ensure_in_bounds(x, y)?;
        if self.is_full() {
            return Err(GameError::BoardFull("no empty cells remain".into()));
        }
        let idx = self.index(x, y);
        if self.cells[idx].is_some() {
            return Err(GameError::CellOccupied(format!("({x}, {y})").into()));
        }

        let piece = Piece::new(side, x, y);
        self.cells[idx] = Some(piece);
        Ok(piece)
    }

    /// Drop a piece in a column, returns the piece where it landed
    pub fn drop_piece(&mut self, column: usize, side: Side) -> Result<Piece, GameError> {
        if column >= self.width {
            return Err(GameError::OutOfGameBoardBounds(
                format!("column {column} on a board {} wide", self.width).into(),
            ));
        }
        if self.is_full() {
            return Err(GameError::BoardFull("no empty cells remain".into()));
        }

        // Lowest empty row in this column
        let y = (0..self.height)
            .find(|&y| self.get(column, y).is_none())
            .ok_or_else(|| GameError::ColumnFull(format!("column {column}").into()))?;

        let piece = Piece::new(side, column, y);
        let idx = self.index(column, y);
        self.cells[idx] = Some(piece);
        Ok(piece)
    }

    /// Check if a column is full, off-board columns count as full
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.width {
            return true;
        }
        self.get(column, self.height - 1).is_some()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Top row first; `.` is empty, `X` is [`Side::First`], `O` is [`Side::Second`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            let row: Vec<String> = (0..self.width)
                .map(|x| {
                    self.side_at(x, y)
                        .map_or('.', Side::symbol)
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
