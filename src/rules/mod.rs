//! Win detection for the most recently placed piece.
//!
//! Each algorithm is a pure, read-only scan outward from the anchor piece.
//! None of them validate the anchor; use [`check_win`] when the piece may
//! not lie on the board.

mod diagonal;
mod horizontal;
mod vertical;

pub use diagonal::check_diagonal;
pub use horizontal::check_horizontal;
pub use vertical::check_vertical;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::GameError;
use crate::game::{Board, Piece};

/// The closed set of win-check strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WinCheckAlgorithm {
    Horizontal,
    Vertical,
    Diagonal,
}

impl WinCheckAlgorithm {
    /// All strategies, in the order the combined check runs them.
    pub const ALL: [WinCheckAlgorithm; 3] = [
        WinCheckAlgorithm::Horizontal,
        WinCheckAlgorithm::Vertical,
        WinCheckAlgorithm::Diagonal,
    ];

    /// Does `piece` complete a winning run along this strategy's axes?
    pub fn check_for_winning_condition(self, board: &Board, piece: &Piece) -> bool {
        match self {
            WinCheckAlgorithm::Horizontal => check_horizontal(board, piece),
            WinCheckAlgorithm::Vertical => check_vertical(board, piece),
            WinCheckAlgorithm::Diagonal => check_diagonal(board, piece),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WinCheckAlgorithm::Horizontal => "horizontal",
            WinCheckAlgorithm::Vertical => "vertical",
            WinCheckAlgorithm::Diagonal => "diagonal",
        }
    }
}

/// First strategy that reports a win for `piece`, if any.
#[instrument(level = "trace", skip(board))]
pub fn winning_algorithm(board: &Board, piece: &Piece) -> Option<WinCheckAlgorithm> {
    let found = WinCheckAlgorithm::ALL
        .into_iter()
        .find(|algorithm| algorithm.check_for_winning_condition(board, piece));
    if let Some(algorithm) = found {
        debug!(
            side = piece.side().name(),
            x = piece.x(),
            y = piece.y(),
            axis = algorithm.name(),
            "winning run found"
        );
    }
    found
}

/// Combined check: true if any strategy reports a win.
pub fn is_winning_move(board: &Board, piece: &Piece) -> bool {
    winning_algorithm(board, piece).is_some()
}

/// Combined check that first rejects an anchor outside the board.
pub fn check_win(board: &Board, piece: &Piece) -> Result<bool, GameError> {
    board.ensure_in_bounds(piece.x(), piece.y())?;
    Ok(is_winning_move(board, piece))
}

#[cfg(test)]
pub(crate) fn board_with(
    width: usize,
    height: usize,
    connections_required: usize,
    pieces: &[(usize, usize, crate::game::Side)],
) -> Board {
    let mut board = Board::new(width, height, connections_required).unwrap();
    for &(x, y, side) in pieces {
        board.place(x, y, side).unwrap();
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;

    fn anchor(board: &Board, x: usize, y: usize) -> Piece {
        *board.get(x, y).unwrap()
    }

    #[test]
    fn test_bottom_row_scenario() {
        let board = board_with(
            7,
            6,
            4,
            &[
                (0, 0, Side::First),
                (1, 0, Side::First),
                (2, 0, Side::First),
                (3, 0, Side::First),
            ],
        );

        assert!(WinCheckAlgorithm::Horizontal
            .check_for_winning_condition(&board, &anchor(&board, 3, 0)));
        // Interior anchor: forward pass counts 2, backward pass counts 3,
        // and the two passes are never summed.
        assert!(!WinCheckAlgorithm::Horizontal
            .check_for_winning_condition(&board, &anchor(&board, 2, 0)));
        for x in 0..4 {
            assert!(!WinCheckAlgorithm::Vertical
                .check_for_winning_condition(&board, &anchor(&board, x, 0)));
        }
    }

    #[test]
    fn test_up_right_diagonal_scenario() {
        let board = board_with(
            7,
            6,
            4,
            &[
                (0, 0, Side::First),
                (1, 1, Side::First),
                (2, 2, Side::First),
                (3, 3, Side::First),
            ],
        );
        let piece = anchor(&board, 0, 0);

        assert!(WinCheckAlgorithm::Diagonal.check_for_winning_condition(&board, &piece));
        assert!(!WinCheckAlgorithm::Horizontal.check_for_winning_condition(&board, &piece));
        assert!(!WinCheckAlgorithm::Vertical.check_for_winning_condition(&board, &piece));
        assert_eq!(
            winning_algorithm(&board, &piece),
            Some(WinCheckAlgorithm::Diagonal)
        );
    }

    #[test]
    fn test_checks_are_repeatable_and_read_only() {
        let board = board_with(
            7,
            6,
            4,
            &[
                (2, 0, Side::Second),
                (2, 1, Side::Second),
                (2, 2, Side::Second),
                (2, 3, Side::Second),
                (3, 0, Side::First),
            ],
        );
        let before = board.clone();

        for algorithm in WinCheckAlgorithm::ALL {
            for (x, y) in [(2, 0), (2, 3), (3, 0)] {
                let piece = anchor(&board, x, y);
                let first = algorithm.check_for_winning_condition(&board, &piece);
                let second = algorithm.check_for_winning_condition(&board, &piece);
                assert_eq!(first, second);
            }
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_combined_check_reports_first_matching_axis() {
        // (0, 0) anchors both a row and a column
        let board = board_with(
            7,
            6,
            4,
            &[
                (0, 0, Side::First),
                (1, 0, Side::First),
                (2, 0, Side::First),
                (3, 0, Side::First),
                (0, 1, Side::First),
                (0, 2, Side::First),
                (0, 3, Side::First),
            ],
        );
        let piece = anchor(&board, 0, 0);
        assert_eq!(
            winning_algorithm(&board, &piece),
            Some(WinCheckAlgorithm::Horizontal)
        );
        assert!(is_winning_move(&board, &piece));
        assert_eq!(check_win(&board, &piece), Ok(true));
    }

    #[test]
    fn test_no_win_on_lone_piece() {
        let board = board_with(7, 6, 4, &[(3, 0, Side::Second)]);
        assert!(!is_winning_move(&board, &anchor(&board, 3, 0)));
    }

    #[test]
    fn test_check_win_rejects_anchor_outside_board() {
        let wide = board_with(8, 6, 4, &[(7, 0, Side::First)]);
        let stray = anchor(&wide, 7, 0);

        let board = Board::standard();
        assert!(matches!(
            check_win(&board, &stray),
            Err(GameError::OutOfGameBoardBounds(_))
        ));
    }

    #[test]
    fn test_unchecked_anchor_outside_board_does_not_panic() {
        let tall = board_with(7, 9, 4, &[(0, 8, Side::First)]);
        let stray = anchor(&tall, 0, 8);

        let board = Board::standard();
        for algorithm in WinCheckAlgorithm::ALL {
            assert!(!algorithm.check_for_winning_condition(&board, &stray));
        }
    }
}
