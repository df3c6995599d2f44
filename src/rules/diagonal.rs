use crate::game::{Board, Piece};

/// Step per iteration for each diagonal direction, scanned in this order.
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 1),   // up-right
    (1, -1),  // down-right
    (-1, 1),  // up-left
    (-1, -1), // down-left
];

/// Check for a diagonal win starting at `piece`.
///
/// Each of the four directions is scanned on its own for at most
/// `connections_required` cells, the anchor included. Opposite directions
/// are not paired, so the anchor has to sit at one end of the run.
pub fn check_diagonal(board: &Board, piece: &Piece) -> bool {
    let required = board.connections_required();
    DIRECTIONS
        .iter()
        .any(|&(dx, dy)| run_length(board, piece, dx, dy) >= required)
}

fn run_length(board: &Board, piece: &Piece, dx: isize, dy: isize) -> usize {
    let mut count = 0;
    for i in 0..board.connections_required() as isize {
        let (Some(x), Some(y)) = (
            piece.x().checked_add_signed(dx * i),
            piece.y().checked_add_signed(dy * i),
        ) else {
            break;
        };
        if board.side_at(x, y) == Some(piece.side()) {
            count += 1;
        } else {
            break;
        }
    }
    count
}
