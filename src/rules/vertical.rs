use crate::game::{Board, Piece};

/// Check for a vertical win through `piece`.
///
/// Same counting as [`check_horizontal`](super::check_horizontal) along the
/// y axis: an upward and a downward pass, each compared on its own.
pub fn check_vertical(board: &Board, piece: &Piece) -> bool {
    let required = board.connections_required();
    let (x, anchor_y) = (piece.x(), piece.y());
    let side = piece.side();

    // Upward, never past the top row
    let last = (anchor_y + required).min(board.height() - 1);
    let upward = (anchor_y..=last)
        .take_while(|&y| board.side_at(x, y) == Some(side))
        .count();
    if upward >= required {
        return true;
    }

    // Downward, never below row 0
    let first = anchor_y.saturating_sub(required);
    let downward = (first..=anchor_y)
        .rev()
        .take_while(|&y| board.side_at(x, y) == Some(side))
        .count();
    downward >= required
}
