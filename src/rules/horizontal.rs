use crate::game::{Board, Piece};

/// Check for a horizontal win through `piece`.
///
/// Runs a forward pass (increasing x) and a backward pass (decreasing x),
/// each starting on the anchor and counting it. A pass wins on its own once
/// it reaches the board's required connections; the two counts are never
/// added together, so a run that only completes across the anchor from both
/// sides is not reported.
pub fn check_horizontal(board: &Board, piece: &Piece) -> bool {
    let required = board.connections_required();
    let (anchor_x, y) = (piece.x(), piece.y());
    let side = piece.side();

    // Forward, never past the right edge
    let last = (anchor_x + required).min(board.width() - 1);
    let forward = (anchor_x..=last)
        .take_while(|&x| board.side_at(x, y) == Some(side))
        .count();
    if forward >= required {
        return true;
    }

    // Backward, never below column 0
    let first = anchor_x.saturating_sub(required);
    let backward = (first..=anchor_x)
        .rev()
        .take_while(|&x| board.side_at(x, y) == Some(side))
        .count();
    backward >= required
}
