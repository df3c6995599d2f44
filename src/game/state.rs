use serde::Serialize;
use tracing::{debug, info};

use super::{Board, Piece, Side};
use crate::config::AppConfig;
use crate::error::GameError;
use crate::rules::{self, WinCheckAlgorithm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Side),
    Draw,
}

/// What a single accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub piece: Piece,
    /// Axis of the winning run, if the move won the game
    pub winning_axis: Option<WinCheckAlgorithm>,
    pub outcome: Option<GameOutcome>,
}

/// A single game session: owns its board and enforces turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_side: Side,
    outcome: Option<GameOutcome>,
    last_piece: Option<Piece>,
    move_count: usize,
}

impl Game {
    /// Start a game on an empty board
    pub fn new(board: Board, first: Side) -> Self {
        Game {
            board,
            current_side: first,
            outcome: None,
            last_piece: None,
            move_count: 0,
        }
    }

    /// Build the board described by `config` and start a game on it
    pub fn from_config(config: &AppConfig) -> Result<Self, GameError> {
        let board = Board::new(
            config.board.width,
            config.board.height,
            config.board.connections_required,
        )?;
        Ok(Self::new(board, config.first_side))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_piece(&self) -> Option<&Piece> {
        self.last_piece.as_ref()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Drop a piece for `side` into `column`.
    ///
    /// Rejects moves once the game is over and moves made out of turn, then
    /// lets the board reject off-board columns, a full board or a full
    /// column. An accepted move is checked with every win strategy.
    pub fn play(&mut self, side: Side, column: usize) -> Result<MoveOutcome, GameError> {
        if let Some(outcome) = self.outcome {
            return Err(GameError::GameOver(format!("{outcome:?}").into()));
        }
        if side != self.current_side {
            return Err(GameError::WrongPlayerMove(
                format!(
                    "{} moved but it is {}'s turn",
                    side.name(),
                    self.current_side.name()
                )
                .into(),
            ));
        }

        let piece = self.board.drop_piece(column, side)?;
        self.move_count += 1;
        self.last_piece = Some(piece);
        debug!(
            side = side.name(),
            x = piece.x(),
            y = piece.y(),
            moves = self.move_count,
            "piece placed"
        );

        let winning_axis = rules::winning_algorithm(&self.board, &piece);
        if winning_axis.is_some() {
            self.outcome = Some(GameOutcome::Winner(side));
            info!(side = side.name(), moves = self.move_count, "game won");
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.move_count, "game drawn");
        }

        self.current_side = side.other();

        Ok(MoveOutcome {
            piece,
            winning_axis,
            outcome: self.outcome,
        })
    }

    /// Play for whichever side is to move
    pub fn play_current(&mut self, column: usize) -> Result<MoveOutcome, GameError> {
        self.play(self.current_side, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game() -> Game {
        Game::new(Board::standard(), Side::First)
    }

    #[test]
    fn test_initial_state() {
        let game = new_game();
        assert_eq!(game.current_side(), Side::First);
        assert!(!game.is_terminal());
        assert_eq!(game.board().legal_columns().len(), 7);
        assert_eq!(game.last_piece(), None);
    }

    #[test]
    fn test_play_alternates_sides() {
        let mut game = new_game();
        let result = game.play(Side::First, 3).unwrap();

        assert_eq!(result.piece.side(), Side::First);
        assert_eq!(result.outcome, None);
        assert_eq!(game.current_side(), Side::Second);
        assert_eq!(game.board().side_at(3, 0), Some(Side::First));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_wrong_player_move() {
        let mut game = new_game();
        let err = game.play(Side::Second, 0).unwrap_err();
        assert!(matches!(err, GameError::WrongPlayerMove(_)));
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_column_keeps_turn() {
        let mut game = new_game();
        let err = game.play(Side::First, 9).unwrap_err();
        assert!(matches!(err, GameError::OutOfGameBoardBounds(_)));
        assert_eq!(game.current_side(), Side::First);
    }

    #[test]
    fn test_horizontal_win_detection() {
        let mut game = new_game();

        // First builds the bottom row left to right, Second stacks on top
        for col in 0..4 {
            let result = game.play_current(col).unwrap();
            if col < 3 {
                game.play_current(col).unwrap();
            } else {
                assert_eq!(result.winning_axis, Some(WinCheckAlgorithm::Horizontal));
            }
        }

        assert!(game.is_terminal());
        assert_eq!(game.outcome(), Some(GameOutcome::Winner(Side::First)));
    }

    #[test]
    fn test_vertical_win_detection() {
        let mut game = new_game();
        for _ in 0..3 {
            game.play_current(0).unwrap();
            game.play_current(1).unwrap();
        }
        let result = game.play_current(0).unwrap();

        assert_eq!(result.winning_axis, Some(WinCheckAlgorithm::Vertical));
        assert_eq!(result.outcome, Some(GameOutcome::Winner(Side::First)));
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut game = new_game();
        for _ in 0..3 {
            game.play_current(0).unwrap();
            game.play_current(1).unwrap();
        }
        game.play_current(0).unwrap();

        let err = game.play_current(2).unwrap_err();
        assert!(matches!(err, GameError::GameOver(_)));
    }

    #[test]
    fn test_draw_on_full_board() {
        // One row, sides alternate, so no two neighbours ever match
        let mut game = Game::new(Board::new(3, 1, 2).unwrap(), Side::First);
        game.play_current(0).unwrap();
        game.play_current(1).unwrap();
        let result = game.play_current(2).unwrap();

        assert_eq!(result.outcome, Some(GameOutcome::Draw));
        assert_eq!(result.winning_axis, None);
        assert!(matches!(
            game.play_current(0),
            Err(GameError::GameOver(_))
        ));
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.board.width = 5;
        config.board.height = 4;
        config.first_side = Side::Second;

        let game = Game::from_config(&config).unwrap();
        assert_eq!(game.board().width(), 5);
        assert_eq!(game.current_side(), Side::Second);

        config.board.connections_required = 9;
        assert!(matches!(
            Game::from_config(&config),
            Err(GameError::InvalidBoardDimensions(_))
        ));
    }
}
