use super::PlayerPosition;

/// Why a move was refused by the grid.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq)]
pub enum InvalidMoveReason {
    #[error("cell is occupied")]
    CellIsOccupied,
    #[error("position is out of range (expected: 0-{max})")]
    OutOfRange { max: usize },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: InvalidMoveReason,
    },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn {
        expected: PlayerPosition,
        found: PlayerPosition,
    },
    #[error("can't change the opening player after the first move")]
    GameAlreadyStarted,
    #[error("duplicate player id encountered")]
    DuplicatePlayerId,
    #[error("players must use distinct marks")]
    DuplicateMark,
    #[error("player not found")]
    PlayerNotFound,
    #[error("failed to switch players in the pool")]
    PlayerPoolCorrupted,
}

impl GameError {
    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::InvalidMove {
            row,
            col,
            reason: InvalidMoveReason::CellIsOccupied,
        }
    }

    pub fn out_of_range(row: usize, col: usize, max: usize) -> Self {
        Self::InvalidMove {
            row,
            col,
            reason: InvalidMoveReason::OutOfRange { max },
        }
    }

    pub fn not_your_turn(expected: PlayerPosition, found: PlayerPosition) -> Self {
        Self::NotYourTurn { expected, found }
    }

    /// Invalid moves are recoverable: the same player simply tries again.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Self::InvalidMove { .. })
    }
}
