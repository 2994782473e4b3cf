use super::model::{ChessField, PieceType};

/// Every way a move request can be turned down. None of these variants
/// leaves a trace on the game: board, turn and outcome stay as they were.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("square '{0}' is not a valid coordinate")]
    InvalidSquare(String),

    #[error("row {row}, column {col} is not on the board")]
    OffBoard { row: u8, col: u8 },

    #[error("the game is already decided")]
    GameFinished,

    #[error("no piece on {0}")]
    EmptyOrigin(ChessField),

    #[error("the piece on {0} belongs to the opponent")]
    OpponentPiece(ChessField),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalMove {
        piece: PieceType,
        from: ChessField,
        to: ChessField,
    },
}
