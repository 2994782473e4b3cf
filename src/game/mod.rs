pub mod error;
pub use error::MoveError;
pub mod model;
pub use model::{ChessField, Color, Move, Outcome, Piece, PieceType, Square};

mod board;
mod game;
mod rules;
pub mod test_utils;
pub use board::Board;
pub use game::Game;
