//! Rules engine for an atomic-capture chess variant: every capture sets off
//! a 3x3 explosion around the destination square that removes everything
//! but pawns, and a destroyed king ends the game on the spot.

pub mod game;

pub use game::{
    Board, ChessField, Color, Game, Move, MoveError, Outcome, Piece, PieceType, Square,
};

/// Starts a fresh game: standard setup, White to move.
pub fn new_game() -> Game {
    Game::new()
}
