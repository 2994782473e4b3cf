#[cfg(test)]
use super::{Board, ChessField, Color, Game, Piece, PieceType, Square};

/// Builds a board holding exactly the given pieces, each on an algebraic
/// square like "e4".
#[cfg(test)]
pub fn board_with_pieces(pieces: &[(Color, PieceType, &str)]) -> Board {
    let mut board = Board::new();
    for &(color, kind, notation) in pieces {
        let field = ChessField::from_algebraic(notation).unwrap();
        board.set(field, Square::Occupied(Piece { color, kind }));
    }
    board
}

#[cfg(test)]
pub fn game_with_pieces(active_color: Color, pieces: &[(Color, PieceType, &str)]) -> Game {
    Game::with_board(board_with_pieces(pieces), active_color)
}

#[cfg(test)]
pub fn assert_fields<I: Iterator<Item = ChessField>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.map(|f| f.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
