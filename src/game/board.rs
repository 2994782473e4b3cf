use std::fmt;

use super::{ChessField, Color, Piece, PieceType, Square};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8x8 piece grid. Row 0 holds rank 8, so Black's army starts in rows 0-1
/// and White's in rows 6-7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn initial_position() -> Self {
        let mut board = Self::new();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Square::Occupied(Piece {
                color: Color::Black,
                kind: *kind,
            });
            board.squares[7][col] = Square::Occupied(Piece {
                color: Color::White,
                kind: *kind,
            });
        }
        for col in 0..8 {
            board.squares[1][col] = Square::Occupied(Piece {
                color: Color::Black,
                kind: PieceType::Pawn,
            });
            board.squares[6][col] = Square::Occupied(Piece {
                color: Color::White,
                kind: PieceType::Pawn,
            });
        }
        board
    }

    /// The piece on `field`, if any; off-board fields read as empty.
    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        if !field.is_on_board() {
            return None;
        }
        match self.squares[field.row as usize][field.col as usize] {
            Square::Occupied(piece) => Some(piece),
            Square::Empty => None,
        }
    }

    pub fn is_empty(&self, field: ChessField) -> bool {
        self.piece_at(field).is_none()
    }

    pub(crate) fn set(&mut self, field: ChessField, square: Square) {
        self.squares[field.row as usize][field.col as usize] = square;
    }

    /// Returns an iterator over all pieces on the board along with their coordinates.
    pub fn pieces_with_coordinates(&self) -> impl Iterator<Item = (ChessField, Piece)> + '_ {
        (0..8u8)
            .flat_map(|row| (0..8u8).map(move |col| ChessField::new(row, col)))
            .filter_map(move |field| self.piece_at(field).map(|piece| (field, piece)))
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8 {
            let rank = 8 - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..8 {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < 7 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}
