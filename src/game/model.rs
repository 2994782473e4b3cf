use std::fmt;

use super::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "P"),
            PieceType::Knight => write!(f, "N"),
            PieceType::Bishop => write!(f, "B"),
            PieceType::Rook => write!(f, "R"),
            PieceType::Queen => write!(f, "Q"),
            PieceType::King => write!(f, "K"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn to_char(&self) -> char {
        match self.kind {
            PieceType::Pawn => {
                if self.color == Color::White {
                    'P'
                } else {
                    'p'
                }
            }
            PieceType::Knight => {
                if self.color == Color::White {
                    'N'
                } else {
                    'n'
                }
            }
            PieceType::Bishop => {
                if self.color == Color::White {
                    'B'
                } else {
                    'b'
                }
            }
            PieceType::Rook => {
                if self.color == Color::White {
                    'R'
                } else {
                    'r'
                }
            }
            PieceType::Queen => {
                if self.color == Color::White {
                    'Q'
                } else {
                    'q'
                }
            }
            PieceType::King => {
                if self.color == Color::White {
                    'K'
                } else {
                    'k'
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

/// Board coordinate. Row 0 is rank 8 (Black's back rank), row 7 is rank 1;
/// column 0 is file 'a'.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct ChessField {
    pub row: u8,
    pub col: u8,
}

impl ChessField {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on the 8x8 grid; `new` does not validate.
    pub fn is_on_board(&self) -> bool {
        self.row < 8 && self.col < 8
    }

    /// Translates notation like "e2" into a field. Accepts exactly one
    /// lowercase file letter 'a'-'h' followed by one rank digit '1'-'8';
    /// anything else is rejected.
    pub fn from_algebraic(algebraic: &str) -> Result<Self, MoveError> {
        let mut chars = algebraic.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(MoveError::InvalidSquare(algebraic.to_string())),
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(MoveError::InvalidSquare(algebraic.to_string()));
        }
        let col = file as u8 - b'a';
        let row = b'8' - rank as u8;
        Ok(Self { row, col })
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }
}

impl fmt::Display for ChessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_algebraic())
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Move {
    pub from: ChessField,
    pub to: ChessField,
}

impl Move {
    pub fn new(from: ChessField, to: ChessField) -> Self {
        Self { from, to }
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}{}", self.from.as_algebraic(), self.to.as_algebraic())
    }

    /// Parses a four-character move like "e2e4".
    pub fn from_algebraic(algebraic: &str) -> Result<Self, MoveError> {
        if !algebraic.is_ascii() || algebraic.len() != 4 {
            return Err(MoveError::InvalidSquare(algebraic.to_string()));
        }
        let from = ChessField::from_algebraic(&algebraic[0..2])?;
        let to = ChessField::from_algebraic(&algebraic[2..4])?;
        Ok(Self { from, to })
    }
}

/// Game result. A destroyed king ends the game immediately; there are no
/// draws in this variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unfinished,
    Won(Color),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Unfinished => write!(f, "unfinished"),
            Outcome::Won(color) => write!(f, "{} wins", color),
        }
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char;
    let rank = (8 - row).to_string();
    format!("{}{}", file, rank)
}
