use super::error::MoveError;
use super::{rules, Board, ChessField, Color, Move, Outcome, PieceType, Square};

/// A running game. Owns the board, the side to move and the outcome; once
/// the outcome is decided the game never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active_color: Color,
    outcome: Outcome,
}

impl Game {
    /// Creates a game in the standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial_position(),
            active_color: Color::White,
            outcome: Outcome::Unfinished,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_board(board: Board, active_color: Color) -> Self {
        Self {
            board,
            active_color,
            outcome: Outcome::Unfinished,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Attempts a move given as two squares like "e2", "e4". Returns whether
    /// it was applied; a rejected move leaves the game untouched.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like `make_move`, but says why a move was turned down. A finished
    /// game rejects everything before the notation is even looked at.
    pub fn try_move(&mut self, from: &str, to: &str) -> Result<(), MoveError> {
        if self.outcome != Outcome::Unfinished {
            return Err(trace_rejection(MoveError::GameFinished));
        }
        let from = ChessField::from_algebraic(from).map_err(trace_rejection)?;
        let to = ChessField::from_algebraic(to).map_err(trace_rejection)?;
        self.apply_move(Move::new(from, to))
    }

    /// Runs an already-translated move through the same entry gate. Parsed
    /// notation is always on the board, but fields built with
    /// `ChessField::new` are not; they are bounds-checked here.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.outcome != Outcome::Unfinished {
            return Err(trace_rejection(MoveError::GameFinished));
        }
        for field in [mv.from, mv.to] {
            if !field.is_on_board() {
                return Err(trace_rejection(MoveError::OffBoard {
                    row: field.row,
                    col: field.col,
                }));
            }
        }
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or_else(|| trace_rejection(MoveError::EmptyOrigin(mv.from)))?;
        if piece.color != self.active_color {
            return Err(trace_rejection(MoveError::OpponentPiece(mv.from)));
        }
        if !rules::is_legal_move(&self.board, piece, mv.from, mv.to) {
            return Err(trace_rejection(MoveError::IllegalMove {
                piece: piece.kind,
                from: mv.from,
                to: mv.to,
            }));
        }

        let captured = self.board.piece_at(mv.to);
        self.board.set(mv.to, Square::Occupied(piece));
        self.board.set(mv.from, Square::Empty);
        tracing::debug!(
            "applied {} (capture: {})",
            mv.as_algebraic(),
            captured.is_some()
        );

        if let Some(captured) = captured {
            // A captured king decides the game before the blast; the blast
            // may overwrite this when a king stands in the radius.
            if captured.kind == PieceType::King {
                self.outcome = Outcome::Won(self.active_color);
            }
            self.explode(mv.to);
        }

        if self.outcome == Outcome::Unfinished {
            self.active_color = self.active_color.opposite();
        } else {
            tracing::debug!("game over: {}", self.outcome);
        }
        Ok(())
    }

    /// Every legal destination for the piece on `from`, honoring turn and
    /// game state: empty when the game is over, the square is empty or off
    /// the board, or the piece belongs to the opponent.
    pub fn legal_destinations(&self, from: ChessField) -> Vec<ChessField> {
        if self.outcome != Outcome::Unfinished {
            return Vec::new();
        }
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.active_color => {
                rules::legal_destinations(&self.board, piece, from)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.outcome != Outcome::Unfinished {
            return Vec::new();
        }
        let mut moves = Vec::new();
        for (from, piece) in self.board.pieces_with_coordinates() {
            if piece.color != self.active_color {
                continue;
            }
            for to in rules::legal_destinations(&self.board, piece, from) {
                moves.push(Move::new(from, to));
            }
        }
        moves
    }

    /// Clears every non-pawn piece in the 3x3 neighborhood of `center`, the
    /// center square included, clipped to the board. Each destroyed king
    /// hands the win to the opposite color; when both kings stand in the
    /// blast the row-major scan order decides.
    fn explode(&mut self, center: ChessField) {
        let mut removed = Vec::new();
        for row in center.row.saturating_sub(1)..=(center.row + 1).min(7) {
            for col in center.col.saturating_sub(1)..=(center.col + 1).min(7) {
                let field = ChessField::new(row, col);
                if let Some(piece) = self.board.piece_at(field) {
                    if piece.kind == PieceType::Pawn {
                        continue;
                    }
                    if piece.kind == PieceType::King {
                        self.outcome = Outcome::Won(piece.color.opposite());
                    }
                    self.board.set(field, Square::Empty);
                    removed.push(field);
                }
            }
        }
        tracing::debug!(
            "explosion at {} removed [{}]",
            center,
            removed
                .iter()
                .map(ChessField::as_algebraic)
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
}

fn trace_rejection(err: MoveError) -> MoveError {
    tracing::trace!("rejected: {}", err);
    err
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
