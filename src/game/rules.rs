use super::{Board, ChessField, Color, Piece, PieceType};

/// Movement legality for a single proposed move, pure over the board
/// snapshot. Assumes `from` actually holds `piece`; the entry gate in
/// `Game` guarantees that.
pub(crate) fn is_legal_move(board: &Board, piece: Piece, from: ChessField, to: ChessField) -> bool {
    // One shared occupancy rule for every piece kind, both knight shapes
    // included. Also rejects from == to: the origin square holds the mover.
    if let Some(target) = board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceType::Pawn => is_legal_pawn_move(board, piece.color, from, to),
        PieceType::Knight => is_legal_knight_move(from, to),
        PieceType::Bishop => is_legal_bishop_move(board, from, to),
        PieceType::Rook => is_legal_rook_move(board, from, to),
        PieceType::Queen => is_legal_queen_move(board, from, to),
        PieceType::King => is_legal_king_move(from, to),
    }
}

/// Every square the piece on `from` could legally move to.
pub(crate) fn legal_destinations(board: &Board, piece: Piece, from: ChessField) -> Vec<ChessField> {
    let mut destinations = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let to = ChessField::new(row, col);
            if is_legal_move(board, piece, from, to) {
                destinations.push(to);
            }
        }
    }
    destinations
}

fn is_legal_pawn_move(board: &Board, color: Color, from: ChessField, to: ChessField) -> bool {
    // White marches toward row 0, Black toward row 7.
    let forward: i8 = match color {
        Color::White => -1,
        Color::Black => 1,
    };
    let start_row = match color {
        Color::White => 6,
        Color::Black => 1,
    };

    let row_delta = to.row as i8 - from.row as i8;
    let col_delta = to.col as i8 - from.col as i8;

    if col_delta == 0 {
        // Straight ahead, never onto an occupied square.
        if row_delta == forward {
            return board.is_empty(to);
        }
        if row_delta == 2 * forward && from.row == start_row {
            let intermediate = ChessField::new((from.row as i8 + forward) as u8, from.col);
            return board.is_empty(intermediate) && board.is_empty(to);
        }
        false
    } else if col_delta.abs() == 1 && row_delta == forward {
        // Diagonal only as a capture; there is no en passant in this variant.
        matches!(board.piece_at(to), Some(target) if target.color != color)
    } else {
        false
    }
}

fn is_legal_knight_move(from: ChessField, to: ChessField) -> bool {
    let row_delta = (to.row as i8 - from.row as i8).abs();
    let col_delta = (to.col as i8 - from.col as i8).abs();
    (row_delta == 1 && col_delta == 2) || (row_delta == 2 && col_delta == 1)
}

fn is_legal_bishop_move(board: &Board, from: ChessField, to: ChessField) -> bool {
    let row_delta = (to.row as i8 - from.row as i8).abs();
    let col_delta = (to.col as i8 - from.col as i8).abs();
    if row_delta != col_delta {
        return false;
    }
    path_is_clear(board, from, to)
}

fn is_legal_rook_move(board: &Board, from: ChessField, to: ChessField) -> bool {
    if from.row != to.row && from.col != to.col {
        return false;
    }
    path_is_clear(board, from, to)
}

fn is_legal_queen_move(board: &Board, from: ChessField, to: ChessField) -> bool {
    is_legal_rook_move(board, from, to) || is_legal_bishop_move(board, from, to)
}

fn is_legal_king_move(from: ChessField, to: ChessField) -> bool {
    // No notion of check in this variant; adjacency is the whole rule.
    let row_delta = (to.row as i8 - from.row as i8).abs();
    let col_delta = (to.col as i8 - from.col as i8).abs();
    row_delta.max(col_delta) == 1
}

/// Walks the squares strictly between `from` and `to`. Only meaningful for
/// straight or diagonal lines; the destination itself is not inspected.
fn path_is_clear(board: &Board, from: ChessField, to: ChessField) -> bool {
    let row_step = (to.row as i8 - from.row as i8).signum();
    let col_step = (to.col as i8 - from.col as i8).signum();

    let mut row = from.row as i8 + row_step;
    let mut col = from.col as i8 + col_step;
    while (row, col) != (to.row as i8, to.col as i8) {
        if !board.is_empty(ChessField::new(row as u8, col as u8)) {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}
