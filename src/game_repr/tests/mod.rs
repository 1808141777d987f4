use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Parses a square in the mover's coordinates
pub fn sq(s: &str) -> Square {
    Square::parse(s).unwrap()
}

/// Parses a move in the mover's coordinates
pub fn mv(s: &str) -> Move {
    Move::from_coords(s).unwrap()
}

/// Parses a move written from White's side of the board and turns it into
/// the rotated coordinates Black sees when it is Black's turn
pub fn black_mv(s: &str) -> Move {
    let m = mv(s);
    Move::new(m.from_sq().flip(), m.to_sq().flip())
}

pub fn fen(s: &str) -> Position {
    Position::from_fen(s).unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(pos: &Position, m: Move) -> bool {
    pos.moves().contains(&m)
}

/// Cell at `square` from White's point of view, for a position where Black
/// is to move
pub fn white_view(pos: &Position, square: &str) -> Cell {
    pos.rotate().board()[sq(square)]
}

// ==================== TEST MODULES ====================

mod perft;
mod promotion;
