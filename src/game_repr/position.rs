use smallvec::SmallVec;
use thiserror::Error;

use super::board::Board;
use super::moves::{Move, Square, A1, A8, EAST, H1, H8, NORTH, SOUTH, WEST};
use super::piece::{Cell, Piece, Side, Type};
use super::piece_square_tables::pst_value;
use crate::search::SearchPosition;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 *
 * A position is an immutable value. Making a move returns a new position
 * rotated to the opponent's point of view, so every position is scored and
 * generated for "the side to move".
 */

/// Move buffer sized for a typical middlegame position.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN is missing the {0} field")]
    MissingField(&'static str),

    #[error("FEN placement must have 8 ranks, found {0}")]
    BadRankCount(usize),

    #[error("FEN rank {rank} does not describe exactly 8 squares")]
    BadRankLength { rank: usize },

    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}' (expected 'w' or 'b')")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}' in FEN")]
    InvalidCastling(char),

    #[error("invalid en passant square '{0}'")]
    InvalidSquare(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    /// Incremental evaluation from the perspective of the side to move
    pub(crate) score: i32,
    /// Castling rights of the side to move: [rook on a1, rook on h1]
    pub(crate) castling: [bool; 2],
    /// Castling rights of the opponent, in the opponent's own coordinates
    pub(crate) their_castling: [bool; 2],
    /// Square a pawn skipped over on the previous double push
    pub(crate) en_passant: Option<Square>,
    /// Square the opponent's king passed over while castling
    pub(crate) king_passant: Option<Square>,
}

const STANDARD_ROWS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........",
    "........", "........", "PPPPPPPP", "RNBQKBNR",
];

// Byrne vs Fischer, New York 1956, Black to move after 11.Bg5 (g6 pawn omitted),
// drawn from White's side
const FISCHER_ROWS: [&str; 8] = [
    "r..q.rk.", "pp..ppbp", ".np..n..", "..Q...B.",
    "...PP.b.", "..N..N..", "PP...PPP", "...RKB.R",
];

impl Default for Position {
    fn default() -> Self {
        Self::standard()
    }
}

impl Position {
    /// Builds a position for the side whose pieces are upper case in `board`.
    fn new(board: Board, castling: [bool; 2], their_castling: [bool; 2], en_passant: Option<Square>) -> Self {
        Self {
            score: board.evaluate(),
            board,
            castling,
            their_castling,
            en_passant,
            king_passant: None,
        }
    }

    /// Standard starting position, White to move.
    pub fn standard() -> Self {
        Self::new(Board::from_rows(STANDARD_ROWS), [true, true], [true, true], None)
    }

    /// Middlegame from the "Game of the Century", Black to move. White keeps
    /// its kingside castling right; Black has already castled.
    /// Many more moves per ply than the opening, so it makes a good benchmark.
    pub fn fischer() -> Self {
        Self::new(Board::from_rows(FISCHER_ROWS), [false, true], [false, false], None).rotate()
    }

    /// Parses a FEN string. Only the placement field is required; missing
    /// side, castling and en passant fields default to "w", "-" and "-".
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut fields = fen.split_whitespace();
        let placement = fields.next().ok_or(FenError::MissingField("piece placement"))?;
        let side = fields.next().unwrap_or("w");
        let castling_field = fields.next().unwrap_or("-");
        let en_passant_field = fields.next().unwrap_or("-");

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    if file as u32 + skip > 8 {
                        return Err(FenError::BadRankLength { rank: rank as usize + 1 });
                    }
                    file += skip as u8;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece(c))?;
                if file >= 8 {
                    return Err(FenError::BadRankLength { rank: rank as usize + 1 });
                }
                board[Square::from_coords(file, rank)] = Cell::Occupied(piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::BadRankLength { rank: rank as usize + 1 });
            }
        }

        // White's rights in White's coordinates, Black's in Black's (rotated)
        let mut white = [false; 2];
        let mut black = [false; 2];
        if castling_field != "-" {
            for c in castling_field.chars() {
                match c {
                    'Q' => white[0] = true,
                    'K' => white[1] = true,
                    'k' => black[0] = true,
                    'q' => black[1] = true,
                    _ => return Err(FenError::InvalidCastling(c)),
                }
            }
        }

        let en_passant = match en_passant_field {
            "-" => None,
            sq => Some(Square::parse(sq).ok_or_else(|| FenError::InvalidSquare(sq.to_string()))?),
        };

        let position = Self::new(board, white, black, en_passant);
        match side {
            "w" => Ok(position),
            "b" => Ok(position.rotate()),
            other => Err(FenError::InvalidSideToMove(other.to_string())),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn castling(&self) -> [bool; 2] {
        self.castling
    }

    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Hands the move to the opponent: rotates the board and negates the score.
    pub fn rotate(&self) -> Self {
        Self {
            board: self.board.rotate(),
            score: -self.score,
            castling: self.their_castling,
            their_castling: self.castling,
            en_passant: self.en_passant.map(Square::flip),
            king_passant: self.king_passant.map(Square::flip),
        }
    }

    /// A diagonal pawn step onto `square` is allowed even when it is empty:
    /// en passant, or capturing a king that castled through `square`.
    fn is_passant_target(&self, square: Square) -> bool {
        if self.en_passant == Some(square) {
            return true;
        }
        self.king_passant.is_some_and(|kp| {
            let distance = square.index() as i32 - kp.index() as i32;
            distance.abs() <= 1
        })
    }

    /// Generates pseudo-legal moves for the side to move into `moves`.
    /// The buffer is cleared first. Moves that leave the king en prise are
    /// kept; losing the king is scored instead of forbidden.
    pub fn moves_into(&self, moves: &mut MoveList) {
        moves.clear();
        let our_king = Cell::Occupied(Piece::ours(Type::King));

        for from in Board::squares() {
            let piece_type = match self.board[from].piece() {
                Some(piece) if piece.side == Side::Ours => piece.piece_type,
                _ => continue,
            };

            for &direction in piece_type.directions() {
                let mut to = from.offset(direction);
                loop {
                    let target = self.board[to];
                    if target.is_offboard() || target.is_ours() {
                        break;
                    }

                    if piece_type == Type::Pawn {
                        let is_push = direction == NORTH || direction == NORTH + NORTH;
                        if is_push && !target.is_empty() {
                            break;
                        }
                        if direction == NORTH + NORTH
                            && (from < A1.offset(NORTH) || !self.board[from.offset(NORTH)].is_empty())
                        {
                            break;
                        }
                        if !is_push && target.is_empty() && !self.is_passant_target(to) {
                            break;
                        }
                    }

                    moves.push(Move::new(from, to));

                    if piece_type.is_crawler() || target.is_theirs() {
                        break;
                    }

                    // Castling: a rook sliding up next to its own king lets the king jump over it
                    if from == A1 && self.castling[0] && self.board[to.offset(EAST)] == our_king {
                        moves.push(Move::new(to.offset(EAST), to.offset(WEST)));
                    }
                    if from == H1 && self.castling[1] && self.board[to.offset(WEST)] == our_king {
                        moves.push(Move::new(to.offset(WEST), to.offset(EAST)));
                    }

                    to = to.offset(direction);
                }
            }
        }
    }

    /// Returns all pseudo-legal moves for the side to move.
    pub fn moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.moves_into(&mut moves);
        moves
    }

    /// Change in score (for the side to move) caused by `mv`.
    pub fn move_value(&self, mv: Move) -> i32 {
        let (from, to) = (mv.from_sq(), mv.to_sq());
        let Some(piece) = self.board[from].piece() else {
            return 0;
        };
        let piece_type = piece.piece_type;

        let mut score = pst_value(piece_type, to) - pst_value(piece_type, from);

        if let Some(captured) = self.board[to].piece().filter(|p| p.side != piece.side) {
            score += pst_value(captured.piece_type, to.flip());
        }

        // Capturing a king that castled through this square
        if let Some(kp) = self.king_passant {
            if (to.index() as i32 - kp.index() as i32).abs() < 2 {
                score += pst_value(Type::King, to.flip());
            }
        }

        match piece_type {
            Type::King if is_castling(from, to) => {
                let rook_from = if to < from { A1 } else { H1 };
                score += pst_value(Type::Rook, midpoint(from, to));
                score -= pst_value(Type::Rook, rook_from);
            }
            Type::Pawn => {
                if is_last_rank(to) {
                    score += pst_value(Type::Queen, to) - pst_value(Type::Pawn, to);
                }
                if self.en_passant == Some(to) {
                    score += pst_value(Type::Pawn, to.offset(SOUTH).flip());
                }
            }
            _ => {}
        }

        score
    }

    /// Plays `mv` and returns the resulting position from the opponent's view.
    pub fn make_move(&self, mv: Move) -> Self {
        let (from, to) = (mv.from_sq(), mv.to_sq());
        let moving = self.board[from];

        let mut next = self.clone();
        next.en_passant = None;
        next.king_passant = None;
        next.score = self.score + self.move_value(mv);
        next.board[to] = moving;
        next.board[from] = Cell::Empty;

        // Rook leaving its corner, or an enemy rook captured on its corner
        if from == A1 {
            next.castling[0] = false;
        }
        if from == H1 {
            next.castling[1] = false;
        }
        if to == A8 {
            next.their_castling[1] = false;
        }
        if to == H8 {
            next.their_castling[0] = false;
        }

        match moving.piece().map(|p| p.piece_type) {
            Some(Type::King) => {
                next.castling = [false, false];
                if is_castling(from, to) {
                    let passed = midpoint(from, to);
                    next.king_passant = Some(passed);
                    next.board[if to < from { A1 } else { H1 }] = Cell::Empty;
                    next.board[passed] = Cell::Occupied(Piece::ours(Type::Rook));
                }
            }
            Some(Type::Pawn) => {
                if is_last_rank(to) {
                    next.board[to] = Cell::Occupied(Piece::ours(Type::Queen));
                }
                if to.index() as i32 - from.index() as i32 == 2 * NORTH {
                    next.en_passant = Some(from.offset(NORTH));
                }
                if self.en_passant == Some(to) {
                    next.board[to.offset(SOUTH)] = Cell::Empty;
                }
            }
            _ => {}
        }

        next.rotate()
    }

    /// Perft (Performance Test) over pseudo-legal moves
    /// Used to validate move generation
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| self.make_move(mv).perft(depth - 1))
            .sum()
    }
}

fn is_castling(from: Square, to: Square) -> bool {
    (to.index() as i32 - from.index() as i32).abs() == 2
}

fn midpoint(from: Square, to: Square) -> Square {
    Square::new(((from.index() + to.index()) / 2) as u8)
}

fn is_last_rank(square: Square) -> bool {
    A8 <= square && square <= H8
}

impl SearchPosition for Position {
    type Move = Move;
    type Moves = MoveList;

    fn legal_moves(&self) -> MoveList {
        self.moves()
    }

    fn apply_move(&self, mv: Move) -> Self {
        self.make_move(mv)
    }

    fn score(&self) -> i32 {
        self.score
    }
}
