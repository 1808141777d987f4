// Pieces and board cells
//
// The board is always stored from the point of view of the side to move,
// so a piece carries its owner relative to the mover (ours / theirs) rather
// than an absolute colour. Rotating the board after a move swaps owners.

use super::moves::{EAST, NORTH, SOUTH, WEST};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    pub const ALL: [Type; 6] = [
        Type::Pawn,
        Type::Knight,
        Type::Bishop,
        Type::Rook,
        Type::Queen,
        Type::King,
    ];

    /// Material value in centipawns.
    ///
    /// The king is worth more than every other piece combined (including a
    /// board full of promoted queens), so capturing it dominates any
    /// material trade.
    pub fn value(&self) -> i32 {
        match self {
            Type::Pawn => 100,
            Type::Knight => 280,
            Type::Bishop => 320,
            Type::Rook => 479,
            Type::Queen => 929,
            Type::King => 60_000,
        }
    }

    /// Pieces that move a single step in each direction instead of sliding.
    pub fn is_crawler(&self) -> bool {
        matches!(self, Type::Pawn | Type::Knight | Type::King)
    }

    /// Board offsets this piece moves along, in generation order.
    pub fn directions(&self) -> &'static [i32] {
        const PAWN: [i32; 4] = [NORTH, NORTH + NORTH, NORTH + WEST, NORTH + EAST];
        const KNIGHT: [i32; 8] = [
            NORTH + NORTH + EAST,
            EAST + NORTH + EAST,
            EAST + SOUTH + EAST,
            SOUTH + SOUTH + EAST,
            SOUTH + SOUTH + WEST,
            WEST + SOUTH + WEST,
            WEST + NORTH + WEST,
            NORTH + NORTH + WEST,
        ];
        const BISHOP: [i32; 4] = [NORTH + EAST, SOUTH + EAST, SOUTH + WEST, NORTH + WEST];
        const ROOK: [i32; 4] = [NORTH, EAST, SOUTH, WEST];
        const ROYAL: [i32; 8] = [
            NORTH,
            EAST,
            SOUTH,
            WEST,
            NORTH + EAST,
            SOUTH + EAST,
            SOUTH + WEST,
            NORTH + WEST,
        ];

        match self {
            Type::Pawn => &PAWN,
            Type::Knight => &KNIGHT,
            Type::Bishop => &BISHOP,
            Type::Rook => &ROOK,
            Type::Queen | Type::King => &ROYAL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Belongs to the side to move
    Ours,
    /// Belongs to the opponent
    Theirs,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Ours => Self::Theirs,
            Self::Theirs => Self::Ours,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub piece_type: Type,
}

impl Piece {
    pub fn ours(piece_type: Type) -> Self {
        Self { side: Side::Ours, piece_type }
    }

    pub fn theirs(piece_type: Type) -> Self {
        Self { side: Side::Theirs, piece_type }
    }

    /// Parses a FEN piece letter. Upper case pieces belong to the side the
    /// board is being built for, lower case ones to the opponent.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        let side = if c.is_ascii_uppercase() { Side::Ours } else { Side::Theirs };
        Some(Self { side, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        };
        match self.side {
            Side::Ours => c.to_ascii_uppercase(),
            Side::Theirs => c,
        }
    }

    pub fn flip(&self) -> Self {
        Self {
            side: self.side.opposite(),
            piece_type: self.piece_type,
        }
    }
}

/// One cell of the padded 10x12 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Padding around the playable 8x8 area
    #[default]
    Offboard,
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn flip(&self) -> Self {
        match self {
            Cell::Occupied(piece) => Cell::Occupied(piece.flip()),
            other => *other,
        }
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(*piece),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn is_offboard(&self) -> bool {
        *self == Cell::Offboard
    }

    pub fn is_ours(&self) -> bool {
        matches!(self, Cell::Occupied(Piece { side: Side::Ours, .. }))
    }

    pub fn is_theirs(&self) -> bool {
        matches!(self, Cell::Occupied(Piece { side: Side::Theirs, .. }))
    }
}
