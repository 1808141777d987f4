use std::fmt;

/*-------BOARD LAYOUT--------*/

// The board is a 10x12 mailbox. Rows 0-1 and 10-11 are padding, as are
// columns 0 and 9, so every knight jump from a playable square stays
// inside the array.
//
//   21 .. 28   rank 8 (a8 .. h8)
//   ...
//   91 .. 98   rank 1 (a1 .. h1)
//
// "North" always points towards the opponent, whatever colour is to move.

pub const NORTH: i32 = -10;
pub const EAST: i32 = 1;
pub const SOUTH: i32 = 10;
pub const WEST: i32 = -1;

pub const A1: Square = Square(91);
pub const H1: Square = Square(98);
pub const A8: Square = Square(21);
pub const H8: Square = Square(28);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Square on the playable board. `file` 0 = a, `rank` 0 = first rank.
    pub fn from_coords(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self((9 - rank) * 10 + file + 1)
    }

    /// Parses coordinate notation such as `e4`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Self::from_coords(file as u8 - b'a', rank as u8 - b'1'))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The same square seen from the opponent's side of the board.
    pub fn flip(self) -> Self {
        Self(119 - self.0)
    }

    pub fn offset(self, direction: i32) -> Self {
        Self((self.0 as i32 + direction) as u8)
    }

    /// File 0..8 (a..h)
    pub fn file(self) -> u8 {
        self.0 % 10 - 1
    }

    /// Rank 0..8 (first..eighth)
    pub fn rank(self) -> u8 {
        9 - self.0 / 10
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

/// A move from one square to another, in the coordinates of the side
/// making it. Promotion is always to a queen, so no extra flag is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Parses `e2e4` style notation.
    pub fn from_coords(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        Some(Self::new(Square::parse(&s[..2])?, Square::parse(&s[2..])?))
    }

    pub fn from_sq(&self) -> Square {
        self.from
    }

    pub fn to_sq(&self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
