use std::ops::{Index, IndexMut};

use super::moves::Square;
use super::piece::{Cell, Piece, Side};
use super::piece_square_tables::pst_value;

/// Padded 10x12 mailbox, always oriented so the side to move plays "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 120],
}

impl Board {
    /// Board with every playable square empty.
    pub fn empty() -> Self {
        let mut board = Self {
            cells: [Cell::Offboard; 120],
        };
        for square in Self::squares() {
            board[square] = Cell::Empty;
        }
        board
    }

    /// Builds a board from eight rows of piece letters, eighth rank first.
    /// Any character that is not a piece letter is an empty square.
    pub fn from_rows(rows: [&str; 8]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            for (file, c) in line.chars().take(8).enumerate() {
                let square = Square::from_coords(file as u8, 7 - row as u8);
                board[square] = Piece::from_char(c).map_or(Cell::Empty, Cell::Occupied);
            }
        }
        board
    }

    /// The 64 playable squares, a8 first and h1 last.
    pub fn squares() -> impl Iterator<Item = Square> {
        (2u8..10).flat_map(|row| (1u8..9).map(move |col| Square::new(row * 10 + col)))
    }

    /// Turns the board 180 degrees and hands every piece to the other side.
    pub fn rotate(&self) -> Self {
        let mut cells = [Cell::Offboard; 120];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = self.cells[119 - i].flip();
        }
        Self { cells }
    }

    /// Static score of the board for the side to move.
    pub fn evaluate(&self) -> i32 {
        Self::squares()
            .filter_map(|square| self[square].piece().map(|piece| (square, piece)))
            .map(|(square, piece)| match piece.side {
                Side::Ours => pst_value(piece.piece_type, square),
                Side::Theirs => -pst_value(piece.piece_type, square.flip()),
            })
            .sum()
    }

    /// Piece placement in FEN order, from the mover's point of view.
    pub fn placement(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self[Square::from_coords(file, rank)].piece() {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }
        placement
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Cell {
        &self.cells[square.index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, square: Square) -> &mut Cell {
        &mut self.cells[square.index()]
    }
}
