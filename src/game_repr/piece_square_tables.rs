// Piece-square tables for positional evaluation
// All values in centipawns (100 = 1 pawn)
// Tables are from the mover's perspective (rank 1 at index 0, rank 8 at the end)
// The padded tables fold the piece's material value into every square

use once_cell::sync::Lazy;

use super::moves::Square;
use super::piece::Type;

// Pawn position values - encourage advancement and central control
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns shouldn't be here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8 (promotes on arrival)
];

// Knight position values - prefer center squares
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

// Bishop position values - prefer center and long diagonals
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

// Rook position values - prefer 7th rank and center files
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,  // 7th rank bonus
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Queen position values - slight central preference
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// King position values - prefer safety on the back rank
const KING_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,  // castled position
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

fn positional_table(piece_type: Type) -> &'static [i32; 64] {
    match piece_type {
        Type::Pawn => &PAWN_TABLE,
        Type::Knight => &KNIGHT_TABLE,
        Type::Bishop => &BISHOP_TABLE,
        Type::Rook => &ROOK_TABLE,
        Type::Queen => &QUEEN_TABLE,
        Type::King => &KING_TABLE,
    }
}

/// Material plus position for every cell of the 120-cell board, indexed
/// by `Type as usize`. Padding cells stay zero.
static PADDED_TABLES: Lazy<[[i32; 120]; 6]> = Lazy::new(|| {
    let mut tables = [[0i32; 120]; 6];
    for piece_type in Type::ALL {
        let table = &mut tables[piece_type as usize];
        let positional = positional_table(piece_type);
        for rank in 0..8u8 {
            for file in 0..8u8 {
                let square = Square::from_coords(file, rank);
                table[square.index()] =
                    piece_type.value() + positional[(rank * 8 + file) as usize];
            }
        }
    }
    tables
});

/// Value of `piece_type` standing on `square`, from its owner's perspective.
pub fn pst_value(piece_type: Type, square: Square) -> i32 {
    PADDED_TABLES[piece_type as usize][square.index()]
}
