mod board;
mod moves;
mod piece;
mod piece_square_tables;
mod position;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;
pub use piece::*;
pub use piece_square_tables::pst_value;
pub use position::*;
