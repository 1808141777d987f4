// Search-facing view of a game position
//
// The drivers only need to enumerate moves, apply one, and read a static
// score. Positions are immutable values: applying a move returns a new
// position seen from the opponent's side (negamax convention), so the score
// is always relative to the side to move.

use std::fmt::{Debug, Display};

pub trait SearchPosition: Sized {
    type Move: Copy + PartialEq + Debug + Display;
    type Moves: IntoIterator<Item = Self::Move>;

    /// Moves available to the side to move, in search order.
    fn legal_moves(&self) -> Self::Moves;

    /// Plays `mv` and returns the position from the opponent's point of view.
    fn apply_move(&self, mv: Self::Move) -> Self;

    /// Static evaluation for the side to move.
    fn score(&self) -> i32;
}
