pub mod game_repr;
pub mod search;
