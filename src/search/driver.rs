use super::config::SearchConfig;
use super::negamax::search_best_move;
use super::parallel::{search_best_move_parallel, search_best_move_pool, search_best_move_work_stealing};
use super::position::SearchPosition;
use super::result::SearchOutcome;
use super::strategy::Strategy;

/// Runs one search with the strategy, depth and worker count in `config`.
pub fn search<P>(position: &P, config: &SearchConfig) -> SearchOutcome<P::Move>
where
    P: SearchPosition + Sync,
    P::Move: Send + Sync,
{
    config.validate()?;

    match config.strategy {
        Strategy::Sequential => Ok(search_best_move(position, config.depth)),
        Strategy::PerMove => search_best_move_parallel(position, config.depth),
        Strategy::FixedPool => search_best_move_pool(position, config.depth, config.num_threads),
        Strategy::WorkStealing => search_best_move_work_stealing(
            position,
            config.depth,
            config.num_threads,
            config.deque_capacity,
        ),
    }
}
