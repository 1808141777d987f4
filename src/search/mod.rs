// Parallel Negamax Search
//
// Root-splitting alpha-beta search over any `SearchPosition`. The root moves
// are evaluated independently and reduced into a shared `SearchState`; the
// strategies differ only in how those root tasks are scheduled:
// - Sequential: one thread, the root alpha narrows later windows
// - Per-move: one scoped thread per root move
// - Fixed pool: N threads claiming moves from a shared index
// - Work stealing: N threads with a lock-free deque each

mod config;
mod deque;
mod driver;
mod error;
mod negamax;
mod parallel;
mod position;
mod result;
mod state;
mod strategy;

#[cfg(test)]
mod tests;

pub use config::SearchConfig;
pub use deque::WorkStealingDeque;
pub use driver::search;
pub use error::{DequeError, SearchError};
pub use negamax::{negamax, search_best_move, search_one_move_tree, INFINITY, MATE_VALUE};
pub use parallel::{search_best_move_parallel, search_best_move_pool, search_best_move_work_stealing, Task};
pub use position::SearchPosition;
pub use result::{SearchOutcome, SearchResult};
pub use state::SearchState;
pub use strategy::{ParseStrategyError, Strategy};
