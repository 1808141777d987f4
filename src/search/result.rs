use std::fmt::Display;
use std::time::Instant;

use log::info;

use super::error::SearchError;
use super::strategy::Strategy;

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// `None` when the side to move had no moves
    pub best_move: Option<M>,
    pub score: i32,
    pub depth: u8,
    pub strategy: Strategy,
    pub threads: usize,
    pub time_ms: u64,
}

pub type SearchOutcome<M> = Result<SearchResult<M>, SearchError>;

impl<M: Display> SearchResult<M> {
    /// Stamps the elapsed time and logs the summary line for one search.
    pub(crate) fn finish(
        best_move: Option<M>,
        score: i32,
        depth: u8,
        strategy: Strategy,
        threads: usize,
        started: Instant,
    ) -> Self {
        let time_ms = started.elapsed().as_millis() as u64;
        match &best_move {
            Some(mv) => info!(
                "{} search depth {} threads {}: best {} score {} in {} ms",
                strategy, depth, threads, mv, score, time_ms
            ),
            None => info!(
                "{} search depth {} threads {}: no moves, score {} in {} ms",
                strategy, depth, threads, score, time_ms
            ),
        }

        Self {
            best_move,
            score,
            depth,
            strategy,
            threads,
            time_ms,
        }
    }
}
