use super::error::SearchError;
use super::strategy::Strategy;

/// Configuration for one top-level search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Search depth in plies; 0 is treated as 1
    pub depth: u8,
    /// Worker count for the pool and work-stealing strategies
    pub num_threads: usize,
    /// Per-deque capacity for work stealing; `None` sizes each deque for
    /// its share of the root moves
    pub deque_capacity: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::WorkStealing,
            depth: 4,
            num_threads: num_cpus::get(),
            deque_capacity: None,
        }
    }
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn with_deque_capacity(mut self, capacity: usize) -> Self {
        self.deque_capacity = Some(capacity);
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        if self.strategy.uses_thread_count() && self.num_threads == 0 {
            return Err(SearchError::InvalidThreadCount);
        }
        Ok(())
    }
}
