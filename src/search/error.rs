//! Error types for the search drivers

use thiserror::Error;

/// Errors raised by [`WorkStealingDeque`](super::WorkStealingDeque)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DequeError {
    /// The deque is single-use and its slots are never reused
    #[error("deque capacity of {capacity} tasks exceeded")]
    CapacityExceeded { capacity: usize },
}

/// Errors that can end a top-level search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Pool and work-stealing drivers need at least one worker
    #[error("invalid thread count: a parallel search needs at least one worker")]
    InvalidThreadCount,

    /// A root move could not be scheduled
    #[error(transparent)]
    Deque(#[from] DequeError),

    /// A worker thread panicked; its partial results are discarded
    #[error("search worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}
