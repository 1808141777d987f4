use std::fmt;
use std::str::FromStr;

/// How root moves are handed out to threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// One thread, root alpha narrows the window of later moves
    Sequential,

    /// One thread per root move
    PerMove,

    /// A fixed number of threads claiming root moves from a shared index
    FixedPool,

    /// A fixed number of threads, each with its own deque, stealing when idle
    #[default]
    WorkStealing,
}

impl Strategy {
    pub fn all() -> [Strategy; 4] {
        [
            Strategy::Sequential,
            Strategy::PerMove,
            Strategy::FixedPool,
            Strategy::WorkStealing,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential",
            Strategy::PerMove => "Per-move parallel",
            Strategy::FixedPool => "Fixed worker pool",
            Strategy::WorkStealing => "Work stealing",
        }
    }

    /// One-letter mode code
    pub fn code(&self) -> char {
        match self {
            Strategy::Sequential => 's',
            Strategy::PerMove => 'm',
            Strategy::FixedPool => 'p',
            Strategy::WorkStealing => 'w',
        }
    }

    /// Whether the strategy runs a fixed number of worker threads
    pub fn uses_thread_count(&self) -> bool {
        matches!(self, Strategy::FixedPool | Strategy::WorkStealing)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy '{0}' (expected s, m, p or w)")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sequential" => Ok(Strategy::Sequential),
            "m" | "per-move" | "permove" => Ok(Strategy::PerMove),
            "p" | "pool" | "fixed-pool" => Ok(Strategy::FixedPool),
            "w" | "work-stealing" | "workstealing" => Ok(Strategy::WorkStealing),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
