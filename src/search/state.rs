use parking_lot::Mutex;

use super::negamax::{INFINITY, MATE_VALUE};

#[derive(Debug)]
struct Best<M> {
    score: i32,
    mv: Option<M>,
    alpha: i32,
}

/// Best root move found so far, shared by every worker of one search.
///
/// Each completed root task records its score once; the driver reads the
/// result after all workers have been joined.
#[derive(Debug)]
pub struct SearchState<M> {
    inner: Mutex<Best<M>>,
}

impl<M: Copy> SearchState<M> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Best {
                score: i32::MIN,
                mv: None,
                alpha: -INFINITY,
            }),
        }
    }

    /// Records a finished root move. Ties keep the move recorded first.
    pub fn record(&self, mv: M, score: i32) {
        let mut best = self.inner.lock();
        if score > best.score {
            best.score = score;
            best.mv = Some(mv);
        }
        if best.score > best.alpha {
            best.alpha = best.score;
        }
    }

    /// Highest score recorded so far, or `-INFINITY` before any record.
    pub fn alpha(&self) -> i32 {
        self.inner.lock().alpha
    }

    /// Best move and score so far.
    pub fn best(&self) -> (Option<M>, i32) {
        let best = self.inner.lock();
        (best.mv, best.score)
    }

    /// Final result. A search that recorded nothing had no root moves.
    pub fn into_best(self) -> (Option<M>, i32) {
        let best = self.inner.into_inner();
        match best.mv {
            Some(mv) => (Some(mv), best.score),
            None => (None, -MATE_VALUE),
        }
    }
}

impl<M: Copy> Default for SearchState<M> {
    fn default() -> Self {
        Self::new()
    }
}
