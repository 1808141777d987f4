use super::*;

use std::ops::Range;
use std::sync::Arc;

use rand::Rng;

// ==================== HELPER FUNCTIONS ====================

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug)]
struct Node {
    score: i32,
    children: Vec<TreePosition>,
    explodes: bool,
}

/// Synthetic game tree. Move `i` leads to child `i`; every node carries the
/// static score for its own side to move.
#[derive(Debug, Clone)]
pub struct TreePosition(Arc<Node>);

impl TreePosition {
    pub fn leaf(score: i32) -> Self {
        Self::node(score, Vec::new())
    }

    pub fn node(score: i32, children: Vec<TreePosition>) -> Self {
        Self(Arc::new(Node {
            score,
            children,
            explodes: false,
        }))
    }

    /// A node whose move into it panics, to crash whichever worker plays it
    pub fn exploding() -> Self {
        Self(Arc::new(Node {
            score: 0,
            children: Vec::new(),
            explodes: true,
        }))
    }

    /// Random tree `depth` plies deep. Interior nodes may have no children,
    /// which exercises the mate sentinel; the root always has at least one.
    pub fn random<R: Rng>(rng: &mut R, depth: u8, max_branching: usize) -> Self {
        let root = Self::random_node(rng, depth, max_branching);
        if root.0.children.is_empty() && depth > 0 {
            let child = Self::random_node(rng, depth - 1, max_branching);
            return Self::node(root.0.score, vec![child]);
        }
        root
    }

    fn random_node<R: Rng>(rng: &mut R, depth: u8, max_branching: usize) -> Self {
        let score = rng.gen_range(-1000..=1000);
        if depth == 0 {
            return Self::leaf(score);
        }
        let branching = rng.gen_range(0..=max_branching);
        let children = (0..branching)
            .map(|_| Self::random_node(rng, depth - 1, max_branching))
            .collect();
        Self::node(score, children)
    }
}

impl SearchPosition for TreePosition {
    type Move = usize;
    type Moves = Range<usize>;

    fn legal_moves(&self) -> Range<usize> {
        0..self.0.children.len()
    }

    fn apply_move(&self, mv: usize) -> Self {
        let child = self.0.children[mv].clone();
        if child.0.explodes {
            panic!("move {} reached an exploding node", mv);
        }
        child
    }

    fn score(&self) -> i32 {
        self.0.score
    }
}

/// Plain minimax without pruning, the reference every search must match
pub fn minimax<P: SearchPosition>(position: &P, depth: u8) -> i32 {
    if depth == 0 {
        return position.score();
    }
    position
        .legal_moves()
        .into_iter()
        .map(|mv| -minimax(&position.apply_move(mv), depth - 1))
        .max()
        .unwrap_or(-MATE_VALUE)
}

/// Runs every strategy on `position`
pub fn run_all_strategies<P>(position: &P, depth: u8, num_threads: usize) -> Vec<SearchResult<P::Move>>
where
    P: SearchPosition + Sync,
    P::Move: Send + Sync,
{
    Strategy::all()
        .into_iter()
        .map(|strategy| {
            let config = SearchConfig::default()
                .with_strategy(strategy)
                .with_depth(depth)
                .with_threads(num_threads);
            search(position, &config).unwrap()
        })
        .collect()
}

// ==================== TEST MODULES ====================

mod deque_tests;
