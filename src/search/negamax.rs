// Negamax Search with Alpha-Beta Pruning
//
// Negamax relies on the zero-sum property of chess: max(a, b) = -min(-a, -b).
// One function serves both sides by negating the child's score, because every
// position is scored from the point of view of the side to move.
//
// Scores are fail-soft: a cut-off node returns the best score it saw, which
// is a bound rather than the exact value. Root drivers that need exact
// values search every root child with the full window.

use std::time::Instant;

use log::debug;

use super::position::SearchPosition;
use super::result::SearchResult;
use super::strategy::Strategy;

/// Score of a side with no moves left. Larger than any material balance
/// short of capturing a king.
pub const MATE_VALUE: i32 = 75_000;

/// Search bound. Symmetric so that negating a bound never overflows.
pub const INFINITY: i32 = i32::MAX;

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `position` - Position to search, scored for the side to move
/// * `depth` - Remaining depth in plies (0 = return the static score)
/// * `alpha` - Lower bound (best score the side to move can already force)
/// * `beta` - Upper bound (best score the opponent will allow)
///
/// # Returns
///
/// Score from the perspective of the side to move, or `-MATE_VALUE` when it
/// has no moves.
pub fn negamax<P: SearchPosition>(position: &P, depth: u8, mut alpha: i32, beta: i32) -> i32 {
    if depth == 0 {
        return position.score();
    }

    let mut best = i32::MIN;
    for mv in position.legal_moves() {
        let child = position.apply_move(mv);
        let score = -negamax(&child, depth - 1, -beta, -alpha);

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }

    if best == i32::MIN {
        -MATE_VALUE
    } else {
        best
    }
}

/// Evaluates one root move: `child` is the position after `mv`, searched with
/// the full window so the result is exact.
pub fn search_one_move_tree<P: SearchPosition>(worker: usize, mv: P::Move, child: &P, depth: u8) -> i32 {
    let score = -negamax(child, depth.saturating_sub(1), -INFINITY, INFINITY);
    debug!("worker {} move {} score {}", worker, mv, score);
    score
}

/// Single-threaded root search.
///
/// The root alpha is raised to the best score so far and narrows the window
/// of later children. A child cut off by that window can only fail low here,
/// so the best score and the first move reaching it match the parallel
/// drivers, which give every root child the full window.
pub fn search_best_move<P: SearchPosition>(position: &P, depth: u8) -> SearchResult<P::Move> {
    let started = Instant::now();
    // Ensure we search at least depth 1
    let depth = depth.max(1);

    let mut best_score = i32::MIN;
    let mut best_move = None;
    let mut alpha = -INFINITY;

    for mv in position.legal_moves() {
        let child = position.apply_move(mv);
        let score = -negamax(&child, depth - 1, -INFINITY, -alpha);
        debug!("worker 1 move {} score {}", mv, score);

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(best_score);
    }

    if best_move.is_none() {
        best_score = -MATE_VALUE;
    }
    SearchResult::finish(best_move, best_score, depth, Strategy::Sequential, 1, started)
}
