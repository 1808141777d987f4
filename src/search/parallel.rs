// Parallel root-splitting drivers
//
// Every driver collects the root moves once, evaluates each of them as an
// independent task with `search_one_move_tree`, and reduces the results into
// a `SearchState`. No alpha is shared between root branches, so all drivers
// agree on the best score. They differ only in how tasks reach threads.
//
// Threads are scoped to the call: positions, moves and the state are
// borrowed, never cloned into `Arc`s. Every worker handle is joined
// explicitly so a panicking worker becomes an error instead of a panic.

use std::thread::{self, ScopedJoinHandle};
use std::time::Instant;

use log::{trace, warn};
use parking_lot::Mutex;
use rand::Rng;

use super::deque::WorkStealingDeque;
use super::error::SearchError;
use super::negamax::search_one_move_tree;
use super::position::SearchPosition;
use super::result::{SearchOutcome, SearchResult};
use super::state::SearchState;
use super::strategy::Strategy;

/// A scheduled root move. Receives the id of the worker that runs it.
pub type Task<'a> = Box<dyn FnOnce(usize) + Send + 'a>;

/// One thread per root move.
pub fn search_best_move_parallel<P>(position: &P, depth: u8) -> SearchOutcome<P::Move>
where
    P: SearchPosition + Sync,
    P::Move: Send + Sync,
{
    let started = Instant::now();
    let depth = depth.max(1);
    let moves: Vec<P::Move> = position.legal_moves().into_iter().collect();
    let state = SearchState::new();

    thread::scope(|scope| {
        let handles = moves
            .iter()
            .enumerate()
            .map(|(index, &mv)| {
                let state = &state;
                scope.spawn(move || {
                    let child = position.apply_move(mv);
                    state.record(mv, search_one_move_tree(index + 1, mv, &child, depth));
                })
            })
            .collect();
        join_workers(handles)
    })?;

    let (best_move, score) = state.into_best();
    Ok(SearchResult::finish(best_move, score, depth, Strategy::PerMove, moves.len(), started))
}

/// `num_threads` workers claim root moves through a shared, monotonic index.
pub fn search_best_move_pool<P>(position: &P, depth: u8, num_threads: usize) -> SearchOutcome<P::Move>
where
    P: SearchPosition + Sync,
    P::Move: Send + Sync,
{
    if num_threads == 0 {
        return Err(SearchError::InvalidThreadCount);
    }

    let started = Instant::now();
    let depth = depth.max(1);
    let moves: Vec<P::Move> = position.legal_moves().into_iter().collect();
    let state = SearchState::new();
    let next_move = Mutex::new(0usize);

    thread::scope(|scope| {
        let handles = (1..=num_threads)
            .map(|worker| {
                let (moves, state, next_move) = (&moves, &state, &next_move);
                scope.spawn(move || loop {
                    let index = {
                        let mut next = next_move.lock();
                        let index = *next;
                        *next += 1;
                        index
                    };
                    let Some(&mv) = moves.get(index) else {
                        break;
                    };

                    let child = position.apply_move(mv);
                    state.record(mv, search_one_move_tree(worker, mv, &child, depth));
                })
            })
            .collect();
        join_workers(handles)
    })?;

    let (best_move, score) = state.into_best();
    Ok(SearchResult::finish(best_move, score, depth, Strategy::FixedPool, num_threads, started))
}

/// `num_threads` workers, each owning a deque preloaded round-robin with
/// root moves. An idle worker steals the oldest task of one random other
/// worker and exits when that single steal attempt finds nothing.
///
/// `capacity` bounds every deque; `None` sizes them for their share of the
/// root moves. A capacity too small for the share fails before any worker
/// starts.
pub fn search_best_move_work_stealing<P>(
    position: &P,
    depth: u8,
    num_threads: usize,
    capacity: Option<usize>,
) -> SearchOutcome<P::Move>
where
    P: SearchPosition + Sync,
    P::Move: Send + Sync,
{
    if num_threads == 0 {
        return Err(SearchError::InvalidThreadCount);
    }

    let started = Instant::now();
    let depth = depth.max(1);
    let moves: Vec<P::Move> = position.legal_moves().into_iter().collect();
    let state = SearchState::new();

    let capacity = capacity.unwrap_or_else(|| moves.len().div_ceil(num_threads));
    let deques: Vec<WorkStealingDeque<Task<'_>>> = (0..num_threads)
        .map(|_| WorkStealingDeque::new(capacity))
        .collect();

    for (index, &mv) in moves.iter().enumerate() {
        let state = &state;
        let task: Task<'_> = Box::new(move |worker| {
            let child = position.apply_move(mv);
            state.record(mv, search_one_move_tree(worker, mv, &child, depth));
        });
        deques[index % num_threads].push_bottom(task)?;
    }

    thread::scope(|scope| {
        let handles = (0..num_threads)
            .map(|id| {
                let deques = &deques;
                scope.spawn(move || run_worker(id, deques))
            })
            .collect();
        join_workers(handles)
    })?;

    // Tasks borrow the state; release them before taking it apart
    drop(deques);
    let (best_move, score) = state.into_best();
    Ok(SearchResult::finish(best_move, score, depth, Strategy::WorkStealing, num_threads, started))
}

fn run_worker(id: usize, deques: &[WorkStealingDeque<Task<'_>>]) {
    let worker = id + 1;
    let mut rng = rand::thread_rng();

    loop {
        let task = match deques[id].pop_bottom() {
            Some(task) => task,
            None => {
                let Some(victim) = pick_victim(&mut rng, id, deques.len()) else {
                    break;
                };
                trace!("worker {} stealing from worker {}", worker, victim + 1);
                match deques[victim].pop_top() {
                    Some(task) => task,
                    None => break,
                }
            }
        };
        task(worker);
    }

    trace!("worker {} out of work", worker);
}

/// Uniformly random worker other than `id`, or `None` when there is none.
pub(super) fn pick_victim<R: Rng>(rng: &mut R, id: usize, num_workers: usize) -> Option<usize> {
    if num_workers < 2 {
        return None;
    }
    let victim = rng.gen_range(0..num_workers - 1);
    Some(if victim >= id { victim + 1 } else { victim })
}

/// Joins every worker, even after a failure. Worker ids are 1-based.
fn join_workers(handles: Vec<ScopedJoinHandle<'_, ()>>) -> Result<(), SearchError> {
    let mut outcome = Ok(());
    for (index, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() {
            warn!("search worker {} panicked", index + 1);
            if outcome.is_ok() {
                outcome = Err(SearchError::WorkerPanicked { worker: index + 1 });
            }
        }
    }
    outcome
}
