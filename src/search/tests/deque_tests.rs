use super::*;

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ==================== SINGLE-THREADED BEHAVIOUR ====================

#[test]
fn test_owner_pops_lifo() {
    let deque = WorkStealingDeque::new(4);
    for i in 1..=3 {
        deque.push_bottom(i).unwrap();
    }

    assert_eq!(deque.pop_bottom(), Some(3));
    assert_eq!(deque.pop_bottom(), Some(2));
    assert_eq!(deque.pop_bottom(), Some(1));
    assert_eq!(deque.pop_bottom(), None);
    assert!(deque.is_empty());
}

#[test]
fn test_thieves_pop_fifo() {
    let deque = WorkStealingDeque::new(4);
    for i in 1..=3 {
        deque.push_bottom(i).unwrap();
    }

    assert_eq!(deque.pop_top(), Some(1));
    assert_eq!(deque.pop_top(), Some(2));
    assert_eq!(deque.pop_top(), Some(3));
    assert_eq!(deque.pop_top(), None);
}

#[test]
fn test_both_ends_meet_in_the_middle() {
    let deque = WorkStealingDeque::new(4);
    for i in 1..=4 {
        deque.push_bottom(i).unwrap();
    }

    assert_eq!(deque.pop_top(), Some(1));
    assert_eq!(deque.pop_bottom(), Some(4));
    assert_eq!(deque.len(), 2);
    assert_eq!(deque.pop_top(), Some(2));
    assert_eq!(deque.pop_bottom(), Some(3));
    assert_eq!(deque.pop_bottom(), None);
    assert_eq!(deque.pop_top(), None);
}

#[test]
fn test_pop_on_fresh_deque() {
    let deque: WorkStealingDeque<u32> = WorkStealingDeque::new(2);
    assert_eq!(deque.pop_bottom(), None);
    assert_eq!(deque.pop_top(), None);
    assert_eq!(deque.capacity(), 2);
}

#[test]
fn test_push_past_capacity_is_rejected() {
    let deque = WorkStealingDeque::new(2);
    deque.push_bottom('a').unwrap();
    deque.push_bottom('b').unwrap();

    assert_eq!(
        deque.push_bottom('c'),
        Err(DequeError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(deque.len(), 2, "Rejected push must not change the deque");
    assert_eq!(deque.pop_bottom(), Some('b'));
}

#[test]
fn test_stolen_slots_are_not_reused() {
    let deque = WorkStealingDeque::new(1);
    deque.push_bottom(1).unwrap();
    assert_eq!(deque.pop_top(), Some(1));
    assert_eq!(
        deque.push_bottom(2),
        Err(DequeError::CapacityExceeded { capacity: 1 }),
        "A drained single-use deque has no free slots left"
    );
}

#[test]
fn test_owner_reuses_slot_after_pop_bottom() {
    let deque = WorkStealingDeque::new(1);
    deque.push_bottom(1).unwrap();
    assert_eq!(deque.pop_bottom(), Some(1));
    deque.push_bottom(2).unwrap();
    assert_eq!(deque.pop_top(), Some(2));
}

#[test]
fn test_zero_capacity() {
    let deque = WorkStealingDeque::new(0);
    assert_eq!(
        deque.push_bottom(()),
        Err(DequeError::CapacityExceeded { capacity: 0 })
    );
    assert_eq!(deque.pop_bottom(), None);
}

#[test]
fn test_drop_releases_queued_tasks() {
    let token = Arc::new(());
    {
        let deque = WorkStealingDeque::new(4);
        for _ in 0..4 {
            deque.push_bottom(Arc::clone(&token)).unwrap();
        }
        drop(deque.pop_top());
        drop(deque.pop_bottom());
        assert_eq!(Arc::strong_count(&token), 3);
    }
    assert_eq!(Arc::strong_count(&token), 1, "Queued tasks leaked");
}

#[test]
fn test_boxed_tasks_run_once() {
    let counter = Mutex::new(0);
    let deque: WorkStealingDeque<Task<'_>> = WorkStealingDeque::new(3);
    for step in 1..=3 {
        let counter = &counter;
        deque
            .push_bottom(Box::new(move |_worker| *counter.lock() += step))
            .unwrap();
    }

    while let Some(task) = deque.pop_top() {
        task(1);
    }
    assert_eq!(*counter.lock(), 6);
}

// ==================== CONCURRENT BEHAVIOUR ====================

#[test]
fn test_concurrent_drain_delivers_every_task_once() {
    const TASKS: usize = 20_000;
    const THIEVES: usize = 4;

    let deque = WorkStealingDeque::new(TASKS);
    for i in 0..TASKS {
        deque.push_bottom(i).unwrap();
    }

    let taken = Mutex::new(Vec::with_capacity(TASKS));
    thread::scope(|scope| {
        for _ in 0..THIEVES {
            scope.spawn(|| {
                let mut local = Vec::new();
                while let Some(i) = deque.pop_top() {
                    local.push(i);
                }
                taken.lock().extend(local);
            });
        }

        let mut local = Vec::new();
        while let Some(i) = deque.pop_bottom() {
            local.push(i);
        }
        taken.lock().extend(local);
    });

    let mut taken = taken.into_inner();
    assert_eq!(taken.len(), TASKS, "Tasks were lost or duplicated");
    taken.sort_unstable();
    assert!(taken.iter().copied().eq(0..TASKS));
    assert!(deque.is_empty());
}

#[test]
fn test_owner_interleaves_with_thieves() {
    const TASKS: usize = 10_000;

    let deque = WorkStealingDeque::new(TASKS);
    let done = AtomicBool::new(false);
    let taken = Mutex::new(Vec::with_capacity(TASKS));

    thread::scope(|scope| {
        for _ in 0..3 {
            scope.spawn(|| {
                let mut local = Vec::new();
                loop {
                    match deque.pop_top() {
                        Some(i) => local.push(i),
                        None if done.load(Ordering::SeqCst) => break,
                        None => thread::yield_now(),
                    }
                }
                taken.lock().extend(local);
            });
        }

        let mut rng = StdRng::seed_from_u64(7);
        let mut local = Vec::new();
        for i in 0..TASKS {
            deque.push_bottom(i).unwrap();
            if rng.gen_bool(0.3) {
                local.extend(deque.pop_bottom());
            }
        }
        while let Some(i) = deque.pop_bottom() {
            local.push(i);
        }
        done.store(true, Ordering::SeqCst);
        taken.lock().extend(local);
    });

    let taken = taken.into_inner();
    let unique: HashSet<usize> = taken.iter().copied().collect();
    assert_eq!(taken.len(), TASKS, "Every task must be delivered exactly once");
    assert_eq!(unique.len(), TASKS);
}
