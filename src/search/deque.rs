// Lock-free work-stealing deque
//
// Bounded Chase-Lev style deque. The owning worker pushes and pops at the
// bottom (LIFO); any other thread steals from the top (FIFO). Indices never
// wrap, so the capacity bounds every push the deque will ever receive.
// A slot is rewritten only at the owner's end, after `pop_bottom` has moved
// `bottom` back over it. Slots below `top` are never written again, so a
// thief's stale read of slot `top` can only lose the CAS that follows it.
//
// Ownership of a task moves with the successful CAS on `top` (thieves, and
// the owner when racing for the last task) or with the decrement of
// `bottom` (owner, when no thief can reach the slot).

use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

use super::error::DequeError;

pub struct WorkStealingDeque<T> {
    slots: Box<[AtomicPtr<T>]>,
    /// Next slot a thief takes
    top: AtomicUsize,
    /// Next free slot; only the owner moves it
    bottom: AtomicUsize,
    _marker: PhantomData<T>,
}

// SAFETY: tasks are handed between threads by value, and every slot is
// taken by exactly one thread (see the ownership rules above).
unsafe impl<T: Send> Send for WorkStealingDeque<T> {}
unsafe impl<T: Send> Sync for WorkStealingDeque<T> {}

impl<T> WorkStealingDeque<T> {
    /// Creates a deque that accepts at most `capacity` pushes over its lifetime.
    pub fn new(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| AtomicPtr::new(ptr::null_mut()))
            .collect();
        Self {
            slots,
            top: AtomicUsize::new(0),
            bottom: AtomicUsize::new(0),
            _marker: PhantomData,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tasks currently queued. Only a snapshot under concurrency.
    pub fn len(&self) -> usize {
        let bottom = self.bottom.load(Ordering::SeqCst);
        let top = self.top.load(Ordering::SeqCst);
        bottom.saturating_sub(top)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owner only. Publishes `task` at the bottom of the deque.
    pub fn push_bottom(&self, task: T) -> Result<(), DequeError> {
        let bottom = self.bottom.load(Ordering::Relaxed);
        let slot = self.slots.get(bottom).ok_or(DequeError::CapacityExceeded {
            capacity: self.capacity(),
        })?;

        slot.store(Box::into_raw(Box::new(task)), Ordering::Release);
        self.bottom.store(bottom + 1, Ordering::SeqCst);
        Ok(())
    }

    /// Owner only. Takes the most recently pushed task.
    pub fn pop_bottom(&self) -> Option<T> {
        if self.bottom.load(Ordering::Relaxed) == 0 {
            return None;
        }

        let bottom = self.bottom.fetch_sub(1, Ordering::SeqCst) - 1;
        let top = self.top.load(Ordering::SeqCst);

        if top > bottom {
            // Already empty, undo the reservation
            self.bottom.store(top, Ordering::SeqCst);
            return None;
        }

        let task = self.slots[bottom].load(Ordering::Acquire);
        if top < bottom {
            // SAFETY: thieves stop at `bottom`, so this slot is ours alone
            return Some(unsafe { *Box::from_raw(task) });
        }

        // Last task: race the thieves for it
        let won = self
            .top
            .compare_exchange(top, top + 1, Ordering::SeqCst, Ordering::Relaxed)
            .is_ok();
        self.bottom.store(top + 1, Ordering::SeqCst);

        // SAFETY: winning the CAS transfers ownership of the slot
        won.then(|| unsafe { *Box::from_raw(task) })
    }

    /// Any thread. Takes the oldest task.
    pub fn pop_top(&self) -> Option<T> {
        loop {
            let top = self.top.load(Ordering::SeqCst);
            let bottom = self.bottom.load(Ordering::SeqCst);
            if top >= bottom {
                return None;
            }

            // Read before the CAS; after it the slot may belong to someone else
            let task = self.slots[top].load(Ordering::Acquire);
            debug_assert!(!task.is_null(), "slot {} read before it was published", top);

            if self
                .top
                .compare_exchange(top, top + 1, Ordering::SeqCst, Ordering::Relaxed)
                .is_ok()
            {
                // SAFETY: winning the CAS transfers ownership of the slot
                return Some(unsafe { *Box::from_raw(task) });
            }
        }
    }
}

impl<T> Drop for WorkStealingDeque<T> {
    fn drop(&mut self) {
        let top = *self.top.get_mut();
        let bottom = *self.bottom.get_mut();

        for slot in self.slots.iter_mut().take(bottom).skip(top) {
            let task = *slot.get_mut();
            if !task.is_null() {
                // SAFETY: tasks in [top, bottom) were published and never taken
                drop(unsafe { Box::from_raw(task) });
            }
        }
    }
}
