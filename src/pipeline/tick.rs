//! Deferred Tick Queue - "run this after the host's turn" scheduling.
//!
//! The host framework re-renders asynchronously after the events that
//! trigger us, so a few operations must run one tick later: deferred
//! region re-scans, post-composition selection capture, and post-blur
//! focus restoration.
//!
//! The queue is a plain thread-local FIFO. The embedding turn loop (or a
//! test) drains it with [`flush`] once the host has settled; callbacks
//! deferred while flushing run in the same drain, matching chained
//! zero-delay timers.

use std::cell::RefCell;
use std::collections::VecDeque;

thread_local! {
    static QUEUE: RefCell<VecDeque<Box<dyn FnOnce()>>> = RefCell::new(VecDeque::new());
}

/// Schedule `callback` for the next [`flush`].
pub fn defer(callback: impl FnOnce() + 'static) {
    QUEUE.with(|queue| {
        queue.borrow_mut().push_back(Box::new(callback));
    });
}

/// Number of callbacks currently waiting.
pub fn pending() -> usize {
    QUEUE.with(|queue| queue.borrow().len())
}

/// Run queued callbacks until the queue is empty, including callbacks
/// deferred by the callbacks themselves. Returns how many ran.
pub fn flush() -> usize {
    let mut ran = 0;
    loop {
        let next = QUEUE.with(|queue| queue.borrow_mut().pop_front());
        match next {
            Some(callback) => {
                callback();
                ran += 1;
            }
            None => return ran,
        }
    }
}

/// Drop all queued callbacks without running them (for testing).
pub fn reset_tick_state() {
    QUEUE.with(|queue| queue.borrow_mut().clear());
}

// =============================================================================
// Tests
// =============================================================================
