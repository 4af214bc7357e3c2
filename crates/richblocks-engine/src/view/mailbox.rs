use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single-slot mailbox where the newest value wins.
///
/// Producers [`post`](Self::post) from any thread; the consumer drains with
/// [`take`](Self::take) once per cycle. A value posted before the previous one
/// was taken replaces it. Share it between threads with an `Arc`.
#[derive(Debug)]
pub struct Mailbox<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Mailbox<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Stores `value`, dropping any value still pending.
    ///
    /// Returns true if a pending value was replaced.
    pub fn post(&self, value: T) -> bool {
        let replaced = self.lock().replace(value).is_some();
        if replaced {
            log::debug!("mailbox: replaced an unconsumed value");
        }
        replaced
    }

    /// Removes and returns the pending value, if any.
    pub fn take(&self) -> Option<T> {
        self.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_some()
    }

    // A panicking producer cannot leave the slot half-written, so a poisoned
    // lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
