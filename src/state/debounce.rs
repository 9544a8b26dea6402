//! Debounced invocation (pure, host-driven).
//!
//! A [`Debouncer`] holds at most one pending value together with the
//! instant it becomes due. The host event loop passes the current time
//! into every call; nothing here spawns threads or sleeps.
//!
//! - `fire` replaces any pending value and restarts the quiet period
//! - `poll` hands the value out once its deadline has passed
//! - `cancel` (or dropping the owner) discards the pending value
//!
//! A zero delay still defers: the value only comes out of a later `poll`,
//! never out of the `fire` call itself.
//!
//! [`debounce`] is the general callback form: it binds an `FnMut` to its own
//! timer. `SearchController` owns a bare `Debouncer<String>` instead, since
//! committing a term mutates the controller itself.

use std::time::{Duration, Instant};
use tracing::trace;

// ===== Debouncer =====

/// Single-slot debounce timer.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Create an idle debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Quiet period required before a fired value comes due.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, superseding whatever was pending.
    ///
    /// Returns `true` if a pending value was discarded.
    pub fn fire(&mut self, value: T, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        if superseded {
            trace!("debounce: superseding pending value");
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        superseded
    }

    /// Take the pending value if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => {
                self.pending.take().map(|pending| pending.value)
            }
            _ => None,
        }
    }

    /// Discard the pending value, returning it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|pending| pending.value)
    }

    /// Whether a value is waiting for its quiet period to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value comes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left until the pending value comes due (zero if already due).
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

// ===== Debounced =====

/// A callback bound to its own [`Debouncer`].
///
/// Created with [`debounce`]. The callback runs from [`Debounced::tick`]
/// with the argument of the latest non-superseded [`Debounced::fire`].
/// Dropping the value tears it down: a pending invocation never runs.
pub struct Debounced<T, F>
where
    F: FnMut(T),
{
    timer: Debouncer<T>,
    callback: F,
}

/// Bind `callback` to a fresh debouncer with the given quiet period.
pub fn debounce<T, F>(callback: F, delay: Duration) -> Debounced<T, F>
where
    F: FnMut(T),
{
    Debounced {
        timer: Debouncer::new(delay),
        callback,
    }
}

impl<T, F> Debounced<T, F>
where
    F: FnMut(T),
{
    /// Schedule an invocation with `value`, canceling the pending one.
    pub fn fire(&mut self, value: T, now: Instant) {
        self.timer.fire(value, now);
    }

    /// Run the callback if the pending invocation is due.
    ///
    /// Returns `true` if the callback ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.timer.poll(now) {
            Some(value) => {
                (self.callback)(value);
                true
            }
            None => false,
        }
    }

    /// Drop the pending invocation without running it.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Whether an invocation is scheduled.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Instant at which the scheduled invocation comes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }
}

impl<T, F> Drop for Debounced<T, F>
where
    F: FnMut(T),
{
    fn drop(&mut self) {
        if self.timer.cancel().is_some() {
            trace!("debounce: pending invocation dropped on teardown");
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
