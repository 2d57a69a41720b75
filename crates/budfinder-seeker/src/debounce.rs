//! Debouncing of search-term edits.
//!
//! A [`Debouncer`] holds at most one pending value. Scheduling a new value
//! replaces the pending one and restarts the quiet window, so only the last
//! edit of a burst is ever delivered. Time is read through a [`Clock`], which
//! lets tests drive the window with a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::trace;

/// Quiet window applied to search-term edits unless configured otherwise.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Monotonic time source.
pub trait Clock {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Manually advanced clock.
///
/// Clones share the same time, so a test can keep one handle and give another
/// to the engine.
///
/// ```
/// use std::time::Duration;
/// use budfinder_seeker::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let engine_side = clock.clone();
/// clock.advance(Duration::from_millis(120));
/// assert_eq!(engine_side.now(), Duration::from_millis(120));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        ManualClock::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves time forward by a number of milliseconds.
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

/// Cancellable single-slot deferred value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedules `value` for delivery once `window` has passed without another
    /// call to `schedule`. Any previously pending value is dropped.
    pub fn schedule(&mut self, value: T, now: Duration) {
        let deadline = now + self.window;
        if self.pending.is_some() {
            trace!(?deadline, "debounce rescheduled");
        } else {
            trace!(?deadline, "debounce scheduled");
        }
        self.pending = Some(Pending { value, deadline });
    }

    /// Returns the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => {
                trace!(?now, "debounce fired");
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }

    /// Drops the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        let cancelled = self.pending.take().map(|p| p.value);
        if cancelled.is_some() {
            trace!("debounce cancelled");
        }
        cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due, if there is one.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Debouncer::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_after_window() {
        let mut d = Debouncer::new(ms(300));
        d.schedule("og", ms(0));

        assert_eq!(d.poll(ms(299)), None);
        assert_eq!(d.poll(ms(300)), Some("og"));
        assert!(!d.is_pending());
        assert_eq!(d.poll(ms(900)), None);
    }

    #[test]
    fn reschedule_keeps_only_last_value() {
        let mut d = Debouncer::new(ms(300));
        d.schedule("o", ms(0));
        d.schedule("og", ms(100));
        d.schedule("og k", ms(250));

        assert_eq!(d.poll(ms(400)), None);
        assert_eq!(d.deadline(), Some(ms(550)));
        assert_eq!(d.poll(ms(550)), Some("og k"));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Debouncer::new(ms(300));
        d.schedule(1, ms(0));
        assert_eq!(d.cancel(), Some(1));
        assert_eq!(d.poll(ms(1000)), None);
        assert_eq!(d.cancel(), None);
    }

    #[test]
    fn manual_clock_is_shared() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance_ms(300);
        other.advance_ms(5);
        assert_eq!(clock.now(), ms(305));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
