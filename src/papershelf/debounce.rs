//! # Debouncing
//!
//! A [`Debouncer`] holds at most one pending value and the instant at which it becomes
//! due. Scheduling again replaces the value and pushes the deadline out, so a burst of
//! inputs collapses into a single delivery once the input goes quiet for a full window.
//!
//! The clock is passed in by the caller. Nothing here sleeps or spawns; whoever owns
//! the debouncer decides when to [`poll`](Debouncer::poll) it.

use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arms the timer with `value`, superseding anything already pending.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.window,
        });
    }

    /// Returns the pending value if its window has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.due => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Returns the pending value right away, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// Drops the pending value. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_after_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule("graph", start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + WINDOW), Some("graph"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + WINDOW * 2), None);
    }

    #[test]
    fn test_burst_coalesces_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        for (i, query) in ["g", "gr", "gra", "grap", "graph"].into_iter().enumerate() {
            let at = start + Duration::from_millis(100 * i as u64);
            assert_eq!(debouncer.poll(at), None);
            debouncer.schedule(query, at);
        }

        let last_keystroke = start + Duration::from_millis(400);
        assert_eq!(debouncer.poll(last_keystroke + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(last_keystroke + WINDOW), Some("graph"));
    }

    #[test]
    fn test_flush_and_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WINDOW);

        debouncer.schedule(1, start);
        assert_eq!(debouncer.due_at(), Some(start + WINDOW));
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.flush(), None);

        debouncer.schedule(2, start);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(start + WINDOW), None);
    }
}
