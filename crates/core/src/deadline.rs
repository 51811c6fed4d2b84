//! Caller-imposed deadlines.
//!
//! A [`Deadline`] travels with every ledger call. The store layer bounds
//! each I/O step by it, so an expired request abandons (and rolls back)
//! its work instead of holding a transaction open.

use std::time::{Duration, Instant};

/// An optional point in time after which work should be abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No deadline: operations may take as long as the store does.
    pub const NONE: Self = Self(None);

    /// A deadline `timeout` from now.
    ///
    /// Falls back to no deadline if `timeout` overflows the clock.
    #[must_use]
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now().checked_add(timeout))
    }

    /// A deadline at a fixed instant.
    #[must_use]
    pub const fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// The instant, if any.
    #[must_use]
    pub const fn instant(&self) -> Option<Instant> {
        self.0
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_expires() {
        assert!(!Deadline::NONE.is_expired());
        assert_eq!(Deadline::default(), Deadline::NONE);
    }

    #[test]
    fn test_after_is_in_the_future() {
        let deadline = Deadline::after(Duration::from_secs(60));
        assert!(!deadline.is_expired());
        assert!(deadline.instant().unwrap() > Instant::now() + Duration::from_secs(50));
    }

    #[test]
    fn test_past_instant_is_expired() {
        let deadline = Deadline::at(Instant::now());
        std::thread::sleep(Duration::from_millis(2));
        assert!(deadline.is_expired());
    }

    #[test]
    fn test_overflowing_timeout_is_unbounded() {
        assert_eq!(Deadline::after(Duration::MAX), Deadline::NONE);
    }
}
