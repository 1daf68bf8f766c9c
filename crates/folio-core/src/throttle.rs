//! Rate limiting for high-frequency browser events.
//!
//! Scroll events arrive far faster than layout needs to be recomputed.
//! [`RateLimiter`] lets at most one call through per interval: calls that
//! arrive early are dropped (never queued), and the first call after the
//! interval passes immediately and restarts the interval.
//!
//! There are no timers. Every check is a comparison against a [`Clock`],
//! so once the owner stops calling, nothing can fire later.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use folio_core::throttle::{ManualClock, RateLimiter};
//!
//! let clock = ManualClock::new();
//! let mut limiter = RateLimiter::new(Duration::from_millis(50), clock.clone());
//!
//! assert!(limiter.try_acquire());
//! clock.advance(Duration::from_millis(10));
//! assert!(!limiter.try_acquire());
//! clock.advance(Duration::from_millis(40));
//! assert!(limiter.try_acquire());
//! ```

use std::{cell::Cell, rc::Rc, time::Duration};

/// A monotonic time source.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give the
/// other to the code under test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Drops calls that arrive within `interval` of the last accepted one.
#[derive(Debug, Clone)]
pub struct RateLimiter<C> {
    interval: Duration,
    last_accepted: Option<Duration>,
    clock: C,
}

impl<C: Clock> RateLimiter<C> {
    pub fn new(interval: Duration, clock: C) -> Self {
        Self {
            interval,
            last_accepted: None,
            clock,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check whether a call may run now, recording it if so.
    pub fn try_acquire(&mut self) -> bool {
        let now = self.clock.now();
        if let Some(last) = self.last_accepted {
            if now.saturating_sub(last) < self.interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    /// Run `f` if a call may run now; `None` when the call was dropped.
    pub fn call<R>(&mut self, f: impl FnOnce() -> R) -> Option<R> {
        self.try_acquire().then(f)
    }

    /// Forget the last accepted call; the next call passes.
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(50);

    fn limiter() -> (ManualClock, RateLimiter<ManualClock>) {
        let clock = ManualClock::new();
        let limiter = RateLimiter::new(INTERVAL, clock.clone());
        (clock, limiter)
    }

    #[test]
    fn test_first_call_passes() {
        let (_clock, mut limiter) = limiter();
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_burst_within_interval_passes_once() {
        let (clock, mut limiter) = limiter();
        let mut accepted = 0;
        for _ in 0..20 {
            if limiter.try_acquire() {
                accepted += 1;
            }
            clock.advance(Duration::from_millis(2));
        }
        assert_eq!(accepted, 1);
    }

    #[test]
    fn test_spaced_calls_all_pass() {
        let (clock, mut limiter) = limiter();
        for _ in 0..5 {
            assert!(limiter.try_acquire());
            clock.advance(Duration::from_millis(60));
        }
    }

    #[test]
    fn test_exact_interval_passes() {
        let (clock, mut limiter) = limiter();
        assert!(limiter.try_acquire());
        clock.advance(INTERVAL);
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_dropped_calls_do_not_extend_interval() {
        let (clock, mut limiter) = limiter();
        assert!(limiter.try_acquire());
        clock.advance(Duration::from_millis(30));
        assert!(!limiter.try_acquire());
        clock.advance(Duration::from_millis(20));
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_call_runs_only_accepted_callbacks() {
        let (clock, mut limiter) = limiter();
        let mut runs = 0;
        assert_eq!(limiter.call(|| { runs += 1; runs }), Some(1));
        assert_eq!(limiter.call(|| { runs += 1; runs }), None);
        clock.advance(INTERVAL);
        assert_eq!(limiter.call(|| { runs += 1; runs }), Some(2));
        assert_eq!(runs, 2);
    }

    #[test]
    fn test_reset_lets_next_call_through() {
        let (_clock, mut limiter) = limiter();
        assert!(limiter.try_acquire());
        assert!(!limiter.try_acquire());
        limiter.reset();
        assert!(limiter.try_acquire());
    }

    #[test]
    fn test_clock_going_backwards_is_treated_as_no_time() {
        let (clock, mut limiter) = limiter();
        clock.set(Duration::from_secs(10));
        assert!(limiter.try_acquire());
        clock.set(Duration::from_secs(5));
        assert!(!limiter.try_acquire());
    }
}
