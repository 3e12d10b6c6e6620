// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-windowed rate limiting for high-frequency browser events.
//!
//! Both limiters are driven by explicit [`HostTime`] readings so the backend
//! decides where time comes from.
//!
//! - [`Throttle`] passes the first call of each window and drops the rest.
//! - [`Debounce`] passes one call once the input has been quiet for the wait
//!   period after the last trigger.

use crate::time::{Duration, HostTime};

/// Passes at most one call per window.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    window: Duration,
    reopens_at: Option<HostTime>,
}

impl Throttle {
    /// Creates an open throttle.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            reopens_at: None,
        }
    }

    /// Returns `true` if the call at `now` may run, and closes the window.
    pub fn try_acquire(&mut self, now: HostTime) -> bool {
        match self.reopens_at {
            Some(t) if now < t => false,
            _ => {
                self.reopens_at = Some(now.saturating_add(self.window));
                true
            }
        }
    }
}

/// Passes one call after a quiet period.
#[derive(Clone, Copy, Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<HostTime>,
}

impl Debounce {
    /// Creates an idle debounce.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Records a trigger at `now` and returns the new deadline.
    ///
    /// Any earlier pending deadline is replaced.
    pub fn trigger(&mut self, now: HostTime) -> HostTime {
        let deadline = now.saturating_add(self.wait);
        self.deadline = Some(deadline);
        deadline
    }

    /// Returns `true` once, when `now` has reached the latest deadline.
    pub fn fire(&mut self, now: HostTime) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` while a trigger is waiting to fire.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> HostTime {
        HostTime::from_millis(v)
    }

    #[test]
    fn throttle_passes_once_per_window() {
        let mut t = Throttle::new(Duration::from_millis(16));
        let passed: usize = (0..32_u64).filter(|&i| t.try_acquire(ms(i))).count();
        // Calls at 0 and 16 pass; every other millisecond is dropped.
        assert_eq!(passed, 2);
    }

    #[test]
    fn throttle_reopens_exactly_at_window_end() {
        let mut t = Throttle::new(Duration::from_millis(16));
        assert!(t.try_acquire(ms(100)));
        assert!(!t.try_acquire(ms(115)));
        assert!(t.try_acquire(ms(116)));
    }

    #[test]
    fn debounce_fires_once_after_last_trigger() {
        let mut d = Debounce::new(Duration::from_millis(250));
        d.trigger(ms(0));
        d.trigger(ms(100));
        let deadline = d.trigger(ms(200));
        assert_eq!(deadline, ms(450));

        assert!(!d.fire(ms(300)), "earlier deadlines were replaced");
        assert!(d.is_pending());
        assert!(d.fire(ms(450)));
        assert!(!d.fire(ms(460)), "fires only once");
        assert!(!d.is_pending());
    }

    #[test]
    fn debounce_idle_never_fires() {
        let mut d = Debounce::new(Duration::from_millis(250));
        assert!(!d.fire(ms(10_000)));
    }
}
