// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monotonic page time.
//!
//! [`HostTime`] is a point in time in microsecond ticks since page load, as
//! read from `performance.now()` or a `requestAnimationFrame` timestamp.
//! [`Duration`] is a span in the same units.
//!
//! Every timing constant on the page is a whole number of milliseconds, so
//! both types offer millisecond constructors and accessors.

use core::fmt;
use core::ops::{Add, Mul, Sub};

/// A point in time as microseconds since page load.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct HostTime(pub u64);

impl HostTime {
    /// Page load.
    pub const ZERO: Self = Self(0);

    /// Returns the raw tick value in microseconds.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Creates a [`HostTime`] from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Creates a [`HostTime`] from a `DOMHighResTimeStamp` in milliseconds.
    ///
    /// Negative and non-finite inputs clamp to zero.
    #[inline]
    #[must_use]
    pub fn from_millis_f64(ms: f64) -> Self {
        if !(ms.is_finite() && ms > 0.0) {
            return Self::ZERO;
        }
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "timestamp is finite and positive; µs fits in u64"
        )]
        let us = (ms * 1000.0) as u64;
        Self(us)
    }

    /// Returns this time in fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the duration between `self` and an earlier time, or zero if
    /// `earlier` is after `self`.
    #[inline]
    #[must_use]
    pub const fn saturating_duration_since(self, earlier: Self) -> Duration {
        Duration(self.0.saturating_sub(earlier.0))
    }

    /// Saturating addition of a duration.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, duration: Duration) -> Self {
        Self(self.0.saturating_add(duration.0))
    }
}

impl Add<Duration> for HostTime {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Duration) -> Self {
        self.saturating_add(rhs)
    }
}

/// Elapsed time, zero if `rhs` is later than `self`.
impl Sub for HostTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Duration {
        self.saturating_duration_since(rhs)
    }
}

impl fmt::Debug for HostTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostTime({}µs)", self.0)
    }
}

/// A span of time in microseconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(pub u64);

impl Duration {
    /// A zero-length duration.
    pub const ZERO: Self = Self(0);

    /// Creates a duration from whole milliseconds.
    #[inline]
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms.saturating_mul(1000))
    }

    /// Returns the raw tick value in microseconds.
    #[inline]
    #[must_use]
    pub const fn ticks(self) -> u64 {
        self.0
    }

    /// Returns the duration in whole milliseconds, rounded down.
    #[inline]
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0 / 1000
    }

    /// Returns the duration in fractional milliseconds.
    #[inline]
    #[must_use]
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the delay as an `i32` millisecond count for `setTimeout`,
    /// saturating at `i32::MAX`.
    #[inline]
    #[must_use]
    pub fn as_timeout_millis(self) -> i32 {
        i32::try_from(self.as_millis()).unwrap_or(i32::MAX)
    }

    /// Saturating addition.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Duration {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Mul<u32> for Duration {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(rhs)))
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}µs)", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_constructors_agree() {
        assert_eq!(HostTime::from_millis(16), HostTime(16_000));
        assert_eq!(Duration::from_millis(250).ticks(), 250_000);
        assert_eq!(Duration::from_millis(250).as_millis(), 250);
    }

    #[test]
    fn dom_timestamp_conversion() {
        assert_eq!(HostTime::from_millis_f64(16.5), HostTime(16_500));
        assert_eq!(HostTime::from_millis_f64(-3.0), HostTime::ZERO);
        assert_eq!(HostTime::from_millis_f64(f64::NAN), HostTime::ZERO);
    }

    #[test]
    fn duration_since_saturates() {
        let early = HostTime::from_millis(10);
        let late = HostTime::from_millis(30);
        assert_eq!(late.saturating_duration_since(early), Duration::from_millis(20));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn operators_saturate() {
        let early = HostTime::from_millis(10);
        let late = HostTime::from_millis(30);
        assert_eq!(late - early, Duration::from_millis(20));
        assert_eq!(early - late, Duration::ZERO);
        assert_eq!(HostTime(u64::MAX) + Duration::from_millis(1), HostTime(u64::MAX));
        assert_eq!(Duration(u64::MAX) + Duration(1), Duration(u64::MAX));
    }

    #[test]
    fn index_scaling() {
        assert_eq!(Duration::from_millis(200) * 3, Duration::from_millis(600));
    }

    #[test]
    fn timeout_millis_saturates() {
        assert_eq!(Duration::from_millis(1500).as_timeout_millis(), 1500);
        assert_eq!(Duration(u64::MAX).as_timeout_millis(), i32::MAX);
    }
}
