// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven motion: smooth anchor scrolling, cursor follow, parallax.
//!
//! Everything here is advanced from `requestAnimationFrame` callbacks. None of
//! it holds timers; a [`SmoothScroll`] finishes by itself once its duration
//! has elapsed.

use alloc::format;
use alloc::string::String;

use crate::config::MotionConfig;
use crate::time::{Duration, HostTime};

/// Quartic ease-in-out.
///
/// `t` is elapsed time, `begin` the start value, `change` the total change,
/// and `duration` the total time, all in the same units.
#[must_use]
pub fn ease_in_out_quart(t: f64, begin: f64, change: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return begin + change;
    }
    let mut t = t / (duration / 2.0);
    if t < 1.0 {
        return change / 2.0 * t * t * t * t + begin;
    }
    t -= 2.0;
    -change / 2.0 * (t * t * t * t - 2.0) + begin
}

/// Vertical scroll target for an anchor at `element_top`, leaving room for the
/// fixed navbar.
#[must_use]
pub fn anchor_scroll_target(element_top: f64, motion: &MotionConfig) -> f64 {
    element_top - motion.anchor_offset
}

/// One frame of a [`SmoothScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Scroll position to apply this frame.
    pub y: f64,
    /// `true` on the final frame; no further frame should be requested.
    pub finished: bool,
}

/// An eased scroll from one position to another.
#[derive(Clone, Copy, Debug)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    duration: Duration,
    started_at: Option<HostTime>,
}

impl SmoothScroll {
    /// Creates a scroll that starts on its first sampled frame.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
        }
    }

    /// Returns the target position.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }

    /// Samples the scroll at frame time `now`.
    ///
    /// The first call anchors the start time. Once `duration` has elapsed the
    /// sample lands exactly on the target and reports `finished`.
    pub fn sample(&mut self, now: HostTime) -> ScrollSample {
        let start = *self.started_at.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= self.duration {
            return ScrollSample {
                y: self.to,
                finished: true,
            };
        }
        let y = ease_in_out_quart(
            elapsed.as_millis_f64(),
            self.from,
            self.to - self.from,
            self.duration.as_millis_f64(),
        );
        ScrollSample { y, finished: false }
    }
}

/// A custom cursor that trails the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    factor: f64,
    target: (f64, f64),
    position: (f64, f64),
}

impl CursorFollower {
    /// Creates a follower at the origin that covers `factor` of the remaining
    /// distance each frame.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self {
            factor,
            target: (0.0, 0.0),
            position: (0.0, 0.0),
        }
    }

    /// Records the latest pointer position.
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
    }

    /// Advances one frame and returns the new position.
    pub fn step(&mut self) -> (f64, f64) {
        let (tx, ty) = self.target;
        let (x, y) = &mut self.position;
        *x += (tx - *x) * self.factor;
        *y += (ty - *y) * self.factor;
        self.position
    }

    /// CSS `transform` value for the current position.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.0, self.position.1)
    }
}

/// Vertical offsets for the hero layers at a scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOffsets {
    /// Hero background offset (px).
    pub background: f64,
    /// Hero content offset (px).
    pub content: f64,
}

impl ParallaxOffsets {
    /// CSS `transform` for a vertical offset.
    #[must_use]
    pub fn css_transform(offset: f64) -> String {
        format!("translate3d(0, {offset}px, 0)")
    }
}

/// Coalesces scroll events into at most one pending parallax frame.
#[derive(Clone, Copy, Debug)]
pub struct Parallax {
    background_rate: f64,
    content_rate: f64,
    ticking: bool,
}

impl Parallax {
    /// Creates a parallax controller with the configured rates.
    #[must_use]
    pub const fn new(motion: &MotionConfig) -> Self {
        Self {
            background_rate: motion.hero_bg_rate,
            content_rate: motion.hero_content_rate,
            ticking: false,
        }
    }

    /// Returns `true` if the caller should request an animation frame.
    ///
    /// Returns `false` while a frame is already pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Computes offsets for the pending frame and clears the pending flag.
    pub fn complete(&mut self, scroll_y: f64) -> ParallaxOffsets {
        self.ticking = false;
        self.offsets(scroll_y)
    }

    /// Offsets at `scroll_y`.
    #[must_use]
    pub fn offsets(&self, scroll_y: f64) -> ParallaxOffsets {
        ParallaxOffsets {
            background: scroll_y * self.background_rate,
            content: scroll_y * self.content_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(close(ease_in_out_quart(0.0, 10.0, 100.0, 1000.0), 10.0));
        assert!(close(ease_in_out_quart(500.0, 10.0, 100.0, 1000.0), 60.0));
        assert!(close(ease_in_out_quart(1000.0, 10.0, 100.0, 1000.0), 110.0));
    }

    #[test]
    fn easing_is_slow_at_the_edges() {
        let early = ease_in_out_quart(100.0, 0.0, 100.0, 1000.0);
        let late = ease_in_out_quart(900.0, 0.0, 100.0, 1000.0);
        assert!(early < 1.0, "got {early}");
        assert!(late > 99.0, "got {late}");
    }

    #[test]
    fn smooth_scroll_anchors_on_first_frame_and_terminates() {
        let mut scroll = SmoothScroll::new(0.0, 800.0, Duration::from_millis(1000));
        let first = scroll.sample(HostTime::from_millis(5000));
        assert_eq!(first, ScrollSample { y: 0.0, finished: false });

        let mid = scroll.sample(HostTime::from_millis(5500));
        assert!(close(mid.y, 400.0), "got {}", mid.y);
        assert!(!mid.finished);

        let last = scroll.sample(HostTime::from_millis(6016));
        assert_eq!(last, ScrollSample { y: 800.0, finished: true });
    }

    #[test]
    fn smooth_scroll_upwards() {
        let mut scroll = SmoothScroll::new(1200.0, 200.0, Duration::from_millis(1000));
        scroll.sample(HostTime::ZERO);
        let mid = scroll.sample(HostTime::from_millis(500));
        assert!(close(mid.y, 700.0), "got {}", mid.y);
    }

    #[test]
    fn anchor_target_clears_navbar() {
        assert!(close(anchor_scroll_target(1000.0, &MotionConfig::web()), 920.0));
    }

    #[test]
    fn cursor_covers_a_tenth_per_frame() {
        let mut cursor = CursorFollower::new(0.1);
        cursor.set_target(100.0, 50.0);
        let (x, y) = cursor.step();
        assert!(close(x, 10.0) && close(y, 5.0));
        let (x, _) = cursor.step();
        assert!(close(x, 19.0));
        assert_eq!(cursor.css_transform(), "translate(19px, 9.5px)");
    }

    #[test]
    fn parallax_coalesces_requests() {
        let mut p = Parallax::new(&MotionConfig::web());
        assert!(p.request());
        assert!(!p.request());
        let offsets = p.complete(200.0);
        assert!(close(offsets.background, -100.0));
        assert!(close(offsets.content, -40.0));
        assert!(p.request(), "completing re-arms the request");
        assert_eq!(ParallaxOffsets::css_transform(-100.0), "translate3d(0, -100px, 0)");
    }
}
