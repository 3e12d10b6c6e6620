// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing and geometry constants.
//!
//! The page has no runtime configuration source; these structs are the only
//! knobs. [`FolioConfig::web`] returns the values the markup and stylesheet
//! were tuned against.

use crate::time::Duration;

/// Timer durations for every scheduled effect on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingConfig {
    /// How long the loading screen stays up before fading.
    pub loading_hold: Duration,
    /// Length of the loading screen fade before it is hidden.
    pub loading_fade: Duration,
    /// Per-index delay for work items and skill categories.
    pub grid_stagger: Duration,
    /// Per-index delay for tags inside a skill category.
    pub tag_stagger: Duration,
    /// Per-index delay for hero title lines during the entrance.
    pub title_stagger: Duration,
    /// Length of an anchor smooth scroll.
    pub smooth_scroll: Duration,
    /// Delay before a freshly inserted notification slides in.
    pub notification_enter: Duration,
    /// How long a notification stays before sliding out.
    pub notification_lifetime: Duration,
    /// Length of the notification slide-out before removal.
    pub notification_fade: Duration,
    /// Simulated network delay for the contact form.
    pub form_submit_delay: Duration,
    /// Minimum interval between scroll handler runs.
    pub scroll_throttle: Duration,
    /// Quiet period before the resize handler runs.
    pub resize_debounce: Duration,
}

impl TimingConfig {
    /// Default timings for the web build.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            loading_hold: Duration::from_millis(2500),
            loading_fade: Duration::from_millis(800),
            grid_stagger: Duration::from_millis(200),
            tag_stagger: Duration::from_millis(50),
            title_stagger: Duration::from_millis(200),
            smooth_scroll: Duration::from_millis(1000),
            notification_enter: Duration::from_millis(100),
            notification_lifetime: Duration::from_millis(4000),
            notification_fade: Duration::from_millis(400),
            form_submit_delay: Duration::from_millis(1500),
            scroll_throttle: Duration::from_millis(16),
            resize_debounce: Duration::from_millis(250),
        }
    }
}

/// Parameters for the viewport-intersection primitive driving reveals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible (0.0–1.0).
    pub threshold: f64,
    /// CSS margin applied to the root viewport. Negative values shrink it.
    pub root_margin: &'static str,
    /// Delay between successive grid items.
    pub grid_stagger: Duration,
    /// Delay between successive tags within one skill category.
    pub tag_stagger: Duration,
}

impl RevealConfig {
    /// Default reveal parameters for the web build.
    #[must_use]
    pub const fn web() -> Self {
        let timing = TimingConfig::web();
        Self {
            threshold: 0.1,
            root_margin: "-50px 0px",
            grid_stagger: timing.grid_stagger,
            tag_stagger: timing.tag_stagger,
        }
    }
}

/// Scroll, cursor, and layout geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Fraction of the remaining distance the cursor covers per frame.
    pub cursor_follow: f64,
    /// Scroll multiplier for the hero background.
    pub hero_bg_rate: f64,
    /// Scroll multiplier for the hero content.
    pub hero_content_rate: f64,
    /// Scroll depth (px) below which the navbar is always shown.
    pub navbar_hide_after: f64,
    /// Height (px) kept clear above an anchor target after smooth scrolling.
    pub anchor_offset: f64,
    /// Look-ahead (px) used when deciding which section is active.
    pub active_link_offset: f64,
    /// Viewport width (px) above which the mobile menu is closed on resize.
    pub mobile_breakpoint: f64,
}

impl MotionConfig {
    /// Default geometry for the web build.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            cursor_follow: 0.1,
            hero_bg_rate: -0.5,
            hero_content_rate: -0.2,
            navbar_hide_after: 100.0,
            anchor_offset: 80.0,
            active_link_offset: 100.0,
            mobile_breakpoint: 768.0,
        }
    }
}

/// All page configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FolioConfig {
    /// Timer durations.
    pub timing: TimingConfig,
    /// Reveal observer parameters.
    pub reveal: RevealConfig,
    /// Scroll and cursor geometry.
    pub motion: MotionConfig,
}

impl FolioConfig {
    /// Default configuration for the web build.
    #[must_use]
    pub const fn web() -> Self {
        Self {
            timing: TimingConfig::web(),
            reveal: RevealConfig::web(),
            motion: MotionConfig::web(),
        }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self::web()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_stagger_tracks_timing() {
        let cfg = FolioConfig::web();
        assert_eq!(cfg.reveal.grid_stagger, cfg.timing.grid_stagger);
        assert_eq!(cfg.reveal.tag_stagger, cfg.timing.tag_stagger);
    }

    #[test]
    fn rate_limit_windows() {
        let timing = TimingConfig::web();
        assert_eq!(timing.scroll_throttle.as_millis(), 16);
        assert_eq!(timing.resize_debounce.as_millis(), 250);
    }
}
