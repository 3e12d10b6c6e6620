// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient notification banners.
//!
//! A banner is inserted off-screen, slides in shortly after, stays for its
//! lifetime, slides out, and is removed once the slide-out finishes. The
//! timeline is fixed; nothing cancels it.

use crate::config::TimingConfig;
use crate::time::Duration;

/// Banner flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Something worked.
    Success,
    /// Something was rejected.
    Error,
    /// Neutral information.
    #[default]
    Info,
}

impl NotificationKind {
    /// Background color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    /// Icon shown before the message.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{2705}",
            Self::Error => "\u{274c}",
            Self::Info => "\u{2139}\u{fe0f}",
        }
    }

    /// Class suffix (`notification-success`, ...).
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }
}

/// `transform` of a banner parked off-screen to the right.
pub const OFFSCREEN_TRANSFORM: &str = "translateX(400px)";

/// `transform` of a banner on screen.
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

/// Offsets from insertion at which a banner changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationTimeline {
    /// Slide in.
    pub enter: Duration,
    /// Slide out.
    pub leave: Duration,
    /// Remove from the document.
    pub remove: Duration,
}

impl NotificationTimeline {
    /// Builds the timeline from the configured durations.
    #[must_use]
    pub const fn from_config(timing: &TimingConfig) -> Self {
        Self {
            enter: timing.notification_enter,
            leave: timing.notification_lifetime,
            remove: timing
                .notification_lifetime
                .saturating_add(timing.notification_fade),
        }
    }
}

/// Inline style for a freshly inserted banner.
#[must_use]
pub fn banner_style(kind: NotificationKind) -> alloc::string::String {
    alloc::format!(
        "position: fixed; top: 2rem; right: 2rem; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.1); \
         z-index: 10000; transform: {OFFSCREEN_TRANSFORM}; \
         transition: transform 0.4s cubic-bezier(0.25, 0.46, 0.45, 0.94); \
         font-weight: 500; max-width: 400px;",
        kind.color()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timeline() {
        let t = NotificationTimeline::from_config(&TimingConfig::web());
        assert_eq!(t.enter.as_millis(), 100);
        assert_eq!(t.leave.as_millis(), 4000);
        assert_eq!(t.remove.as_millis(), 4400);
    }

    #[test]
    fn kinds_map_to_colors() {
        assert_eq!(NotificationKind::Error.color(), "#ef4444");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert!(banner_style(NotificationKind::Success).contains("background: #10b981;"));
        assert!(banner_style(NotificationKind::Info).contains(OFFSCREEN_TRANSFORM));
    }
}
