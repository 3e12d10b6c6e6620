// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navbar auto-hide and active-section tracking.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::MotionConfig;
use crate::effect::{Effect, ElementId, Mutation};
use crate::ui::ACTIVE_CLASS;

/// Where the navbar should sit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavbarPosition {
    /// Fully visible.
    Shown,
    /// Slid up out of view.
    Hidden,
}

impl NavbarPosition {
    /// CSS `transform` value for this position.
    #[must_use]
    pub const fn css_transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the navbar while scrolling down past a threshold, shows it while
/// scrolling up.
#[derive(Clone, Copy, Debug)]
pub struct NavbarAutoHide {
    hide_after: f64,
    last_y: f64,
}

impl NavbarAutoHide {
    /// Creates a tracker with the configured threshold.
    #[must_use]
    pub const fn new(motion: &MotionConfig) -> Self {
        Self {
            hide_after: motion.navbar_hide_after,
            last_y: 0.0,
        }
    }

    /// Records a scroll position and returns the navbar position for it.
    pub fn update(&mut self, y: f64) -> NavbarPosition {
        let position = if y > self.hide_after && y > self.last_y {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Shown
        };
        self.last_y = y;
        position
    }
}

/// Vertical extent of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    /// Section height.
    pub height: f64,
}

impl SectionBounds {
    /// Returns `true` if `y` lies within `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section whose link should be marked active at `scroll_y`.
///
/// Looks `active_link_offset` below the scroll position. When sections
/// overlap, the last match in document order wins.
#[must_use]
pub fn active_section(
    sections: &[SectionBounds],
    scroll_y: f64,
    motion: &MotionConfig,
) -> Option<usize> {
    let look_ahead = scroll_y + motion.active_link_offset;
    sections.iter().rposition(|s| s.contains(look_ahead))
}

/// Returns the fragment id of an in-page anchor href (`"#work"` → `"work"`).
///
/// Returns `None` for external links and a bare `"#"`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// A navigation link and the href it points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    /// The link element.
    pub id: ElementId,
    /// Its `href` attribute.
    pub href: String,
}

/// Marks the links pointing at `href` active and every other link inactive.
#[must_use]
pub fn highlight_links(links: &[NavLink], href: &str) -> Vec<Effect> {
    links
        .iter()
        .map(|link| {
            Effect::now(
                link.id,
                Mutation::ToggleClass(ACTIVE_CLASS, link.href == href),
            )
        })
        .collect()
}
