// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-wide UI flags.
//!
//! [`UiState`] is owned by the single page controller. Menu transitions
//! return the effects that keep the toggle button, the overlay, and the body
//! scroll lock in step.

use alloc::vec::Vec;

use crate::effect::{Effect, ElementId, Mutation};

/// Class marking the open menu and its toggle button.
pub const ACTIVE_CLASS: &str = "active";

/// Elements touched when the mobile menu opens or closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuElements {
    /// Hamburger button.
    pub toggle: ElementId,
    /// Full-screen overlay.
    pub menu: ElementId,
    /// Document body, scroll-locked while the menu is open.
    pub body: ElementId,
}

/// Page-wide UI state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    loading: bool,
    menu_open: bool,
    scroll_y: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// Initial state: loading, menu closed, at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            loading: true,
            menu_open: false,
            scroll_y: 0.0,
        }
    }

    /// Whether the loading screen is still up.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Marks loading as finished.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Whether the mobile menu is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Last recorded scroll position.
    #[must_use]
    pub const fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Records the scroll position.
    pub fn set_scroll(&mut self, y: f64) {
        self.scroll_y = y;
    }

    /// Flips the menu and returns the effects for the new state.
    pub fn toggle_menu(&mut self, elements: MenuElements) -> Vec<Effect> {
        self.menu_open = !self.menu_open;
        menu_effects(elements, self.menu_open)
    }

    /// Closes the menu. Returns no effects if it was already closed.
    pub fn close_menu(&mut self, elements: MenuElements) -> Vec<Effect> {
        if !self.menu_open {
            return Vec::new();
        }
        self.menu_open = false;
        menu_effects(elements, false)
    }

    /// Whether a resize to `viewport_width` should close the menu.
    #[must_use]
    pub fn should_close_on_resize(&self, viewport_width: f64, breakpoint: f64) -> bool {
        self.menu_open && viewport_width > breakpoint
    }
}

fn menu_effects(elements: MenuElements, open: bool) -> Vec<Effect> {
    let body = if open {
        Effect::style(elements.body, "overflow", "hidden")
    } else {
        Effect::now(elements.body, Mutation::RemoveStyle("overflow"))
    };
    alloc::vec![
        Effect::now(elements.toggle, Mutation::ToggleClass(ACTIVE_CLASS, open)),
        Effect::now(elements.menu, Mutation::ToggleClass(ACTIVE_CLASS, open)),
        body,
    ]
}
