// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation effects.
//!
//! Controllers never touch the DOM. They return [`Effect`]s naming an
//! [`ElementId`], a [`Mutation`], and a delay; a
//! [`Presenter`](crate::backend::Presenter) applies them, scheduling the
//! delayed ones on a timer.

use alloc::string::String;
use core::fmt;

use crate::time::Duration;

/// Handle for a DOM element registered with a presenter.
///
/// Backends assign these as slot indices; core treats them as opaque.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Returns the slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// A single change to an element's class list or inline style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    /// Adds a class.
    AddClass(&'static str),
    /// Removes a class.
    RemoveClass(&'static str),
    /// Adds the class when `true`, removes it when `false`.
    ToggleClass(&'static str, bool),
    /// Sets an inline style property.
    SetStyle(&'static str, String),
    /// Clears an inline style property.
    RemoveStyle(&'static str),
    /// Sets an attribute.
    SetAttribute(&'static str, String),
    /// Removes an attribute.
    RemoveAttribute(&'static str),
    /// Replaces the element's text content.
    SetText(String),
    /// Sets `opacity: 1` and `transform: translateY(0)`.
    ///
    /// The resting state of every entrance and stagger animation.
    Show,
}

/// A mutation bound to an element, applied after `delay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effect {
    /// Element to mutate.
    pub target: ElementId,
    /// What to change.
    pub mutation: Mutation,
    /// Delay from the moment the effect is handed to the presenter.
    pub delay: Duration,
}

impl Effect {
    /// Creates an effect applied immediately.
    #[must_use]
    pub const fn now(target: ElementId, mutation: Mutation) -> Self {
        Self {
            target,
            mutation,
            delay: Duration::ZERO,
        }
    }

    /// Creates an effect applied after `delay`.
    #[must_use]
    pub const fn after(target: ElementId, mutation: Mutation, delay: Duration) -> Self {
        Self {
            target,
            mutation,
            delay,
        }
    }

    /// Sets an inline style immediately.
    #[must_use]
    pub fn style(target: ElementId, property: &'static str, value: impl Into<String>) -> Self {
        Self::now(target, Mutation::SetStyle(property, value.into()))
    }

    /// Shows an element after `delay`.
    #[must_use]
    pub const fn show(target: ElementId, delay: Duration) -> Self {
        Self::after(target, Mutation::Show, delay)
    }

    /// Returns `true` if the effect is applied without a timer.
    #[must_use]
    pub const fn is_immediate(&self) -> bool {
        self.delay.ticks() == 0
    }
}
