// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for page controllers.
//!
//! [`TraceSink`] has one method per event; all default to no-ops, so a sink
//! implements only what it cares about.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing. When **on**, each
//! method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use crate::effect::ElementId;
use crate::notify::NotificationKind;
use crate::reveal::SectionKind;
use crate::time::{Duration, HostTime};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Stage of the loading screen timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadingStage {
    /// The loading screen started fading out.
    FadeOut,
    /// The loading screen was hidden and entrance cues were released.
    Entrance,
}

/// Outcome of a contact form submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormOutcome {
    /// Validation failed; nothing was sent.
    Rejected,
    /// Validation passed; the simulated send started.
    Sending,
    /// The simulated send finished and the form was reset.
    Completed,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a watched section transitions to in-view.
#[derive(Clone, Copy, Debug)]
pub struct RevealEvent {
    /// The section that was revealed.
    pub target: ElementId,
    /// What kind of section it is.
    pub kind: SectionKind,
    /// Number of staggered children released with it.
    pub staggered: u32,
    /// Delay of the last staggered child, zero for plain sections.
    pub span: Duration,
}

/// Emitted when the mobile menu opens or closes.
#[derive(Clone, Copy, Debug)]
pub struct MenuEvent {
    /// New open state.
    pub open: bool,
}

/// Emitted when a notification banner is raised.
#[derive(Clone, Copy, Debug)]
pub struct NotificationEvent<'a> {
    /// Banner kind.
    pub kind: NotificationKind,
    /// Banner text.
    pub message: &'a str,
}

/// Emitted for each contact form submission step.
#[derive(Clone, Copy, Debug)]
pub struct FormEvent {
    /// What happened.
    pub outcome: FormOutcome,
}

/// Emitted as the loading screen timeline advances.
#[derive(Clone, Copy, Debug)]
pub struct LoadingEvent {
    /// Which stage was reached.
    pub stage: LoadingStage,
}

/// Emitted on page lifecycle changes.
#[derive(Clone, Copy, Debug)]
pub enum PageEvent {
    /// Every module finished binding.
    Initialized,
    /// The `load` event fired.
    Loaded {
        /// `performance.now()` at the `load` event.
        at: HostTime,
    },
    /// The document was hidden or shown.
    VisibilityChanged {
        /// `document.hidden` after the change.
        hidden: bool,
    },
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from page controllers.
///
/// All methods have default no-op implementations.
pub trait TraceSink {
    /// Called when a section is revealed.
    fn on_reveal(&mut self, e: &RevealEvent) {
        _ = e;
    }

    /// Called when the mobile menu changes state.
    fn on_menu(&mut self, e: &MenuEvent) {
        _ = e;
    }

    /// Called when a notification is raised.
    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        _ = e;
    }

    /// Called for each contact form step.
    fn on_form(&mut self, e: &FormEvent) {
        _ = e;
    }

    /// Called as the loading screen progresses.
    fn on_loading(&mut self, e: &LoadingEvent) {
        _ = e;
    }

    /// Called on page lifecycle changes.
    fn on_page(&mut self, e: &PageEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`RevealEvent`].
    #[inline]
    pub fn reveal(&mut self, e: &RevealEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MenuEvent`].
    #[inline]
    pub fn menu(&mut self, e: &MenuEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_menu(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NotificationEvent`].
    #[inline]
    pub fn notification(&mut self, e: &NotificationEvent<'_>) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_notification(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FormEvent`].
    #[inline]
    pub fn form(&mut self, e: &FormEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_form(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`LoadingEvent`].
    #[inline]
    pub fn loading(&mut self, e: &LoadingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_loading(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PageEvent`].
    #[inline]
    pub fn page(&mut self, e: &PageEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_page(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reveal() -> RevealEvent {
        RevealEvent {
            target: ElementId(3),
            kind: SectionKind::WorkGrid,
            staggered: 4,
            span: Duration::from_millis(600),
        }
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_reveal(&sample_reveal());
        sink.on_menu(&MenuEvent { open: true });
        sink.on_page(&PageEvent::VisibilityChanged { hidden: true });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.reveal(&sample_reveal());
        tracer.form(&FormEvent {
            outcome: FormOutcome::Rejected,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            revealed: Vec<ElementId>,
            menus: Vec<bool>,
        }
        impl TraceSink for RecordingSink {
            fn on_reveal(&mut self, e: &RevealEvent) {
                self.revealed.push(e.target);
            }
            fn on_menu(&mut self, e: &MenuEvent) {
                self.menus.push(e.open);
            }
        }

        let mut sink = RecordingSink {
            revealed: Vec::new(),
            menus: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.reveal(&sample_reveal());
        tracer.menu(&MenuEvent { open: false });
        drop(tracer);
        assert_eq!(sink.revealed, &[ElementId(3)]);
        assert_eq!(sink.menus, &[false]);
    }
}
