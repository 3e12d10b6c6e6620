// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for folio.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` loop for continuous effects
//! - [`animate`]: self-terminating `requestAnimationFrame` chains
//! - [`defer`]: one-shot `setTimeout` callbacks, and [`Timeout`] for
//!   cancellable ones
//! - [`VisibilityObserver`]: `IntersectionObserver` feeding reveal batches
//! - [`DomPresenter`]: element slots and effect application
//! - [`ConsoleLogger`] / [`LogSink`]: `log` and trace output to the console

#![no_std]

extern crate alloc;

mod console;
mod observer;
mod presenter;
mod raf;
mod timer;

pub use console::{ConsoleLogger, LogSink, init_logger};
pub use folio_core::backend::Presenter;
pub use observer::VisibilityObserver;
pub use presenter::{DomPresenter, SLOT_ATTRIBUTE};
pub use raf::{RafLoop, animate};
pub use timer::{Timeout, defer};

use folio_core::time::HostTime;

/// Returns the current page time from `performance.now()`.
#[must_use]
pub fn now() -> HostTime {
    HostTime::from_millis_f64(raf::performance_now())
}

/// Parses a presenter slot attribute value.
///
/// Returns `None` for missing or malformed values.
#[must_use]
pub fn parse_slot(value: Option<&str>) -> Option<folio_core::effect::ElementId> {
    value?.trim().parse().ok().map(folio_core::effect::ElementId)
}
