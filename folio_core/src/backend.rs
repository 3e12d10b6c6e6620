// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for browser integrations.
//!
//! Folio splits browser-specific work into a *backend* crate that provides:
//!
//! - **Time**: A `now() -> HostTime` free function reading
//!   `performance.now()`.
//!
//! - **Frame source**: `requestAnimationFrame` loops for the cursor follower,
//!   parallax, and smooth scrolling. Not abstracted by a trait; the setup and
//!   lifecycle are tied to JS closures.
//!
//! - **Visibility source**: An `IntersectionObserver` wrapper that converts
//!   browser entries into [`Intersection`](crate::reveal::Intersection)
//!   batches for the [`RevealController`](crate::reveal::RevealController).
//!
//! - **Presenter**: Implements [`Presenter`] to apply [`Effect`]s to live
//!   elements, scheduling delayed effects on timers.
//!
//! # Crate boundaries
//!
//! `folio_core` owns every decision and this contract module. The backend
//! crate depends on `folio_core` and provides browser glue. The site crate
//! depends on both and binds them to the page markup.

use crate::effect::Effect;

/// Applies [`Effect`]s to a presentation tree.
///
/// The DOM presenter implements this trait; tests use recording doubles.
///
/// # Event handler pseudocode
///
/// ```rust,ignore
/// fn on_intersections(entries: &[Intersection]) {
///     let batch = reveal.observe(entries, &mut tracer);
///     presenter.apply(&batch.effects);
///     for id in batch.unobserve {
///         observer.unobserve(id);
///     }
/// }
/// ```
pub trait Presenter {
    /// Applies `effects` in order. Effects with a non-zero delay are deferred
    /// by that delay relative to this call.
    fn apply(&mut self, effects: &[Effect]);
}
