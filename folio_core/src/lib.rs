// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal, timing, and UI state machines for the folio portfolio front end.
//!
//! `folio_core` holds every decision the page makes, with no browser types in
//! sight. It is `no_std` compatible (with `alloc`). Browser backends feed it
//! events (intersections, scroll positions, timestamps, form values) and apply
//! the [`Effect`](effect::Effect)s it hands back.
//!
//! # Architecture
//!
//! ```text
//!   Backend (DOM events, rAF, timers)
//!       │
//!       ▼
//!   Intersection / scroll / input ──► controllers ──► Vec<Effect>
//!                                                        │
//!                 ┌──────────────────────────────────────┘
//!                 ▼
//!   Presenter::apply() ──► class list / inline style / scroll position
//! ```
//!
//! **[`reveal`]**: The visibility-triggered animator. One-way
//! pending → in-view state per watched section, with staggered reveals for
//! work and skill grids.
//!
//! **[`stagger`]**: Per-index delays and the entrance cue list played once
//! the loading screen is gone.
//!
//! **[`rate`]**: Time-windowed throttle and debounce used to bound scroll and
//! resize handler frequency.
//!
//! **[`motion`]**: Easing, smooth anchor scrolling, cursor follow, and
//! parallax offsets.
//!
//! **[`nav`]**: Navbar auto-hide and active-section tracking.
//!
//! **[`ui`]**: The explicit UI state owned by the page controller.
//!
//! **[`form`]**: Contact form validation and simulated submission.
//!
//! **[`hover`]**: Work item zoom and cursor highlight on pointer hover.
//!
//! **[`notify`]** / **[`loading`]**: Fixed timelines for notification
//! banners and the loading screen.
//!
//! **[`page`]**: The single page controller owning the UI state and routing
//! scroll, resize, menu, and form events to the pieces above.
//!
//! **[`config`]**: Every timing and geometry constant in one place.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod effect;
pub mod form;
pub mod hover;
pub mod loading;
pub mod motion;
pub mod nav;
pub mod notify;
pub mod page;
pub mod rate;
pub mod reveal;
pub mod stagger;
pub mod time;
pub mod trace;
pub mod ui;
