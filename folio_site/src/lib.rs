// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio page front end.
//!
//! Binds the page markup to the `folio_core` controllers through the
//! `folio_backend_web` primitives: reveal-on-scroll sections with staggered
//! grids, the loading screen and hero entrance, navbar auto-hide and active
//! links, smooth anchor scrolling, parallax, the custom cursor, the mobile
//! menu, and the simulated contact form with notification banners.
//!
//! Build with: `wasm-pack build --target web folio_site`
//! Then load the generated module from the portfolio's `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod dom;
mod markup;
mod notification;
mod portfolio;

use folio_backend_web::{LogSink, init_logger, now};
use folio_core::trace::{PageEvent, Tracer};
use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::dom::listen;

/// Entry point: installs diagnostics and mounts the page once the DOM is
/// parsed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if init_logger(LevelFilter::Debug).is_err() {
        log::debug!("logger already installed");
    }
    log::info!("portfolio loading");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    notification::inject_styles(&document)?;
    bind_lifecycle(&window, &document)?;

    if document.ready_state() == "loading" {
        let ready_window = window.clone();
        let ready_document = document.clone();
        listen(&document, "DOMContentLoaded", move |_event| {
            boot(ready_window.clone(), ready_document.clone());
        })?;
    } else {
        boot(window, document);
    }
    Ok(())
}

/// Binds every page feature to the markup already in `document`.
///
/// [`start`] calls this once the DOM is parsed. Features whose markup is
/// missing are skipped.
pub fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    portfolio::mount(window, document)
}

fn boot(window: Window, document: Document) {
    log::info!("DOM ready, initializing portfolio");
    if let Err(err) = mount(window, document) {
        log::error!("error initializing portfolio: {err:?}");
    }
}

/// Logs visibility changes and the page load time.
fn bind_lifecycle(window: &Window, document: &Document) -> Result<(), JsValue> {
    let visibility_document = document.clone();
    listen(document, "visibilitychange", move |_event| {
        let mut sink = LogSink;
        Tracer::new(&mut sink).page(&PageEvent::VisibilityChanged {
            hidden: visibility_document.hidden(),
        });
    })?;
    listen(window, "load", |_event| {
        let mut sink = LogSink;
        Tracer::new(&mut sink).page(&PageEvent::Loaded { at: now() });
    })
}
