// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout` scheduling.

use alloc::boxed::Box;

use folio_core::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// Runs `f` once after `delay`.
///
/// Fire-and-forget: the closure frees itself after running.
pub fn defer(delay: Duration, f: impl FnOnce() + 'static) {
    let handler = Closure::once_into_js(f);
    set_timeout(&handler, delay.as_timeout_millis());
}

/// A pending `setTimeout` that is cancelled when dropped.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedules `f` to run once after `delay`.
    pub fn new(delay: Duration, f: impl FnOnce() + 'static) -> Self {
        let mut f = Some(f);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = set_timeout(closure.as_ref().unchecked_ref(), delay.as_timeout_millis());
        Self {
            id,
            _closure: closure,
        }
    }

    /// Cancels the timeout if it has not run yet.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.id);
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
