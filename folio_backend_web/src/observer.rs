// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` integration.
//!
//! [`VisibilityObserver`] converts browser entries into
//! [`Intersection`](folio_core::reveal::Intersection) batches. Targets are
//! identified by the presenter's slot attribute, so only elements registered
//! with a [`DomPresenter`](crate::DomPresenter) are reported.

use alloc::boxed::Box;
use alloc::vec::Vec;

use folio_core::config::RevealConfig;
use folio_core::reveal::Intersection;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::parse_slot;
use crate::presenter::SLOT_ATTRIBUTE;

type EntriesClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches elements and reports viewport intersections in batches.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
}

impl VisibilityObserver {
    /// Creates an observer using the threshold and root margin from `config`.
    ///
    /// `on_batch` is called once per browser callback with every entry whose
    /// target carries a slot attribute.
    pub fn new(
        config: &RevealConfig,
        mut on_batch: impl FnMut(&[Intersection]) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            let batch = intersections(&entries);
            if !batch.is_empty() {
                on_batch(&batch);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(config.root_margin);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Starts watching `element`.
    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Stops watching `element`.
    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

/// Converts observer entries to intersections, skipping targets without a
/// slot attribute.
fn intersections(entries: &Array) -> Vec<Intersection> {
    entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let slot = entry.target().get_attribute(SLOT_ATTRIBUTE);
            Some(Intersection {
                target: parse_slot(slot.as_deref())?,
                is_intersecting: entry.is_intersecting(),
                ratio: entry.intersection_ratio(),
            })
        })
        .collect()
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityObserver").finish_non_exhaustive()
    }
}
