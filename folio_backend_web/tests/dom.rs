// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for the DOM presenter.
//!
//! Run with `wasm-pack test --headless --firefox folio_backend_web`.

#![cfg(target_arch = "wasm32")]

use folio_backend_web::{DomPresenter, Presenter, SLOT_ATTRIBUTE, parse_slot};
use folio_core::effect::{Effect, Mutation};
use folio_core::time::Duration;
use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn div() -> HtmlElement {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
        .create_element("div")
        .expect("create div")
        .unchecked_into()
}

#[wasm_bindgen_test]
fn register_tags_element_with_slot() {
    let mut presenter = DomPresenter::new();
    let a = presenter.register(div());
    let b = presenter.register(div());
    assert_ne!(a, b);

    let el = presenter.get_element(b).expect("registered");
    assert_eq!(parse_slot(el.get_attribute(SLOT_ATTRIBUTE).as_deref()), Some(b));
}

#[wasm_bindgen_test]
fn registering_twice_reuses_slot() {
    let mut presenter = DomPresenter::new();
    let el = div();
    let first = presenter.register(el.clone());
    let second = presenter.register(el);
    assert_eq!(first, second);
    assert_eq!(presenter.len(), 1);
}

#[wasm_bindgen_test]
fn immediate_effects_apply_in_order() {
    let mut presenter = DomPresenter::new();
    let id = presenter.register(div());
    presenter.apply(&[
        Effect::now(id, Mutation::AddClass("in-view")),
        Effect::now(id, Mutation::ToggleClass("active", true)),
        Effect::now(id, Mutation::ToggleClass("active", false)),
        Effect::style(id, "overflow", "hidden"),
        Effect::now(id, Mutation::SetAttribute("disabled", "".into())),
        Effect::now(id, Mutation::SetText("Sending...".into())),
    ]);

    let el = presenter.get_element(id).expect("registered");
    assert!(el.class_list().contains("in-view"));
    assert!(!el.class_list().contains("active"));
    assert_eq!(el.style().get_property_value("overflow").ok().as_deref(), Some("hidden"));
    assert!(el.has_attribute("disabled"));
    assert_eq!(el.text_content().as_deref(), Some("Sending..."));
}

#[wasm_bindgen_test]
fn delayed_effects_wait_for_timer() {
    let mut presenter = DomPresenter::new();
    let id = presenter.register(div());
    presenter.apply(&[Effect::show(id, Duration::from_millis(200))]);

    let el = presenter.get_element(id).expect("registered");
    assert_eq!(el.style().get_property_value("opacity").ok().as_deref(), Some(""));
}

#[wasm_bindgen_test]
fn released_slots_ignore_effects() {
    let mut presenter = DomPresenter::new();
    let id = presenter.register(div());
    let el = presenter.release(id).expect("registered");
    presenter.apply(&[Effect::now(id, Mutation::AddClass("in-view"))]);
    assert!(!el.class_list().contains("in-view"));
    assert!(!el.has_attribute(SLOT_ATTRIBUTE));
    assert!(presenter.is_empty());
}
