// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser tests for the page bindings.
//!
//! Run with `wasm-pack test --headless --firefox folio_site`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast as _;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Appends `html` to the page in its own container and mounts the bindings.
///
/// Callers remove the container when done so later fixtures start clean.
fn mount_fixture(html: &str) -> (Document, Element) {
    let window = web_sys::window().expect("window");
    let document = window.document().expect("document");
    let fixture = document.create_element("div").expect("create div");
    fixture.set_inner_html(html);
    document
        .body()
        .expect("body")
        .append_child(&fixture)
        .expect("append");
    folio_site::mount(window, document.clone()).expect("mount");
    (document, fixture)
}

fn html_element(fixture: &Element, selector: &str) -> HtmlElement {
    fixture
        .query_selector(selector)
        .expect("valid selector")
        .expect("element in fixture")
        .unchecked_into()
}

#[wasm_bindgen_test]
fn hero_enters_at_once_without_loading_screen() {
    let (_document, fixture) = mount_fixture(
        r#"<section id="home" class="hero">
             <div class="hero-content">
               <p class="hero-label">Portfolio</p>
               <h1><span class="hero-title-line">Hello</span></h1>
             </div>
           </section>"#,
    );

    let label = html_element(&fixture, ".hero-label");
    assert_eq!(
        label.style().get_property_value("opacity").ok().as_deref(),
        Some("1"),
        "label is shown without waiting for a loading screen"
    );
    let title = html_element(&fixture, ".hero-title-line");
    assert_eq!(
        title.style().get_property_value("opacity").ok().as_deref(),
        Some(""),
        "title lines still follow their own delay"
    );
    fixture.remove();
}

#[wasm_bindgen_test]
fn form_without_button_is_still_validated() {
    let (document, fixture) = mount_fixture(
        r#"<form id="contactForm">
             <div class="form-group">
               <input type="text" id="name" name="name">
               <label for="name">Name</label>
             </div>
           </form>"#,
    );

    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = Event::new_with_event_init_dict("submit", &init).expect("event");
    let form = html_element(&fixture, "#contactForm");
    let proceeded = form.dispatch_event(&submit).expect("dispatch");

    assert!(!proceeded, "native submission is cancelled");
    assert!(submit.default_prevented());
    assert!(
        document
            .query_selector(".notification.notification-error")
            .expect("valid selector")
            .is_some(),
        "empty fields raise an error banner"
    );
    fixture.remove();
}
