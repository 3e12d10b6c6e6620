// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM helpers shared by the page bindings.

use alloc::boxed::Box;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

/// Adds an event listener that lives as long as the page.
pub(crate) fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Collects the HTML elements of a node list, in document order.
pub(crate) fn html_elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub(crate) fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(&document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
pub(crate) fn select_within(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    Ok(html_elements(&root.query_selector_all(selector)?))
}

/// First element in the document matching `selector`.
pub(crate) fn select(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Element with the given id, if present and an HTML element.
pub(crate) fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// The `href` of the anchor an event came from, walking up from its target.
pub(crate) fn event_href(event: &Event) -> Option<alloc::string::String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest("a").ok()??.get_attribute("href")
}
