// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient notification banners.
//!
//! Banners are created on demand, appended to `<body>`, and removed once
//! their timeline ends. They never go through the presenter: they are not
//! part of the page markup and live only a few seconds.

use alloc::format;

use folio_backend_web::defer;
use folio_core::notify::{
    NotificationKind, NotificationTimeline, OFFSCREEN_TRANSFORM, ONSCREEN_TRANSFORM, banner_style,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Layout rules for banner contents, injected once at start-up.
const BANNER_CSS: &str = "
.notification-content { display: flex; align-items: center; gap: 0.75rem; }
.notification-icon { font-size: 1.2rem; }
.notification-message { flex: 1; font-size: 0.9rem; line-height: 1.4; }
@media (max-width: 768px) {
  .notification { right: 1rem !important; left: 1rem !important; max-width: none !important; transform: translateY(-100px) !important; }
  .notification.show { transform: translateY(0) !important; }
}
";

/// Appends the banner stylesheet to `<head>`.
pub(crate) fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document.create_element("style")?;
    style.set_text_content(Some(BANNER_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Shows a banner and schedules its slide-in, slide-out, and removal.
pub(crate) fn show(
    document: &Document,
    timeline: NotificationTimeline,
    kind: NotificationKind,
    message: &str,
) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };

    let banner: HtmlElement = document.create_element("div")?.unchecked_into();
    banner.set_class_name(&format!("notification {}", kind.class_name()));
    banner.set_attribute("style", &banner_style(kind))?;

    let content = document.create_element("div")?;
    content.set_class_name("notification-content");
    let icon = document.create_element("span")?;
    icon.set_class_name("notification-icon");
    icon.set_text_content(Some(kind.icon()));
    let text = document.create_element("span")?;
    text.set_class_name("notification-message");
    // Plain text only.
    text.set_text_content(Some(message));
    content.append_child(&icon)?;
    content.append_child(&text)?;
    banner.append_child(&content)?;
    body.append_child(&banner)?;

    let entering = banner.clone();
    defer(timeline.enter, move || {
        let _ = entering.style().set_property("transform", ONSCREEN_TRANSFORM);
    });

    let leaving = banner.clone();
    defer(timeline.leave, move || {
        let _ = leaving.style().set_property("transform", OFFSCREEN_TRANSFORM);
    });

    defer(timeline.remove, move || {
        if banner.is_connected() {
            banner.remove();
        }
    });

    Ok(())
}
