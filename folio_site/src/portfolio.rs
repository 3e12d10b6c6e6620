// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller instance and its event bindings.
//!
//! [`Portfolio`] owns the core [`Page`], the presenter, and every browser
//! handle the page needs. It is shared as `Rc<RefCell<_>>` by the event
//! closures; each closure borrows it for the duration of one callback only.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::RefCell;

use folio_backend_web::{
    DomPresenter, LogSink, Presenter as _, RafLoop, Timeout, VisibilityObserver, animate, defer,
    now,
};
use folio_core::config::FolioConfig;
use folio_core::effect::{Effect, ElementId};
use folio_core::form::{
    ContactForm, Field, FormElements, SUCCESS_MESSAGE, SubmitButton, SubmitOutcome, label_effect,
};
use folio_core::hover::{cursor_hover, work_item_hover};
use folio_core::loading::LoadingSchedule;
use folio_core::motion::{ParallaxOffsets, SmoothScroll, anchor_scroll_target};
use folio_core::nav::{NavLink, SectionBounds, active_section, anchor_target, highlight_links};
use folio_core::notify::NotificationKind;
use folio_core::page::Page;
use folio_core::reveal::{Intersection, SectionKind};
use folio_core::stagger::{EntrancePart, entrance_plan};
use folio_core::time::{Duration, HostTime};
use folio_core::trace::{LoadingEvent, LoadingStage, NotificationEvent, PageEvent, Tracer};
use folio_core::ui::MenuElements;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, FormData, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, MouseEvent, Window,
};

use crate::dom::{by_id, event_href, listen, select, select_all, select_within};
use crate::markup;
use crate::notification;

type Shared = Rc<RefCell<Portfolio>>;

/// A `section[id]` and the href that links to it.
struct LinkedSection {
    element: HtmlElement,
    href: String,
}

struct ContactBinding {
    form: HtmlFormElement,
    elements: FormElements,
}

/// Single owner of the page's state and browser handles.
pub(crate) struct Portfolio {
    window: Window,
    document: Document,
    page: Page,
    presenter: DomPresenter,
    sink: LogSink,
    navbar: Option<ElementId>,
    nav_links: Vec<NavLink>,
    sections: Vec<LinkedSection>,
    hero_bg: Option<ElementId>,
    hero_content: Option<ElementId>,
    menu: Option<MenuElements>,
    contact: Option<ContactBinding>,
    observer: Option<VisibilityObserver>,
    resize_timer: Option<Timeout>,
    cursor_loop: Option<RafLoop>,
}

impl core::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Portfolio")
            .field("page", &self.page)
            .field("presenter", &self.presenter)
            .field("nav_links", &self.nav_links.len())
            .field("sections", &self.sections.len())
            .field("resize_timer", &self.resize_timer)
            .field("cursor_loop", &self.cursor_loop)
            .finish_non_exhaustive()
    }
}

/// Builds the controller and binds every page feature.
///
/// Features whose markup is missing are skipped.
pub(crate) fn mount(window: Window, document: Document) -> Result<(), JsValue> {
    let state = Rc::new(RefCell::new(Portfolio::new(
        window,
        document,
        FolioConfig::web(),
    )?));

    bind_scroll(&state)?;
    bind_resize(&state)?;
    bind_navigation(&state)?;
    bind_work_items(&state)?;
    init_cursor(&state)?;
    init_reveal(&state)?;
    init_loading(&state)?;
    init_mobile_menu(&state)?;
    init_contact_form(&state)?;

    let mut s = state.borrow_mut();
    let y = s.scroll_y();
    let effects = s.active_link_effects(y);
    s.presenter.apply(&effects);
    Tracer::new(&mut s.sink).page(&PageEvent::Initialized);
    Ok(())
}

impl Portfolio {
    fn new(window: Window, document: Document, config: FolioConfig) -> Result<Self, JsValue> {
        let mut presenter = DomPresenter::new();

        let navbar = select(&document, markup::NAVBAR)?.map(|el| presenter.register(el));
        let nav_links = select_all(&document, markup::NAV_LINK)?
            .into_iter()
            .filter_map(|el| {
                let href = el.get_attribute("href")?;
                Some(NavLink {
                    id: presenter.register(el),
                    href,
                })
            })
            .collect();
        let sections = select_all(&document, markup::LINKED_SECTIONS)?
            .into_iter()
            .filter_map(|element| {
                let id = element.id();
                (!id.is_empty()).then(|| LinkedSection {
                    href: format!("#{id}"),
                    element,
                })
            })
            .collect();
        let hero_bg = select(&document, markup::HERO_BG)?.map(|el| presenter.register(el));
        let hero_content =
            select(&document, markup::HERO_CONTENT)?.map(|el| presenter.register(el));

        Ok(Self {
            window,
            document,
            page: Page::new(config),
            presenter,
            sink: LogSink,
            navbar,
            nav_links,
            sections,
            hero_bg,
            hero_content,
            menu: None,
            contact: None,
            observer: None,
            resize_timer: None,
            cursor_loop: None,
        })
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0)
    }

    // -- scroll ---------------------------------------------------------------

    /// Handles one raw scroll event. Returns `true` if a parallax frame
    /// should be requested.
    fn scrolled(&mut self, at: HostTime) -> bool {
        let y = self.scroll_y();
        let response = self.page.on_scroll(at, y);
        let mut effects = Vec::new();
        if let Some(navbar) = self.navbar {
            effects.push(Effect::style(
                navbar,
                "transform",
                response.navbar.css_transform(),
            ));
        }
        if response.track_active {
            effects.extend(self.active_link_effects(y));
        }
        self.presenter.apply(&effects);
        response.request_parallax
    }

    fn active_link_effects(&self, y: f64) -> Vec<Effect> {
        let bounds: Vec<SectionBounds> = self
            .sections
            .iter()
            .map(|s| SectionBounds {
                top: f64::from(s.element.offset_top()),
                height: f64::from(s.element.offset_height()),
            })
            .collect();
        active_section(&bounds, y, &self.page.config().motion)
            .and_then(|i| self.sections.get(i))
            .map(|section| highlight_links(&self.nav_links, &section.href))
            .unwrap_or_default()
    }

    fn parallax_frame(&mut self) {
        let offsets = self.page.parallax_frame(self.scroll_y());
        let layers = [
            (self.hero_bg, offsets.background),
            (self.hero_content, offsets.content),
        ];
        let effects: Vec<Effect> = layers
            .into_iter()
            .filter_map(|(id, offset)| {
                Some(Effect::style(
                    id?,
                    "transform",
                    ParallaxOffsets::css_transform(offset),
                ))
            })
            .collect();
        self.presenter.apply(&effects);
    }

    fn smooth_scroll(&self, href: &str) -> Option<SmoothScroll> {
        let target = by_id(&self.document, anchor_target(href)?)?;
        let config = self.page.config();
        let to = anchor_scroll_target(f64::from(target.offset_top()), &config.motion);
        Some(SmoothScroll::new(
            self.scroll_y(),
            to,
            config.timing.smooth_scroll,
        ))
    }

    // -- resize ---------------------------------------------------------------

    fn resize_settled(&mut self, deadline: HostTime) {
        let width = self.viewport_width();
        let menu = self.menu;
        let mut tracer = Tracer::new(&mut self.sink);
        let effects = self
            .page
            .on_resize_settled(deadline, width, menu, &mut tracer);
        self.presenter.apply(&effects);
    }

    // -- mobile menu ----------------------------------------------------------

    fn toggle_menu(&mut self) {
        let Some(menu) = self.menu else {
            return;
        };
        let mut tracer = Tracer::new(&mut self.sink);
        let effects = self.page.toggle_menu(menu, &mut tracer);
        self.presenter.apply(&effects);
    }

    fn close_menu(&mut self) {
        let Some(menu) = self.menu else {
            return;
        };
        let mut tracer = Tracer::new(&mut self.sink);
        let effects = self.page.close_menu(menu, &mut tracer);
        self.presenter.apply(&effects);
    }

    // -- reveal ---------------------------------------------------------------

    /// Registers and observes a reveal section. Returns `None` if it was
    /// already watched.
    fn watch(
        &mut self,
        observer: &VisibilityObserver,
        el: HtmlElement,
        kind: SectionKind,
    ) -> Option<ElementId> {
        let id = self.presenter.register(el);
        let tag = self.page.reveal_mut().register(id, kind)?;
        self.presenter.apply(&[tag]);
        if let Some(el) = self.presenter.get_element(id) {
            observer.observe(el);
        }
        Some(id)
    }

    fn revealed(&mut self, entries: &[Intersection]) {
        let mut tracer = Tracer::new(&mut self.sink);
        let batch = self.page.reveal_mut().observe(entries, &mut tracer);
        self.presenter.apply(&batch.effects);
        if let Some(observer) = &self.observer {
            for id in batch.unobserve {
                if let Some(el) = self.presenter.get_element(id) {
                    observer.unobserve(el);
                }
            }
        }
    }

    // -- loading --------------------------------------------------------------

    fn fade_loading(&mut self, screen: ElementId) {
        let mut tracer = Tracer::new(&mut self.sink);
        let effects = self.page.fade_loading(screen, &mut tracer);
        self.presenter.apply(&effects);
    }

    fn finish_loading(&mut self, screen: Option<ElementId>, schedule: LoadingSchedule) {
        let mut effects = match screen {
            Some(screen) => schedule.hide(screen),
            None => {
                self.page.skip_loading();
                Vec::new()
            }
        };
        effects.extend(self.entrance_effects());
        self.presenter.apply(&effects);
        Tracer::new(&mut self.sink).loading(&LoadingEvent {
            stage: LoadingStage::Entrance,
        });
    }

    fn entrance_effects(&mut self) -> Vec<Effect> {
        let parts: Vec<(EntrancePart, Vec<ElementId>)> = EntrancePart::ALL
            .into_iter()
            .map(|part| {
                let ids = select_all(&self.document, markup::entrance_selector(part))
                    .unwrap_or_default()
                    .into_iter()
                    .map(|el| self.presenter.register(el))
                    .collect();
                (part, ids)
            })
            .collect();
        entrance_plan(&parts, self.page.config().timing.title_stagger)
    }

    // -- contact form ---------------------------------------------------------

    /// Starts a submission. Returns the simulated send delay if one started.
    fn submit_contact(&mut self) -> Option<Duration> {
        let contact = self.contact.as_ref()?;
        let form = match read_form(&contact.form) {
            Ok(form) => form,
            Err(err) => {
                log::warn!("could not read the contact form: {err:?}");
                return None;
            }
        };
        let mut tracer = Tracer::new(&mut self.sink);
        match self.page.submit_form(&form, &contact.elements, &mut tracer) {
            SubmitOutcome::Rejected(err) => {
                self.notify(NotificationKind::Error, &err.to_string());
                None
            }
            SubmitOutcome::Sending {
                message,
                effects,
                complete_after,
            } => {
                log::debug!("form submitted: {message:?}");
                self.presenter.apply(&effects);
                Some(complete_after)
            }
            SubmitOutcome::Busy => None,
        }
    }

    fn complete_contact(&mut self) {
        let Some(contact) = &self.contact else {
            return;
        };
        let mut tracer = Tracer::new(&mut self.sink);
        let Some(effects) = self.page.complete_form(&contact.elements, &mut tracer) else {
            return;
        };
        contact.form.reset();
        self.presenter.apply(&effects);
        self.notify(NotificationKind::Success, SUCCESS_MESSAGE);
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        Tracer::new(&mut self.sink).notification(&NotificationEvent { kind, message });
        let timeline = self.page.notification_timeline();
        if let Err(err) = notification::show(&self.document, timeline, kind, message) {
            log::warn!("could not show notification: {err:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

fn bind_scroll(state: &Shared) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let scroll_state = Rc::clone(state);
    listen(&window, "scroll", move |_event| {
        let request_parallax = scroll_state.borrow_mut().scrolled(now());
        if request_parallax {
            let frame_state = Rc::clone(&scroll_state);
            animate(move |_| {
                frame_state.borrow_mut().parallax_frame();
                false
            });
        }
    })
}

fn bind_resize(state: &Shared) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let resize_state = Rc::clone(state);
    listen(&window, "resize", move |_event| {
        let settled_state = Rc::clone(&resize_state);
        let mut s = resize_state.borrow_mut();
        let at = now();
        let deadline = s.page.on_resize(at);
        if let Some(pending) = s.resize_timer.take() {
            pending.cancel();
        }
        s.resize_timer = Some(Timeout::new(
            deadline.saturating_duration_since(at),
            move || settled_state.borrow_mut().resize_settled(deadline),
        ));
    })
}

fn bind_navigation(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();

    for link in select_all(&document, markup::ANY_NAV_LINK)? {
        let link_state = Rc::clone(state);
        let source = link.clone();
        listen(&link, "click", move |event: Event| {
            let Some(href) = source.get_attribute("href") else {
                return;
            };
            if anchor_target(&href).is_none() {
                return;
            }
            event.prevent_default();
            smooth_scroll_to(&link_state, &href);

            let mut s = link_state.borrow_mut();
            let effects = highlight_links(&s.nav_links, &href);
            s.presenter.apply(&effects);
            s.close_menu();
        })?;
    }

    for button in select_all(&document, markup::SCROLL_BUTTONS)? {
        let button_state = Rc::clone(state);
        listen(&button, "click", move |event: Event| {
            let Some(href) = event_href(&event) else {
                return;
            };
            if anchor_target(&href).is_some() {
                event.prevent_default();
                smooth_scroll_to(&button_state, &href);
            }
        })?;
    }
    Ok(())
}

fn smooth_scroll_to(state: &Shared, href: &str) {
    let Some(mut scroll) = state.borrow().smooth_scroll(href) else {
        return;
    };
    let window = state.borrow().window.clone();
    animate(move |frame| {
        let sample = scroll.sample(frame);
        window.scroll_to_with_x_and_y(0.0, sample.y);
        !sample.finished
    });
}

fn bind_work_items(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    for item in select_all(&document, markup::WORK_ITEM)? {
        let Some(image) = item
            .query_selector(markup::WORK_IMAGE)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let image = state.borrow_mut().presenter.register(image);
        for (kind, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let hover_state = Rc::clone(state);
            listen(&item, kind, move |_event| {
                hover_state
                    .borrow_mut()
                    .presenter
                    .apply(&[work_item_hover(image, hovered)]);
            })?;
        }
    }
    Ok(())
}

fn init_cursor(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    let Some(cursor) = by_id(&document, markup::CURSOR_ID) else {
        return Ok(());
    };
    let cursor = state.borrow_mut().presenter.register(cursor);

    let move_state = Rc::clone(state);
    listen(&document, "mousemove", move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            move_state
                .borrow_mut()
                .page
                .cursor_mut()
                .set_target(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
        }
    })?;

    let frame_state = Rc::clone(state);
    let follow = RafLoop::new(move |_| {
        let mut s = frame_state.borrow_mut();
        let follower = s.page.cursor_mut();
        follower.step();
        let transform = follower.css_transform();
        s.presenter
            .apply(&[Effect::style(cursor, "transform", transform)]);
    });
    follow.start();
    state.borrow_mut().cursor_loop = Some(follow);

    for el in select_all(&document, markup::CURSOR_TARGETS)? {
        for (kind, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let hover_state = Rc::clone(state);
            listen(&el, kind, move |_event| {
                hover_state
                    .borrow_mut()
                    .presenter
                    .apply(&[cursor_hover(cursor, hovered)]);
            })?;
        }
    }
    log::debug!("custom cursor initialized");
    Ok(())
}

fn init_reveal(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    let config = state.borrow().page.config().reveal;
    let batch_state = Rc::clone(state);
    let observer = VisibilityObserver::new(&config, move |entries| {
        batch_state.borrow_mut().revealed(entries);
    })?;

    let mut s = state.borrow_mut();
    for el in select_all(&document, markup::REVEAL_SECTIONS)? {
        s.watch(&observer, el, SectionKind::Plain);
    }
    for grid in select_all(&document, markup::WORK_GRID)? {
        let items = select_within(&grid, markup::WORK_ITEM)?;
        let Some(grid) = s.watch(&observer, grid, SectionKind::WorkGrid) else {
            continue;
        };
        for item in items {
            let item = s.presenter.register(item);
            s.page.reveal_mut().add_item(grid, item);
        }
    }
    for grid in select_all(&document, markup::SKILLS_GRID)? {
        let categories = select_within(&grid, markup::SKILL_CATEGORY)?;
        let Some(grid) = s.watch(&observer, grid, SectionKind::SkillsGrid) else {
            continue;
        };
        for category in categories {
            let tags = select_within(&category, markup::SKILL_TAG)?;
            let category = s.presenter.register(category);
            s.page.reveal_mut().add_item(grid, category);
            for tag in tags {
                let tag = s.presenter.register(tag);
                s.page.reveal_mut().add_tag(grid, category, tag);
            }
        }
    }
    log::debug!(
        "watching {} sections for reveal",
        s.page.reveal().pending_count()
    );
    s.observer = Some(observer);
    Ok(())
}

fn init_loading(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    let schedule = state.borrow().page.loading_schedule();
    let Some(screen) = by_id(&document, markup::LOADING_SCREEN_ID) else {
        // Nothing to wait for.
        state.borrow_mut().finish_loading(None, schedule);
        return Ok(());
    };
    let screen = state.borrow_mut().presenter.register(screen);

    let fade_state = Rc::clone(state);
    defer(schedule.fade_at, move || {
        fade_state.borrow_mut().fade_loading(screen);
        let hide_state = Rc::clone(&fade_state);
        defer(schedule.hide_after, move || {
            hide_state
                .borrow_mut()
                .finish_loading(Some(screen), schedule);
        });
    });
    Ok(())
}

fn init_mobile_menu(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    let (Some(toggle), Some(menu), Some(body)) = (
        by_id(&document, markup::NAV_TOGGLE_ID),
        by_id(&document, markup::MOBILE_MENU_ID),
        document.body(),
    ) else {
        return Ok(());
    };

    {
        let mut s = state.borrow_mut();
        let elements = MenuElements {
            toggle: s.presenter.register(toggle.clone()),
            menu: s.presenter.register(menu.clone()),
            body: s.presenter.register(body),
        };
        s.menu = Some(elements);
    }

    let toggle_state = Rc::clone(state);
    listen(&toggle, "click", move |_event| {
        toggle_state.borrow_mut().toggle_menu();
    })?;

    if let Some(close) = by_id(&document, markup::CLOSE_MOBILE_MENU_ID) {
        let close_state = Rc::clone(state);
        listen(&close, "click", move |_event| {
            close_state.borrow_mut().close_menu();
        })?;
    }

    let overlay_state = Rc::clone(state);
    let backdrop = menu.clone();
    listen(&menu, "click", move |event: Event| {
        let backdrop: &EventTarget = &backdrop;
        // Clicks on the overlay itself, not on its children.
        if event.target().is_some_and(|target| target == *backdrop) {
            overlay_state.borrow_mut().close_menu();
        }
    })
}

fn init_contact_form(state: &Shared) -> Result<(), JsValue> {
    let document = state.borrow().document.clone();
    let Some(form) = document
        .get_element_by_id(markup::CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let mut groups = Vec::new();
    for group in select_within(&form, markup::FORM_GROUP)? {
        let Some(input) = group.query_selector(markup::FORM_INPUT)? else {
            continue;
        };
        if group.query_selector("label")?.is_none() {
            continue;
        }
        let group = state.borrow_mut().presenter.register(group);
        groups.push(group);

        let initial = field_value(&input);
        if !initial.is_empty() {
            state
                .borrow_mut()
                .presenter
                .apply(&[label_effect(group, false, &initial)]);
        }

        for (kind, focused) in [("focus", true), ("blur", false)] {
            let label_state = Rc::clone(state);
            let source = input.clone();
            listen(&input, kind, move |_event| {
                let value = field_value(&source);
                label_state
                    .borrow_mut()
                    .presenter
                    .apply(&[label_effect(group, focused, &value)]);
            })?;
        }
    }

    let submit = match select_within(&form, markup::SUBMIT_BUTTON)?.into_iter().next() {
        Some(button) => {
            let label = button
                .query_selector(markup::SUBMIT_LABEL)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .unwrap_or_else(|| button.clone());
            let idle_label = label.text_content().unwrap_or_default();
            let mut s = state.borrow_mut();
            Some(SubmitButton {
                button: s.presenter.register(button),
                label: s.presenter.register(label),
                idle_label,
            })
        }
        None => {
            log::warn!("contact form has no submit button");
            None
        }
    };
    state.borrow_mut().contact = Some(ContactBinding {
        form: form.clone(),
        elements: FormElements { submit, groups },
    });

    let submit_state = Rc::clone(state);
    listen(&form, "submit", move |event: Event| {
        event.prevent_default();
        let sending = submit_state.borrow_mut().submit_contact();
        if let Some(delay) = sending {
            let complete_state = Rc::clone(&submit_state);
            defer(delay, move || complete_state.borrow_mut().complete_contact());
        }
    })
}

/// Current value of an `<input>` or `<textarea>`.
fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_form(form: &HtmlFormElement) -> Result<ContactForm, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut contact = ContactForm::default();
    for field in Field::REQUIRED {
        let value = data.get(field.name()).as_string().unwrap_or_default();
        contact.set(field.name(), value);
    }
    Ok(contact)
}
