// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element management.
//!
//! Maps [`ElementId`] slots to live elements and applies [`Effect`]s to them.
//! Immediate effects are applied in order; delayed ones are handed to
//! [`defer`](crate::defer) with a clone of the element handle.

use alloc::string::ToString;
use alloc::vec::Vec;

use folio_core::backend::Presenter;
use folio_core::effect::{Effect, ElementId, Mutation};
use web_sys::HtmlElement;

use crate::timer::defer;

/// Attribute carrying an element's slot index.
///
/// Set on registration so observer entries can be mapped back to slots.
pub const SLOT_ATTRIBUTE: &str = "data-folio-slot";

/// Owns the page elements that controllers refer to by [`ElementId`].
pub struct DomPresenter {
    elements: Vec<Option<HtmlElement>>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("elements_len", &self.elements.len())
            .finish()
    }
}

impl Default for DomPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl DomPresenter {
    /// Creates an empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Registers `el` and returns its slot.
    ///
    /// Registering the same element twice returns the existing slot.
    pub fn register(&mut self, el: HtmlElement) -> ElementId {
        if let Some(id) = crate::parse_slot(el.get_attribute(SLOT_ATTRIBUTE).as_deref())
            && self.get_element(id).is_some_and(|known| *known == el)
        {
            return id;
        }
        let idx = u32::try_from(self.elements.len()).unwrap_or(u32::MAX);
        let _ = el.set_attribute(SLOT_ATTRIBUTE, &idx.to_string());
        self.elements.push(Some(el));
        ElementId(idx)
    }

    /// Returns the DOM element for the given slot, if it exists.
    #[must_use]
    pub fn get_element(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements
            .get(id.index() as usize)
            .and_then(|slot| slot.as_ref())
    }

    /// Forgets the element in `id`'s slot and returns it.
    ///
    /// The slot is not reused.
    pub fn release(&mut self, id: ElementId) -> Option<HtmlElement> {
        let el = self.elements.get_mut(id.index() as usize)?.take()?;
        let _ = el.remove_attribute(SLOT_ATTRIBUTE);
        Some(el)
    }

    /// Number of live slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` if no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Presenter for DomPresenter {
    fn apply(&mut self, effects: &[Effect]) {
        for effect in effects {
            let Some(el) = self.get_element(effect.target) else {
                log::debug!("effect for unknown element {:?} dropped", effect.target);
                continue;
            };
            if effect.is_immediate() {
                apply_mutation(el, &effect.mutation);
            } else {
                let el = el.clone();
                let mutation = effect.mutation.clone();
                defer(effect.delay, move || apply_mutation(&el, &mutation));
            }
        }
    }
}

/// Applies one mutation to `el`.
///
/// DOM exceptions (invalid attribute names and the like) are ignored.
pub(crate) fn apply_mutation(el: &HtmlElement, mutation: &Mutation) {
    match mutation {
        Mutation::AddClass(class) => {
            let _ = el.class_list().add_1(class);
        }
        Mutation::RemoveClass(class) => {
            let _ = el.class_list().remove_1(class);
        }
        Mutation::ToggleClass(class, on) => {
            let _ = el.class_list().toggle_with_force(class, *on);
        }
        Mutation::SetStyle(property, value) => {
            let _ = el.style().set_property(property, value);
        }
        Mutation::RemoveStyle(property) => {
            let _ = el.style().remove_property(property);
        }
        Mutation::SetAttribute(name, value) => {
            let _ = el.set_attribute(name, value);
        }
        Mutation::RemoveAttribute(name) => {
            let _ = el.remove_attribute(name);
        }
        Mutation::SetText(text) => {
            el.set_text_content(Some(text));
        }
        Mutation::Show => {
            let s = el.style();
            let _ = s.set_property("opacity", "1");
            let _ = s.set_property("transform", "translateY(0)");
        }
    }
}
