// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer hover feedback.

use crate::effect::{Effect, ElementId, Mutation};
use crate::ui::ACTIVE_CLASS;

/// Image scale while its work item is hovered.
pub const HOVER_SCALE: &str = "scale(1.05)";

/// Image scale at rest.
pub const REST_SCALE: &str = "scale(1)";

/// Zooms a work item's image in or back out.
#[must_use]
pub fn work_item_hover(image: ElementId, hovered: bool) -> Effect {
    Effect::style(image, "transform", if hovered { HOVER_SCALE } else { REST_SCALE })
}

/// Marks the custom cursor active while it is over an interactive element.
#[must_use]
pub fn cursor_hover(cursor: ElementId, hovered: bool) -> Effect {
    let mutation = if hovered {
        Mutation::AddClass(ACTIVE_CLASS)
    } else {
        Mutation::RemoveClass(ACTIVE_CLASS)
    };
    Effect::now(cursor, mutation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_zooms_and_restores() {
        let img = ElementId(4);
        assert_eq!(
            work_item_hover(img, true).mutation,
            Mutation::SetStyle("transform", HOVER_SCALE.into())
        );
        assert_eq!(
            work_item_hover(img, false).mutation,
            Mutation::SetStyle("transform", REST_SCALE.into())
        );
    }

    #[test]
    fn cursor_toggles_active() {
        let cursor = ElementId(0);
        assert_eq!(cursor_hover(cursor, true).mutation, Mutation::AddClass("active"));
        assert_eq!(cursor_hover(cursor, false).mutation, Mutation::RemoveClass("active"));
        assert!(cursor_hover(cursor, true).is_immediate());
    }
}
