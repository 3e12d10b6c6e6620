// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Staggered reveal delays and the hero entrance timeline.

use alloc::vec::Vec;

use crate::effect::{Effect, ElementId};
use crate::time::Duration;

/// Delay of the `index`-th sibling in a stagger group.
#[inline]
#[must_use]
pub fn stagger_delay(index: usize, interval: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    interval * index
}

/// One group of elements animated in after the loading screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntrancePart {
    /// Small label above the hero title.
    HeroLabel,
    /// Each line of the hero title, staggered.
    HeroTitleLine,
    /// Hero paragraph.
    HeroDescription,
    /// Hero call-to-action.
    HeroCta,
    /// "Scroll" hint at the bottom of the hero.
    HeroScroll,
    /// Top navigation bar.
    Navbar,
}

impl EntrancePart {
    /// Every part, in timeline order.
    pub const ALL: [Self; 6] = [
        Self::HeroLabel,
        Self::HeroTitleLine,
        Self::HeroDescription,
        Self::HeroCta,
        Self::HeroScroll,
        Self::Navbar,
    ];

    /// Delay of the first element in this part, from the end of loading.
    #[must_use]
    pub const fn base_delay(self) -> Duration {
        match self {
            Self::HeroLabel => Duration::from_millis(0),
            Self::HeroTitleLine => Duration::from_millis(100),
            Self::HeroDescription => Duration::from_millis(600),
            Self::HeroCta => Duration::from_millis(800),
            Self::HeroScroll => Duration::from_millis(1000),
            Self::Navbar => Duration::from_millis(200),
        }
    }

    /// Whether elements of this part are staggered by index.
    #[must_use]
    pub const fn is_staggered(self) -> bool {
        matches!(self, Self::HeroTitleLine)
    }
}

/// Builds the entrance effects for the given parts.
///
/// Every element gets [`Mutation::Show`](crate::effect::Mutation::Show) at its
/// part's base delay, plus `index × stagger` for staggered parts. Parts with
/// no elements contribute nothing.
#[must_use]
pub fn entrance_plan(parts: &[(EntrancePart, Vec<ElementId>)], stagger: Duration) -> Vec<Effect> {
    let mut effects = Vec::new();
    for (part, elements) in parts {
        for (i, &el) in elements.iter().enumerate() {
            let offset = if part.is_staggered() {
                stagger_delay(i, stagger)
            } else {
                Duration::ZERO
            };
            effects.push(Effect::show(el, part.base_delay() + offset));
        }
    }
    effects
}
