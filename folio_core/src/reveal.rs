// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility-triggered reveal animations.
//!
//! [`RevealController`] tracks every watched section through a one-way state
//! machine:
//!
//! ```text
//!   register ──► Pending ──(intersecting ≥ threshold)──► InView (terminal)
//! ```
//!
//! Registration tags the element with [`REVEAL_CLASS`] (the pre-visible
//! state). The first qualifying [`Intersection`] adds [`IN_VIEW_CLASS`] and
//! asks the backend to stop observing the element. Grid sections also release
//! a staggered [`Mutation::Show`] of their items:
//!
//! - work grids: item *i* at `i × grid_stagger`;
//! - skill grids: category *c* at `c × grid_stagger`, and its tag *t* at
//!   `c × grid_stagger + t × tag_stagger`.
//!
//! Unknown ids, duplicate registrations, and entries for sections that are
//! already in view are ignored.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::config::RevealConfig;
use crate::effect::{Effect, ElementId, Mutation};
use crate::stagger::stagger_delay;
use crate::time::Duration;
use crate::trace::{RevealEvent, Tracer};

/// Class added on registration: opacity 0 and an offset position.
pub const REVEAL_CLASS: &str = "fade-up";

/// Class added when a section enters the viewport.
pub const IN_VIEW_CLASS: &str = "in-view";

/// Slack allowed below the threshold when comparing intersection ratios.
///
/// Browsers report crossing ratios with float noise (e.g. `0.0999`).
const RATIO_EPSILON: f64 = 1e-3;

/// What a watched section contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// No children are animated.
    Plain,
    /// Grid of work items, staggered one by one.
    WorkGrid,
    /// Grid of skill categories, each staggering its own tags.
    SkillsGrid,
}

impl SectionKind {
    /// Returns `true` for kinds that stagger their children.
    #[must_use]
    pub const fn is_grid(self) -> bool {
        matches!(self, Self::WorkGrid | Self::SkillsGrid)
    }
}

/// Visibility state of a watched section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Registered, not yet seen.
    Pending,
    /// Seen at least once. Terminal.
    InView,
}

/// One entry of an intersection callback batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Element the entry describes.
    pub target: ElementId,
    /// Whether the element intersects the (margin-adjusted) viewport.
    pub is_intersecting: bool,
    /// Visible fraction of the element (0.0–1.0).
    pub ratio: f64,
}

/// Output of [`RevealController::observe`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealBatch {
    /// Effects to hand to the presenter.
    pub effects: Vec<Effect>,
    /// Elements that reached their terminal state and need no more entries.
    pub unobserve: Vec<ElementId>,
}

impl RevealBatch {
    /// Returns `true` if nothing was revealed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.unobserve.is_empty()
    }
}

#[derive(Debug)]
struct GridItem {
    id: ElementId,
    tags: Vec<ElementId>,
}

#[derive(Debug)]
struct Section {
    kind: SectionKind,
    state: RevealState,
    items: Vec<GridItem>,
}

/// Tracks watched sections and turns intersection batches into reveals.
#[derive(Debug)]
pub struct RevealController {
    config: RevealConfig,
    sections: BTreeMap<ElementId, Section>,
}

impl RevealController {
    /// Creates a controller with no watched sections.
    #[must_use]
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            sections: BTreeMap::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Starts watching `id`.
    ///
    /// Returns the effect tagging the element with [`REVEAL_CLASS`], or
    /// `None` if `id` is already watched.
    pub fn register(&mut self, id: ElementId, kind: SectionKind) -> Option<Effect> {
        if self.sections.contains_key(&id) {
            return None;
        }
        self.sections.insert(
            id,
            Section {
                kind,
                state: RevealState::Pending,
                items: Vec::new(),
            },
        );
        Some(Effect::now(id, Mutation::AddClass(REVEAL_CLASS)))
    }

    /// Appends `item` to the stagger group of grid `section`.
    ///
    /// Returns `false` if `section` is not a watched grid.
    pub fn add_item(&mut self, section: ElementId, item: ElementId) -> bool {
        match self.sections.get_mut(&section) {
            Some(s) if s.kind.is_grid() => {
                s.items.push(GridItem {
                    id: item,
                    tags: Vec::new(),
                });
                true
            }
            _ => false,
        }
    }

    /// Appends `tag` to the category `item` inside skills grid `section`.
    ///
    /// Returns `false` if `section` is not a watched skills grid or `item` is
    /// not one of its categories.
    pub fn add_tag(&mut self, section: ElementId, item: ElementId, tag: ElementId) -> bool {
        let Some(s) = self.sections.get_mut(&section) else {
            return false;
        };
        if s.kind != SectionKind::SkillsGrid {
            return false;
        }
        match s.items.iter_mut().find(|it| it.id == item) {
            Some(category) => {
                category.tags.push(tag);
                true
            }
            None => false,
        }
    }

    /// Returns the state of a watched section.
    #[must_use]
    pub fn state(&self, id: ElementId) -> Option<RevealState> {
        self.sections.get(&id).map(|s| s.state)
    }

    /// Number of sections still waiting to be revealed.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.sections
            .values()
            .filter(|s| s.state == RevealState::Pending)
            .count()
    }

    /// Processes one intersection callback batch.
    pub fn observe(&mut self, entries: &[Intersection], tracer: &mut Tracer<'_>) -> RevealBatch {
        let threshold = self.config.threshold - RATIO_EPSILON;
        let grid_step = self.config.grid_stagger;
        let tag_step = self.config.tag_stagger;
        let mut batch = RevealBatch::default();

        for entry in entries {
            if !entry.is_intersecting || entry.ratio < threshold {
                continue;
            }
            let Some(section) = self.sections.get_mut(&entry.target) else {
                continue;
            };
            if section.state == RevealState::InView {
                continue;
            }
            section.state = RevealState::InView;
            batch
                .effects
                .push(Effect::now(entry.target, Mutation::AddClass(IN_VIEW_CLASS)));
            batch.unobserve.push(entry.target);

            let before = batch.effects.len();
            let span = match section.kind {
                SectionKind::Plain => Duration::ZERO,
                SectionKind::WorkGrid => {
                    stagger_items(&section.items, grid_step, &mut batch.effects)
                }
                SectionKind::SkillsGrid => {
                    stagger_categories(&section.items, grid_step, tag_step, &mut batch.effects)
                }
            };
            tracer.reveal(&RevealEvent {
                target: entry.target,
                kind: section.kind,
                staggered: u32::try_from(batch.effects.len() - before).unwrap_or(u32::MAX),
                span,
            });
        }
        batch
    }
}

/// Shows each item at `i × step`; returns the last delay.
fn stagger_items(items: &[GridItem], step: Duration, out: &mut Vec<Effect>) -> Duration {
    let mut span = Duration::ZERO;
    for (i, item) in items.iter().enumerate() {
        span = stagger_delay(i, step);
        out.push(Effect::show(item.id, span));
    }
    span
}

/// Shows each category at `c × step` and its tags `t × tag_step` later;
/// returns the last delay.
fn stagger_categories(
    categories: &[GridItem],
    step: Duration,
    tag_step: Duration,
    out: &mut Vec<Effect>,
) -> Duration {
    let mut span = Duration::ZERO;
    for (c, category) in categories.iter().enumerate() {
        let base = stagger_delay(c, step);
        out.push(Effect::show(category.id, base));
        span = span.max(base);
        for (t, &tag) in category.tags.iter().enumerate() {
            let delay = base + stagger_delay(t, tag_step);
            out.push(Effect::show(tag, delay));
            span = span.max(delay);
        }
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: u32) -> Intersection {
        Intersection {
            target: ElementId(id),
            is_intersecting: true,
            ratio: 0.5,
        }
    }

    fn controller() -> RevealController {
        RevealController::new(RevealConfig::web())
    }

    fn shows(batch: &RevealBatch) -> Vec<(u32, u64)> {
        batch
            .effects
            .iter()
            .filter(|e| e.mutation == Mutation::Show)
            .map(|e| (e.target.0, e.delay.as_millis()))
            .collect()
    }

    #[test]
    fn register_tags_with_reveal_class_once() {
        let mut rc = controller();
        let first = rc.register(ElementId(1), SectionKind::Plain);
        assert_eq!(
            first,
            Some(Effect::now(ElementId(1), Mutation::AddClass(REVEAL_CLASS)))
        );
        assert_eq!(rc.register(ElementId(1), SectionKind::WorkGrid), None);
        assert_eq!(rc.state(ElementId(1)), Some(RevealState::Pending));
    }

    #[test]
    fn plain_section_reveals_once() {
        let mut rc = controller();
        rc.register(ElementId(1), SectionKind::Plain);

        let batch = rc.observe(&[hit(1)], &mut Tracer::none());
        assert_eq!(
            batch.effects,
            [Effect::now(ElementId(1), Mutation::AddClass(IN_VIEW_CLASS))]
        );
        assert_eq!(batch.unobserve, [ElementId(1)]);
        assert_eq!(rc.state(ElementId(1)), Some(RevealState::InView));

        let again = rc.observe(&[hit(1)], &mut Tracer::none());
        assert!(again.is_empty(), "in-view is terminal");
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut rc = controller();
        rc.register(ElementId(1), SectionKind::Plain);

        let entries = [
            Intersection {
                target: ElementId(1),
                is_intersecting: true,
                ratio: 0.05,
            },
            Intersection {
                target: ElementId(1),
                is_intersecting: false,
                ratio: 0.0,
            },
        ];
        assert!(rc.observe(&entries, &mut Tracer::none()).is_empty());
        assert_eq!(rc.state(ElementId(1)), Some(RevealState::Pending));
        assert_eq!(rc.pending_count(), 1);
    }

    #[test]
    fn ratio_noise_at_threshold_counts() {
        let mut rc = controller();
        rc.register(ElementId(1), SectionKind::Plain);
        let entry = Intersection {
            target: ElementId(1),
            is_intersecting: true,
            ratio: 0.0999,
        };
        assert!(!rc.observe(&[entry], &mut Tracer::none()).is_empty());
    }

    #[test]
    fn leaving_the_viewport_never_hides() {
        let mut rc = controller();
        rc.register(ElementId(1), SectionKind::Plain);
        rc.observe(&[hit(1)], &mut Tracer::none());
        let gone = Intersection {
            target: ElementId(1),
            is_intersecting: false,
            ratio: 0.0,
        };
        assert!(rc.observe(&[gone], &mut Tracer::none()).is_empty());
        assert_eq!(rc.state(ElementId(1)), Some(RevealState::InView));
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let mut rc = controller();
        assert!(rc.observe(&[hit(42)], &mut Tracer::none()).is_empty());
    }

    #[test]
    fn work_grid_staggers_items_by_200ms() {
        let mut rc = controller();
        rc.register(ElementId(10), SectionKind::WorkGrid);
        for id in 11..=14 {
            assert!(rc.add_item(ElementId(10), ElementId(id)));
        }

        let batch = rc.observe(&[hit(10)], &mut Tracer::none());
        assert_eq!(shows(&batch), [(11, 0), (12, 200), (13, 400), (14, 600)]);
    }

    #[test]
    fn skills_grid_nests_tag_delays_under_category() {
        let mut rc = controller();
        let grid = ElementId(20);
        rc.register(grid, SectionKind::SkillsGrid);
        rc.add_item(grid, ElementId(21));
        rc.add_item(grid, ElementId(22));
        rc.add_tag(grid, ElementId(21), ElementId(30));
        rc.add_tag(grid, ElementId(21), ElementId(31));
        rc.add_tag(grid, ElementId(22), ElementId(32));
        rc.add_tag(grid, ElementId(22), ElementId(33));
        rc.add_tag(grid, ElementId(22), ElementId(34));

        let batch = rc.observe(&[hit(20)], &mut Tracer::none());
        assert_eq!(
            shows(&batch),
            [
                (21, 0),
                (30, 0),
                (31, 50),
                (22, 200),
                (32, 200),
                (33, 250),
                (34, 300),
            ]
        );
    }

    #[test]
    fn items_only_attach_to_grids() {
        let mut rc = controller();
        rc.register(ElementId(1), SectionKind::Plain);
        rc.register(ElementId(2), SectionKind::WorkGrid);
        assert!(!rc.add_item(ElementId(1), ElementId(3)));
        assert!(!rc.add_item(ElementId(9), ElementId(3)));
        assert!(rc.add_item(ElementId(2), ElementId(3)));
        assert!(!rc.add_tag(ElementId(2), ElementId(3), ElementId(4)));
    }

    #[test]
    fn one_batch_reveals_many_sections() {
        let mut rc = controller();
        for id in 1..=3 {
            rc.register(ElementId(id), SectionKind::Plain);
        }
        let batch = rc.observe(&[hit(1), hit(3), hit(1)], &mut Tracer::none());
        assert_eq!(batch.unobserve, [ElementId(1), ElementId(3)]);
        assert_eq!(rc.pending_count(), 1);
    }
}
