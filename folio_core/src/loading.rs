// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading screen timeline.
//!
//! The screen holds for a fixed time, fades out, and is hidden once the fade
//! completes. Hiding it releases the entrance cues from
//! [`stagger::entrance_plan`](crate::stagger::entrance_plan).

use alloc::vec::Vec;

use crate::config::TimingConfig;
use crate::effect::{Effect, ElementId, Mutation};
use crate::time::Duration;
use crate::ui::UiState;

/// Class starting the loading screen fade.
pub const FADE_OUT_CLASS: &str = "fade-out";

/// Loading screen timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingSchedule {
    /// Delay from start-up until the fade begins.
    pub fade_at: Duration,
    /// Delay from the fade until the screen is hidden.
    pub hide_after: Duration,
}

impl LoadingSchedule {
    /// Builds the schedule from the configured durations.
    #[must_use]
    pub const fn from_config(timing: &TimingConfig) -> Self {
        Self {
            fade_at: timing.loading_hold,
            hide_after: timing.loading_fade,
        }
    }

    /// Total time until the entrance cues start.
    #[must_use]
    pub const fn entrance_at(&self) -> Duration {
        self.fade_at.saturating_add(self.hide_after)
    }

    /// Starts the fade and marks loading finished.
    pub fn fade(&self, screen: ElementId, ui: &mut UiState) -> Vec<Effect> {
        ui.finish_loading();
        alloc::vec![Effect::now(screen, Mutation::AddClass(FADE_OUT_CLASS))]
    }

    /// Hides the faded screen.
    #[must_use]
    pub fn hide(&self, screen: ElementId) -> Vec<Effect> {
        alloc::vec![Effect::style(screen, "display", "none")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_after_hold_and_fade() {
        let schedule = LoadingSchedule::from_config(&TimingConfig::web());
        assert_eq!(schedule.fade_at.as_millis(), 2500);
        assert_eq!(schedule.entrance_at().as_millis(), 3300);
    }

    #[test]
    fn fade_finishes_loading() {
        let schedule = LoadingSchedule::from_config(&TimingConfig::web());
        let mut ui = UiState::new();
        let effects = schedule.fade(ElementId(7), &mut ui);
        assert!(!ui.is_loading());
        assert_eq!(
            effects,
            [Effect::now(ElementId(7), Mutation::AddClass(FADE_OUT_CLASS))]
        );
        assert_eq!(
            schedule.hide(ElementId(7)),
            [Effect::style(ElementId(7), "display", "none")]
        );
    }
}
