// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page controller.
//!
//! [`Page`] is the one owner of mutable page state. Backends hold it behind a
//! single `Rc<RefCell<_>>` and call into it from event handlers; it answers
//! with effects and small decision structs, never touching the DOM itself.

use alloc::vec::Vec;

use crate::config::FolioConfig;
use crate::effect::{Effect, ElementId};
use crate::form::{ContactForm, FormElements, SubmitOutcome, Submitter};
use crate::loading::LoadingSchedule;
use crate::motion::{CursorFollower, Parallax, ParallaxOffsets};
use crate::nav::{NavbarAutoHide, NavbarPosition};
use crate::notify::NotificationTimeline;
use crate::rate::{Debounce, Throttle};
use crate::reveal::RevealController;
use crate::time::HostTime;
use crate::trace::{FormEvent, FormOutcome, LoadingEvent, LoadingStage, MenuEvent, Tracer};
use crate::ui::{MenuElements, UiState};

/// What a scroll event asks the backend to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollResponse {
    /// Navbar position for the new scroll depth.
    pub navbar: NavbarPosition,
    /// Whether the throttled handler runs: recompute the active nav link.
    pub track_active: bool,
    /// Whether to request an animation frame for parallax.
    pub request_parallax: bool,
}

/// Single owner of page state.
#[derive(Debug)]
pub struct Page {
    config: FolioConfig,
    ui: UiState,
    reveal: RevealController,
    scroll_throttle: Throttle,
    resize_debounce: Debounce,
    navbar: NavbarAutoHide,
    parallax: Parallax,
    cursor: CursorFollower,
    submitter: Submitter,
}

impl Page {
    /// Creates the controller in its initial loading state.
    #[must_use]
    pub fn new(config: FolioConfig) -> Self {
        Self {
            ui: UiState::new(),
            reveal: RevealController::new(config.reveal),
            scroll_throttle: Throttle::new(config.timing.scroll_throttle),
            resize_debounce: Debounce::new(config.timing.resize_debounce),
            navbar: NavbarAutoHide::new(&config.motion),
            parallax: Parallax::new(&config.motion),
            cursor: CursorFollower::new(config.motion.cursor_follow),
            submitter: Submitter::new(config.timing.form_submit_delay),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// Returns the UI flags.
    #[must_use]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Returns the reveal controller.
    #[must_use]
    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    /// Returns the reveal controller for registration and intersection batches.
    pub fn reveal_mut(&mut self) -> &mut RevealController {
        &mut self.reveal
    }

    /// Returns the cursor follower.
    pub fn cursor_mut(&mut self) -> &mut CursorFollower {
        &mut self.cursor
    }

    /// Loading screen timeline.
    #[must_use]
    pub fn loading_schedule(&self) -> LoadingSchedule {
        LoadingSchedule::from_config(&self.config.timing)
    }

    /// Notification timeline.
    #[must_use]
    pub fn notification_timeline(&self) -> NotificationTimeline {
        NotificationTimeline::from_config(&self.config.timing)
    }

    /// Fades the loading screen.
    pub fn fade_loading(&mut self, screen: ElementId, tracer: &mut Tracer<'_>) -> Vec<Effect> {
        let effects = self.loading_schedule().fade(screen, &mut self.ui);
        tracer.loading(&LoadingEvent {
            stage: LoadingStage::FadeOut,
        });
        effects
    }

    /// Marks loading finished when there is no loading screen to fade.
    pub fn skip_loading(&mut self) {
        self.ui.finish_loading();
    }

    /// Handles a raw scroll event at `now`, scrolled to `y`.
    pub fn on_scroll(&mut self, now: HostTime, y: f64) -> ScrollResponse {
        let navbar = self.navbar.update(y);
        let track_active = self.scroll_throttle.try_acquire(now);
        if track_active {
            self.ui.set_scroll(y);
        }
        ScrollResponse {
            navbar,
            track_active,
            request_parallax: self.parallax.request(),
        }
    }

    /// Completes the pending parallax frame.
    pub fn parallax_frame(&mut self, y: f64) -> ParallaxOffsets {
        self.parallax.complete(y)
    }

    /// Handles a raw resize event; returns when the settled handler is due.
    pub fn on_resize(&mut self, now: HostTime) -> HostTime {
        self.resize_debounce.trigger(now)
    }

    /// Runs the debounced resize handler if it is due at `now`.
    ///
    /// Closes the mobile menu when the viewport grew past the breakpoint.
    pub fn on_resize_settled(
        &mut self,
        now: HostTime,
        viewport_width: f64,
        menu: Option<MenuElements>,
        tracer: &mut Tracer<'_>,
    ) -> Vec<Effect> {
        if !self.resize_debounce.fire(now) {
            return Vec::new();
        }
        match menu {
            Some(menu)
                if self
                    .ui
                    .should_close_on_resize(viewport_width, self.config.motion.mobile_breakpoint) =>
            {
                self.close_menu(menu, tracer)
            }
            _ => Vec::new(),
        }
    }

    /// Opens or closes the mobile menu.
    pub fn toggle_menu(&mut self, menu: MenuElements, tracer: &mut Tracer<'_>) -> Vec<Effect> {
        let effects = self.ui.toggle_menu(menu);
        tracer.menu(&MenuEvent {
            open: self.ui.is_menu_open(),
        });
        effects
    }

    /// Closes the mobile menu if open.
    pub fn close_menu(&mut self, menu: MenuElements, tracer: &mut Tracer<'_>) -> Vec<Effect> {
        let effects = self.ui.close_menu(menu);
        if !effects.is_empty() {
            tracer.menu(&MenuEvent { open: false });
        }
        effects
    }

    /// Starts a contact form submission.
    pub fn submit_form(
        &mut self,
        form: &ContactForm,
        elements: &FormElements,
        tracer: &mut Tracer<'_>,
    ) -> SubmitOutcome {
        let outcome = self.submitter.submit(form, elements);
        let step = match outcome {
            SubmitOutcome::Rejected(_) => Some(FormOutcome::Rejected),
            SubmitOutcome::Sending { .. } => Some(FormOutcome::Sending),
            SubmitOutcome::Busy => None,
        };
        if let Some(outcome) = step {
            tracer.form(&FormEvent { outcome });
        }
        outcome
    }

    /// Finishes the simulated send.
    ///
    /// Returns `None` if no send was in flight.
    pub fn complete_form(
        &mut self,
        elements: &FormElements,
        tracer: &mut Tracer<'_>,
    ) -> Option<Vec<Effect>> {
        let effects = self.submitter.complete(elements)?;
        tracer.form(&FormEvent {
            outcome: FormOutcome::Completed,
        });
        Some(effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::SubmitButton;
    use crate::time::Duration;

    const MENU: MenuElements = MenuElements {
        toggle: ElementId(1),
        menu: ElementId(2),
        body: ElementId(0),
    };

    fn page() -> Page {
        Page::new(FolioConfig::web())
    }

    #[test]
    fn scroll_handler_runs_once_per_throttle_window() {
        let mut page = page();
        let mut runs = 0;
        // A burst every 2ms for 100ms.
        for i in 0..50_u64 {
            let r = page.on_scroll(HostTime::from_millis(i * 2), (i * 10) as f64);
            if r.track_active {
                runs += 1;
            }
        }
        // Windows open at 0, 16, 32, 48, 64, 80, 96.
        assert_eq!(runs, 7);
    }

    #[test]
    fn navbar_is_updated_on_every_scroll() {
        let mut page = page();
        page.on_scroll(HostTime::from_millis(0), 50.0);
        let r = page.on_scroll(HostTime::from_millis(1), 400.0);
        assert!(!r.track_active, "inside the throttle window");
        assert_eq!(r.navbar, NavbarPosition::Hidden);
    }

    #[test]
    fn parallax_frames_are_coalesced() {
        let mut page = page();
        assert!(page.on_scroll(HostTime::ZERO, 10.0).request_parallax);
        assert!(!page.on_scroll(HostTime::from_millis(20), 20.0).request_parallax);
        let offsets = page.parallax_frame(20.0);
        assert_eq!(offsets.background, -10.0);
        assert!(page.on_scroll(HostTime::from_millis(40), 30.0).request_parallax);
    }

    #[test]
    fn resize_closes_menu_once_after_quiet_period() {
        let mut page = page();
        page.toggle_menu(MENU, &mut Tracer::none());

        let mut deadline = HostTime::ZERO;
        for t in [0, 50, 120] {
            deadline = page.on_resize(HostTime::from_millis(t));
        }
        assert_eq!(deadline, HostTime::from_millis(370));

        let early = page.on_resize_settled(
            HostTime::from_millis(250),
            1200.0,
            Some(MENU),
            &mut Tracer::none(),
        );
        assert!(early.is_empty());
        assert!(page.ui().is_menu_open());

        let settled = page.on_resize_settled(deadline, 1200.0, Some(MENU), &mut Tracer::none());
        assert!(!settled.is_empty());
        assert!(!page.ui().is_menu_open());

        let again = page.on_resize_settled(
            deadline + Duration::from_millis(1),
            1200.0,
            Some(MENU),
            &mut Tracer::none(),
        );
        assert!(again.is_empty(), "handler fired once");
    }

    #[test]
    fn narrow_resize_keeps_menu_open() {
        let mut page = page();
        page.toggle_menu(MENU, &mut Tracer::none());
        let deadline = page.on_resize(HostTime::ZERO);
        let settled = page.on_resize_settled(deadline, 600.0, Some(MENU), &mut Tracer::none());
        assert!(settled.is_empty());
        assert!(page.ui().is_menu_open());
    }

    #[test]
    fn form_round_trip() {
        let mut page = page();
        let elements = FormElements {
            submit: Some(SubmitButton {
                button: ElementId(1),
                label: ElementId(2),
                idle_label: "Send".into(),
            }),
            groups: Vec::new(),
        };

        let empty = page.submit_form(&ContactForm::default(), &elements, &mut Tracer::none());
        assert!(matches!(empty, SubmitOutcome::Rejected(_)));

        let form = ContactForm {
            name: "Ada".into(),
            email: "a@b.co".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        let sending = page.submit_form(&form, &elements, &mut Tracer::none());
        assert!(matches!(
            sending,
            SubmitOutcome::Sending { complete_after, .. } if complete_after.as_millis() == 1500
        ));
        let reset = page
            .complete_form(&elements, &mut Tracer::none())
            .expect("send in flight");
        assert!(!reset.is_empty());
        assert!(page.complete_form(&elements, &mut Tracer::none()).is_none());
    }

    #[test]
    fn loading_fade_clears_flag() {
        let mut page = page();
        assert!(page.ui().is_loading());
        page.fade_loading(ElementId(9), &mut Tracer::none());
        assert!(!page.ui().is_loading());
        assert_eq!(page.loading_schedule().entrance_at().as_millis(), 3300);
    }

    #[test]
    fn skipping_loading_clears_flag() {
        let mut page = page();
        page.skip_loading();
        assert!(!page.ui().is_loading());
    }
}
