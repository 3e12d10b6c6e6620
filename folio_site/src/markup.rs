// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page markup contract: element ids and selectors.

pub(crate) const CURSOR_ID: &str = "cursor";
pub(crate) const LOADING_SCREEN_ID: &str = "loadingScreen";
pub(crate) const NAV_TOGGLE_ID: &str = "navToggle";
pub(crate) const MOBILE_MENU_ID: &str = "mobileMenu";
pub(crate) const CLOSE_MOBILE_MENU_ID: &str = "closeMobileMenu";
pub(crate) const CONTACT_FORM_ID: &str = "contactForm";

pub(crate) const NAVBAR: &str = ".navbar";
pub(crate) const NAV_LINK: &str = ".nav-link";
pub(crate) const ANY_NAV_LINK: &str = ".nav-link, .mobile-nav-link";
pub(crate) const SCROLL_BUTTONS: &str = ".cta-button, .scroll-indicator";
pub(crate) const LINKED_SECTIONS: &str = "section[id]";

pub(crate) const WORK_ITEM: &str = ".work-item";
pub(crate) const WORK_IMAGE: &str = ".work-image img, .work-placeholder";
pub(crate) const CURSOR_TARGETS: &str = "a, button, .work-item, .skill-tag";

/// Plain sections tagged for reveal.
pub(crate) const REVEAL_SECTIONS: &str =
    ".section-header, .work-item, .about-content, .contact-content, .skills-section";
pub(crate) const WORK_GRID: &str = ".work-grid";
pub(crate) const SKILLS_GRID: &str = ".skills-grid";
pub(crate) const SKILL_CATEGORY: &str = ".skill-category";
pub(crate) const SKILL_TAG: &str = ".skill-tag";

pub(crate) const HERO_BG: &str = ".hero-bg";
pub(crate) const HERO_CONTENT: &str = ".hero-content";
pub(crate) const HERO_LABEL: &str = ".hero-label";
pub(crate) const HERO_TITLE_LINE: &str = ".hero-title-line";
pub(crate) const HERO_DESCRIPTION: &str = ".hero-description";
pub(crate) const HERO_CTA: &str = ".hero-cta";
pub(crate) const HERO_SCROLL: &str = ".hero-scroll";

pub(crate) const FORM_GROUP: &str = ".form-group";
pub(crate) const FORM_INPUT: &str = "input, textarea";
pub(crate) const SUBMIT_BUTTON: &str = ".submit-button";
pub(crate) const SUBMIT_LABEL: &str = "span";

/// Selector for the elements of one entrance part.
pub(crate) const fn entrance_selector(part: folio_core::stagger::EntrancePart) -> &'static str {
    use folio_core::stagger::EntrancePart;
    match part {
        EntrancePart::HeroLabel => HERO_LABEL,
        EntrancePart::HeroTitleLine => HERO_TITLE_LINE,
        EntrancePart::HeroDescription => HERO_DESCRIPTION,
        EntrancePart::HeroCta => HERO_CTA,
        EntrancePart::HeroScroll => HERO_SCROLL,
        EntrancePart::Navbar => NAVBAR,
    }
}
