// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console output.
//!
//! [`ConsoleLogger`] routes the `log` facade to `console.*`, picking the
//! console method from the record level so devtools filtering works.
//! [`LogSink`] turns controller trace events into `log` records.

use alloc::format;

use folio_core::trace::{
    FormEvent, LoadingEvent, MenuEvent, NotificationEvent, PageEvent, RevealEvent, TraceSink,
};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

/// A [`Log`] implementation writing to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs [`ConsoleLogger`] as the global logger.
///
/// Fails if another logger was installed first.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// A [`TraceSink`] that forwards events to the `log` facade.
///
/// User-visible milestones log at `info`, the rest at `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn on_reveal(&mut self, e: &RevealEvent) {
        log::debug!(
            "revealed {:?} ({:?}, {} staggered over {} ms)",
            e.target,
            e.kind,
            e.staggered,
            e.span.as_millis()
        );
    }

    fn on_menu(&mut self, e: &MenuEvent) {
        log::debug!("mobile menu {}", if e.open { "opened" } else { "closed" });
    }

    fn on_notification(&mut self, e: &NotificationEvent<'_>) {
        log::info!("notification ({:?}): {}", e.kind, e.message);
    }

    fn on_form(&mut self, e: &FormEvent) {
        log::info!("contact form: {:?}", e.outcome);
    }

    fn on_loading(&mut self, e: &LoadingEvent) {
        log::debug!("loading screen: {:?}", e.stage);
    }

    fn on_page(&mut self, e: &PageEvent) {
        match e {
            PageEvent::Initialized => log::info!("portfolio initialized"),
            PageEvent::Loaded { at } => {
                log::info!("page loaded in {:.0} ms", at.as_millis_f64());
            }
            PageEvent::VisibilityChanged { hidden } => {
                log::debug!("page {}", if *hidden { "hidden" } else { "visible" });
            }
        }
    }
}
