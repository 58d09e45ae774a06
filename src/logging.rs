//! Console logging bootstrap.
//!
//! Core modules log through the `log` facade. In the browser this module
//! routes records to `console.*`; native builds (tests) install nothing, so
//! the macros are no-ops there.
//!
//! # Invariants
//! - Installation happens at most once; later calls only change the level.
//! - Logging setup never panics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = JsValue::from_str(&format!("[{}] {}", record.level(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub fn parse_level(level: &str) -> Result<LevelFilter, String> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("unsupported log level `{}`", level))
}

/// Install the console logger (once) and set the level.
pub fn init_console_logging(level: LevelFilter) {
    // Err only means a logger is already installed; keep it and adjust the level.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Change the console log level from JS.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level = parse_level(level).map_err(|e| JsValue::from_str(&e))?;
    init_console_logging(level);
    Ok(())
}
