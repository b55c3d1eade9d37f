//! Console Logging
//!
//! `log` backend writing to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger. Later calls are ignored.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// `[module] message`, module being the last path segment of the target
pub fn format_line(target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", module, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line: JsValue = format_line(record.target(), &record.args().to_string()).into();
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_segment() {
        assert_eq!(format_line("linkpage_ui::app", "order saved"), "[app] order saved");
        assert_eq!(format_line("leptos_dragdrop::dom::x", "hi"), "[x] hi");
        assert_eq!(format_line("main", "ready"), "[main] ready");
    }
}
