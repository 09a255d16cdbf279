//! Console Logger
//!
//! `log` backend that writes to the browser console, one `console.*`
//! method per level.

use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing formatted lines to `console.*`
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

/// `[LEVEL target] message`
pub fn format_line(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        emit(record.level(), &format_line(record));
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug => web_sys::console::log_1(&value),
        Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

/// Install the global logger. Calling it twice returns the error from `log`.
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(level: Level) -> Metadata<'static> {
        Metadata::builder().level(level).target("school::form").build()
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info);
        assert!(!logger.enabled(&metadata(Level::Debug)));
        assert!(logger.enabled(&metadata(Level::Info)));
        assert!(logger.enabled(&metadata(Level::Error)));
    }

    #[test]
    fn test_off_disables_everything() {
        let logger = ConsoleLogger::new(LevelFilter::Off);
        assert!(!logger.enabled(&metadata(Level::Error)));
        assert_eq!(logger.level(), LevelFilter::Off);
    }

    #[test]
    fn test_line_has_level_and_target() {
        let line = format_line(
            &Record::builder()
                .level(Level::Warn)
                .target("school::form")
                .args(format_args!("photo {}", "skipped"))
                .build(),
        );
        assert_eq!(line, "[WARN school::form] photo skipped");
    }
}
