//! Console Logger
//!
//! `log` backend for the browser. Lines go to the devtools console on
//! wasm32 and to stderr elsewhere. The most recent lines are also kept
//! in a fixed-size ring buffer so the page can show them.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console and a bounded ring of recent lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    recent: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Format a record as `[HH:MM:SS.mmm] LEVEL target: message`
    pub fn format_line(record: &Record) -> String {
        format!(
            "[{}] {:<5} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn remember(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut recent) = self.recent.lock() {
            while recent.len() >= self.capacity {
                recent.pop_front();
            }
            recent.push_back(line);
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.recent
            .lock()
            .map(|recent| recent.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_line(record);
        write_console(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Only the first call wins.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger (empty before `init_logger`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent_lines).unwrap_or_default()
}
