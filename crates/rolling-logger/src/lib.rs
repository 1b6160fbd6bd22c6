//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a fixed-size
//! circular buffer and echoes each one to the browser console (wasm) or
//! stderr (native). On panic the buffer is dumped so the console shows what
//! led up to the crash.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

static GLOBAL: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log record
#[derive(Clone, Debug, PartialEq)]
pub struct LogLine {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogLine>>,
    echo: bool,
}

impl RollingLogger {
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            echo: true,
        }
    }

    /// Buffer records without echoing them anywhere
    pub fn silent(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Install as the global `log` backend
    pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
        let logger = GLOBAL.get_or_init(|| RollingLogger::new(capacity, level));
        log::set_logger(logger)?;
        log::set_max_level(logger.level);
        Ok(logger)
    }

    /// The installed global logger, if `init` succeeded
    pub fn global() -> Option<&'static RollingLogger> {
        GLOBAL.get()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of buffered records, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        self.buffer
            .lock()
            .map(|buf| buf.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Buffered records as one block of text, oldest first
    pub fn report(&self) -> String {
        let recent = self.recent();
        let mut text = format!("[LOG] last {} records:", recent.len());
        for line in &recent {
            text.push('\n');
            text.push_str(&line.to_string());
        }
        text
    }

    fn push(&self, line: LogLine) {
        if let Ok(mut buf) = self.buffer.lock() {
            while buf.len() >= self.capacity {
                buf.pop_front();
            }
            buf.push_back(line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        if self.echo {
            write_console(line.level, &line.to_string());
        }
        self.push(line);
    }

    fn flush(&self) {}
}

/// Chain a panic hook that dumps the global buffer before the hook that was
/// installed previously runs.
pub fn install_panic_dump() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if let Some(logger) = RollingLogger::global() {
            write_console(Level::Error, &logger.report());
        }
        previous(info);
    }));
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, text: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let text = JsValue::from_str(text);
    match level {
        Level::Error => console::error_1(&text),
        Level::Warn => console::warn_1(&text),
        Level::Info => console::log_1(&text),
        Level::Debug | Level::Trace => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, text: &str) {
    eprintln!("{}", text);
}
