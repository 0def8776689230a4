// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use core::fmt::{self, Write};
use core::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use spin::Mutex;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DBG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERR",
            Severity::Fatal => "FATAL",
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const LOG_BUFFER_SIZE: usize = 128;
pub const LOG_MESSAGE_LEN: usize = 160;

/// Output hook; receives every entry that passes the severity filter.
pub type LogSink = fn(Severity, &str);

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub sequence: u64,
    pub severity: Severity,
    pub message: heapless::String<LOG_MESSAGE_LEN>,
}

pub struct Logger {
    entries: Mutex<heapless::Deque<LogEntry, LOG_BUFFER_SIZE>>,
    sink: Mutex<Option<LogSink>>,
    sequence: AtomicU64,
    min_level: AtomicU8,
}

static LOGGER: Logger = Logger::new();

/// Kernel-wide logger instance
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Accumulates formatted output, dropping whatever exceeds the capacity.
struct Truncating<'a>(&'a mut heapless::String<LOG_MESSAGE_LEN>);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(heapless::Deque::new()),
            sink: Mutex::new(None),
            sequence: AtomicU64::new(0),
            min_level: AtomicU8::new(Severity::Info as u8),
        }
    }

    pub fn log(&self, msg: &str) {
        self.log_with_severity(Severity::Info, msg);
    }

    pub fn log_with_severity(&self, severity: Severity, msg: &str) {
        self.log_fmt(severity, format_args!("{}", msg));
    }

    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if severity < self.min_level() {
            return;
        }

        let mut message = heapless::String::new();
        let _ = Truncating(&mut message).write_fmt(args);

        let entry = LogEntry {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            severity,
            message,
        };

        let sink = *self.sink.lock();
        if let Some(sink) = sink {
            sink(severity, &entry.message);
        }

        let mut entries = self.entries.lock();
        if entries.is_full() {
            let _ = entries.pop_front(); // drop oldest
        }
        let _ = entries.push_back(entry);
    }

    pub fn min_level(&self) -> Severity {
        Severity::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    pub fn set_min_level(&self, level: Severity) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn set_sink(&self, sink: Option<LogSink>) {
        *self.sink.lock() = sink;
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Copies out the newest `N` entries, oldest first.
    pub fn export_recent<const N: usize>(&self) -> heapless::Vec<LogEntry, N> {
        let entries = self.entries.lock();
        let skip = entries.len().saturating_sub(N);
        let mut out = heapless::Vec::new();
        for entry in entries.iter().skip(skip) {
            let _ = out.push(entry.clone());
        }
        out
    }

    /// Total number of entries accepted since boot, including evicted ones.
    pub fn total_logged(&self) -> u64 {
        self.sequence.load(Ordering::Relaxed)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
