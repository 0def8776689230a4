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

//! NØNOS Logging Subsystem
//!
//! RAM ring buffer of recent entries, runtime severity filter and an
//! optional output sink (VGA console, serial). No heap allocation.

pub mod logger;
#[cfg(test)]
mod tests;

pub use logger::{
    logger, LogEntry, LogSink, Logger, Severity, LOG_BUFFER_SIZE, LOG_MESSAGE_LEN,
};

use core::fmt;

pub fn log(severity: Severity, msg: &str) {
    logger().log_with_severity(severity, msg);
}

pub fn log_fmt(severity: Severity, args: fmt::Arguments<'_>) {
    logger().log_fmt(severity, args);
}

pub fn set_min_level(level: Severity) {
    logger().set_min_level(level);
}

pub fn min_level() -> Severity {
    logger().min_level()
}

pub fn set_sink(sink: Option<LogSink>) {
    logger().set_sink(sink);
}

pub fn log_critical(msg: &str) {
    log(Severity::Fatal, msg);
}

// ===== Convenience Macros =====

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log::log_fmt($crate::log::Severity::Info, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log::log_fmt($crate::log::Severity::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_err {
    ($($arg:tt)*) => {
        $crate::log::log_fmt($crate::log::Severity::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_dbg {
    ($($arg:tt)*) => {
        $crate::log::log_fmt($crate::log::Severity::Debug, ::core::format_args!($($arg)*))
    };
}
