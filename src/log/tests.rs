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

use super::*;
use core::sync::atomic::{AtomicUsize, Ordering};

// ============================================================================
// SEVERITY TESTS
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(Severity::Debug < Severity::Info);
    assert!(Severity::Info < Severity::Warn);
    assert!(Severity::Warn < Severity::Error);
    assert!(Severity::Error < Severity::Fatal);
}

#[test]
fn test_severity_labels() {
    assert_eq!(Severity::Debug.as_str(), "DBG");
    assert_eq!(Severity::Error.as_str(), "ERR");
    assert_eq!(format!("{}", Severity::Fatal), "FATAL");
}

// ============================================================================
// LOGGER TESTS
// ============================================================================

#[test]
fn test_default_level_filters_debug() {
    let logger = Logger::new();
    assert_eq!(logger.min_level(), Severity::Info);
    logger.log_with_severity(Severity::Debug, "hidden");
    assert!(logger.is_empty());
    logger.log("shown");
    assert_eq!(logger.len(), 1);
}

#[test]
fn test_min_level_runtime_change() {
    let logger = Logger::new();
    logger.set_min_level(Severity::Error);
    logger.log_with_severity(Severity::Warn, "dropped");
    logger.log_with_severity(Severity::Error, "kept");
    assert_eq!(logger.len(), 1);

    logger.set_min_level(Severity::Debug);
    logger.log_with_severity(Severity::Debug, "kept too");
    assert_eq!(logger.len(), 2);
}

#[test]
fn test_ring_buffer_drops_oldest() {
    let logger = Logger::new();
    for i in 0..LOG_BUFFER_SIZE + 5 {
        logger.log_fmt(Severity::Info, format_args!("entry {}", i));
    }
    assert_eq!(logger.len(), LOG_BUFFER_SIZE);
    assert_eq!(logger.total_logged(), (LOG_BUFFER_SIZE + 5) as u64);

    let recent: heapless::Vec<LogEntry, 2> = logger.export_recent();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].message.as_str(), "entry 131");
    assert_eq!(recent[1].message.as_str(), "entry 132");
    assert_eq!(recent[1].sequence, 132);
}

#[test]
fn test_long_message_truncated() {
    let logger = Logger::new();
    let long = "x".repeat(LOG_MESSAGE_LEN * 2);
    logger.log(&long);
    let recent: heapless::Vec<LogEntry, 1> = logger.export_recent();
    assert_eq!(recent[0].message.len(), LOG_MESSAGE_LEN);
}

static SINK_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counting_sink(severity: Severity, msg: &str) {
    assert_eq!(severity, Severity::Warn);
    assert_eq!(msg, "pagefs: sink check");
    SINK_CALLS.fetch_add(1, Ordering::SeqCst);
}

#[test]
fn test_sink_receives_filtered_entries() {
    let logger = Logger::new();
    logger.set_sink(Some(counting_sink));
    logger.log_with_severity(Severity::Debug, "below threshold");
    logger.log_with_severity(Severity::Warn, "pagefs: sink check");
    assert_eq!(SINK_CALLS.load(Ordering::SeqCst), 1);

    logger.set_sink(None);
    logger.log_with_severity(Severity::Warn, "pagefs: sink check");
    assert_eq!(SINK_CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn test_clear() {
    let logger = Logger::new();
    logger.log("a");
    logger.log("b");
    logger.clear();
    assert!(logger.is_empty());
    assert_eq!(logger.total_logged(), 2);
}
