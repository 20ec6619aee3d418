// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! In-memory structured log capture.
//!
//! This module provides [`ListLogger`], a capture sink that accumulates
//! formatted log messages per severity level for the lifetime of one test.
//! The logger is a pure sink: it never claims to be enabled, it does not
//! support scope nesting, and it is reset (or discarded) between tests.
//!
//! # Design Principles
//!
//! - **Additive**: writes only ever append; prior entries are never mutated
//! - **Partitioned**: messages are bucketed by severity, in insertion order
//! - **Single-owner**: each test owns exactly one logger instance
//! - **Cheap handles**: cloning a [`ListLogger`] clones a shared handle, so
//!   the test, the capture layer, and the teardown adapter all observe the
//!   same buffer

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

// =============================================================================
// LogLevel
// =============================================================================

/// Severity of a captured log message.
///
/// Levels are ordered `Trace < Debug < Information < Warning < Error <
/// Critical < None`. `None` is a sentinel that is never emitted by the
/// formatting helpers.
///
/// # Examples
///
/// ```
/// use sutkit_core::logger::LogLevel;
///
/// assert!(LogLevel::Trace < LogLevel::Error);
/// assert_eq!(LogLevel::Warning.to_string(), "Warning");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LogLevel {
    /// Finest-grained diagnostic messages.
    Trace,
    /// Development-time diagnostic messages.
    Debug,
    /// General informational messages.
    Information,
    /// Abnormal but recoverable conditions.
    Warning,
    /// Failures of the current operation.
    Error,
    /// Failures requiring immediate attention.
    Critical,
    /// Sentinel level; excluded from formatted output.
    None,
}

impl LogLevel {
    /// All enumerated levels, in severity order.
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
        LogLevel::None,
    ];

    /// The levels that participate in formatted output, in severity order.
    ///
    /// Excludes the [`LogLevel::None`] sentinel.
    pub const EMITTING: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
            LogLevel::None => "None",
        };
        write!(f, "{}", name)
    }
}

impl From<tracing::Level> for LogLevel {
    fn from(level: tracing::Level) -> Self {
        if level == tracing::Level::ERROR {
            LogLevel::Error
        } else if level == tracing::Level::WARN {
            LogLevel::Warning
        } else if level == tracing::Level::INFO {
            LogLevel::Information
        } else if level == tracing::Level::DEBUG {
            LogLevel::Debug
        } else {
            LogLevel::Trace
        }
    }
}

// =============================================================================
// TestLogger Trait
// =============================================================================

/// Object-safe surface of a test log capture sink.
///
/// The policy engine formats any capture sink through this trait, so harness
/// code does not need to know the concrete sink type.
pub trait TestLogger: Send + Sync {
    /// Appends a pre-rendered message under the given level.
    fn append(&self, level: LogLevel, message: String);

    /// Returns a snapshot of every bucket, keyed by level in severity order.
    fn snapshot(&self) -> BTreeMap<LogLevel, Vec<String>>;

    /// Empties every bucket in place, preserving the set of known levels.
    fn clear(&self);

    /// Reports whether the sink considers the level enabled.
    ///
    /// Capture sinks always report `false`; see [`ListLogger::is_enabled`].
    fn is_enabled(&self, level: LogLevel) -> bool;
}

// =============================================================================
// NoopScope
// =============================================================================

/// Inert scope handle returned by [`ListLogger::begin_scope`].
///
/// Scoping is unsupported by design: the capture sink flattens all writes to
/// a single un-nested stream. Dropping the handle has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScope;

// =============================================================================
// ListLogger
// =============================================================================

/// In-memory logger that stores formatted messages bucketed by [`LogLevel`].
///
/// A fresh logger is created per test. Every enumerated level has an (empty)
/// bucket after construction; levels outside the enumeration would be lazily
/// bucketed on first write. Writes are purely additive and retain insertion
/// order within each bucket.
///
/// # Examples
///
/// ```
/// use sutkit_core::logger::{ListLogger, LogLevel};
///
/// let logger = ListLogger::new();
/// logger.append(LogLevel::Error, "boom");
/// assert_eq!(logger.logs_for(LogLevel::Error), vec!["boom".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ListLogger {
    entries: Arc<Mutex<BTreeMap<LogLevel, Vec<String>>>>,
}

impl Default for ListLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ListLogger {
    /// Creates a new logger with an empty bucket for every enumerated level.
    pub fn new() -> Self {
        let mut entries = BTreeMap::new();
        for level in LogLevel::ALL {
            entries.insert(level, Vec::new());
        }
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }

    /// Renders a message through `formatter` and appends it under `level`.
    ///
    /// A panicking formatter propagates to the caller: a broken formatter is
    /// a test-code defect this sink must not mask.
    pub fn log<S>(
        &self,
        level: LogLevel,
        state: S,
        error: Option<&(dyn Error + 'static)>,
        formatter: impl FnOnce(&S, Option<&(dyn Error + 'static)>) -> String,
    ) {
        let message = formatter(&state, error);
        self.append(level, message);
    }

    /// Appends a pre-rendered message under `level`.
    pub fn append(&self, level: LogLevel, message: impl Into<String>) {
        let mut entries = self.entries.lock();
        entries.entry(level).or_default().push(message.into());
    }

    /// Reports whether the logger is enabled for `level`.
    ///
    /// Always `false`: this logger is a capture sink, not a live diagnostic
    /// channel. Callers must not gate expensive computation on this probe;
    /// writes are accepted regardless.
    pub fn is_enabled(&self, _level: LogLevel) -> bool {
        false
    }

    /// Begins a logical scope.
    ///
    /// Returns an inert [`NoopScope`]; the sink performs no nesting or
    /// contextual decoration.
    pub fn begin_scope<S>(&self, _state: S) -> NoopScope {
        NoopScope
    }

    /// Empties every bucket in place, preserving the set of known levels.
    ///
    /// Used to reset state between tests when a logger instance outlives a
    /// single test body rather than being reconstructed.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        for messages in entries.values_mut() {
            messages.clear();
        }
    }

    /// Returns a snapshot of the full level-to-messages mapping.
    pub fn logs(&self) -> BTreeMap<LogLevel, Vec<String>> {
        self.entries.lock().clone()
    }

    /// Returns a snapshot of the messages captured under `level`.
    pub fn logs_for(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .get(&level)
            .cloned()
            .unwrap_or_default()
    }

    /// Returns `true` when every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().values().all(|messages| messages.is_empty())
    }
}

impl TestLogger for ListLogger {
    fn append(&self, level: LogLevel, message: String) {
        ListLogger::append(self, level, message);
    }

    fn snapshot(&self) -> BTreeMap<LogLevel, Vec<String>> {
        self.logs()
    }

    fn clear(&self) {
        ListLogger::clear(self);
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        ListLogger::is_enabled(self, level)
    }
}

// =============================================================================
// Tests
// =============================================================================
