// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Assertion helpers over captured logs.
//!
//! Extension traits giving tests a compact way to pull per-level snapshots
//! out of a [`ListLogger`] and assert on their contents with informative
//! failure messages.

use crate::logger::{ListLogger, LogLevel};

// =============================================================================
// Per-Level Accessors
// =============================================================================

/// Per-level snapshot accessors for a [`ListLogger`].
pub trait LogAssertions {
    /// Messages captured at [`LogLevel::Trace`].
    fn trace_logs(&self) -> Vec<String>;

    /// Messages captured at [`LogLevel::Debug`].
    fn debug_logs(&self) -> Vec<String>;

    /// Messages captured at [`LogLevel::Information`].
    fn information_logs(&self) -> Vec<String>;

    /// Messages captured at [`LogLevel::Warning`].
    fn warning_logs(&self) -> Vec<String>;

    /// Messages captured at [`LogLevel::Error`].
    fn error_logs(&self) -> Vec<String>;

    /// Messages captured at [`LogLevel::Critical`].
    fn critical_logs(&self) -> Vec<String>;
}

impl LogAssertions for ListLogger {
    fn trace_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Trace)
    }

    fn debug_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Debug)
    }

    fn information_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Information)
    }

    fn warning_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Warning)
    }

    fn error_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Error)
    }

    fn critical_logs(&self) -> Vec<String> {
        self.logs_for(LogLevel::Critical)
    }
}

// =============================================================================
// Message Assertions
// =============================================================================

/// Content assertions over a bucket of captured messages.
pub trait MessageAssertions {
    /// Asserts that at least one message contains `fragment`,
    /// case-insensitively.
    ///
    /// # Panics
    ///
    /// Panics with the fragment and the captured messages when no message
    /// matches.
    fn contains_message(&self, fragment: &str);
}

impl MessageAssertions for [String] {
    fn contains_message(&self, fragment: &str) {
        let needle = fragment.to_lowercase();
        assert!(
            self.iter().any(|message| message.to_lowercase().contains(&needle)),
            "no log message contains '{}'; captured messages: {:?}",
            fragment,
            self
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
