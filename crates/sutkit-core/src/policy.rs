// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Log-output policy engine.
//!
//! Two pure functions drive post-test log reporting: [`should_output_logs`]
//! decides whether a test's captured messages are emitted, based on the
//! declared timing mode and the test outcome; [`format_log_messages`]
//! renders the capture buffer into a single deterministic text block.
//!
//! Declarations are attached to [`TestDescriptor`]s. Rust has no runtime
//! attribute reflection, so descriptors are explicit registration values
//! built by the harness at context construction; the decision contract is
//! unchanged: a method-level declaration wins outright over a class-level
//! one, and the absence of both suppresses output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::logger::{LogLevel, TestLogger};

/// Header line of a formatted log block.
const HEADER: &str = "=== Test Log Messages ===";

// =============================================================================
// Timing Mode
// =============================================================================

/// When captured log messages should be emitted to the runner's output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum LogOutputTiming {
    /// Emit regardless of the test result.
    #[default]
    Always,
    /// Emit only when the test fails.
    OnFailure,
    /// Emit only when the test succeeds.
    OnSuccess,
}

impl fmt::Display for LogOutputTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogOutputTiming::Always => "always",
            LogOutputTiming::OnFailure => "on-failure",
            LogOutputTiming::OnSuccess => "on-success",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LogOutputTiming {
    type Err = ParseTimingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(LogOutputTiming::Always),
            "on-failure" | "on_failure" | "onfailure" => Ok(LogOutputTiming::OnFailure),
            "on-success" | "on_success" | "onsuccess" => Ok(LogOutputTiming::OnSuccess),
            _ => Err(ParseTimingError {
                value: s.to_string(),
            }),
        }
    }
}

/// Error returned when a timing mode string is unrecognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized log output timing `{value}` (expected always, on-failure, or on-success)")]
pub struct ParseTimingError {
    value: String,
}

// =============================================================================
// Declarations
// =============================================================================

/// Declarative log-output configuration for a test method or test class.
///
/// The analog of a test-framework attribute: immutable once declared, and
/// resolved once per test at teardown time. A policy declared without an
/// explicit timing defaults to [`LogOutputTiming::Always`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct LogOutputPolicy {
    /// When the captured messages should be emitted.
    pub timing: LogOutputTiming,
}

impl LogOutputPolicy {
    /// Creates a policy with the given timing.
    pub fn new(timing: LogOutputTiming) -> Self {
        Self { timing }
    }
}

/// Describes a test method or test class for declaration lookup.
///
/// Descriptors replace the reflective method/class lookups of attribute-based
/// frameworks: the harness constructs them explicitly and the policy engine
/// consults only the optional [`LogOutputPolicy`] they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDescriptor {
    /// Human-readable name of the method or class, used in diagnostics.
    pub name: String,
    /// The log-output declaration attached to this descriptor, if any.
    pub log_output: Option<LogOutputPolicy>,
}

impl TestDescriptor {
    /// Creates a descriptor with no log-output declaration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            log_output: None,
        }
    }

    /// Creates a descriptor declaring the given timing.
    pub fn with_log_output(name: impl Into<String>, timing: LogOutputTiming) -> Self {
        Self {
            name: name.into(),
            log_output: Some(LogOutputPolicy::new(timing)),
        }
    }
}

// =============================================================================
// Decision
// =============================================================================

/// Decides whether captured logs should be emitted for a completed test.
///
/// Resolution order: a declaration on the method descriptor is used
/// exclusively; otherwise a declaration on the class descriptor; otherwise
/// no output. Absent descriptors simply contribute no declaration.
///
/// # Examples
///
/// ```
/// use sutkit_core::policy::{should_output_logs, LogOutputTiming, TestDescriptor};
///
/// let method = TestDescriptor::with_log_output("books_desk", LogOutputTiming::OnFailure);
/// assert!(should_output_logs(Some(&method), None, false));
/// assert!(!should_output_logs(Some(&method), None, true));
/// ```
pub fn should_output_logs(
    method: Option<&TestDescriptor>,
    class: Option<&TestDescriptor>,
    test_passed: bool,
) -> bool {
    if let Some(policy) = method.and_then(|d| d.log_output) {
        return should_output_for_timing(policy.timing, test_passed);
    }

    if let Some(policy) = class.and_then(|d| d.log_output) {
        return should_output_for_timing(policy.timing, test_passed);
    }

    false
}

fn should_output_for_timing(timing: LogOutputTiming, test_passed: bool) -> bool {
    match timing {
        LogOutputTiming::Always => true,
        LogOutputTiming::OnFailure => !test_passed,
        LogOutputTiming::OnSuccess => test_passed,
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Renders a capture buffer into a single multi-line block.
///
/// Returns `None` when the logger is absent or every bucket is empty;
/// callers treat that as "nothing to print". Otherwise the block contains a
/// header line, then for each non-empty level in severity order (excluding
/// the `None` sentinel) a `[Level]` line, one indented line per message,
/// and a blank separator. The output embeds no timestamps and is identical
/// for identical buffer contents.
pub fn format_log_messages(logger: Option<&dyn TestLogger>) -> Option<String> {
    let logger = logger?;
    let logs = logger.snapshot();

    if logs.values().all(|messages| messages.is_empty()) {
        return None;
    }

    let mut block = String::from(HEADER);
    block.push('\n');

    for level in LogLevel::EMITTING {
        let Some(messages) = logs.get(&level) else {
            continue;
        };
        if messages.is_empty() {
            continue;
        }

        block.push('[');
        block.push_str(&level.to_string());
        block.push_str("]\n");
        for message in messages {
            block.push_str("  ");
            block.push_str(message);
            block.push('\n');
        }
        block.push('\n');
    }

    Some(block)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::ListLogger;

    fn method(timing: Option<LogOutputTiming>) -> TestDescriptor {
        match timing {
            Some(t) => TestDescriptor::with_log_output("a_test", t),
            None => TestDescriptor::new("a_test"),
        }
    }

    fn class(timing: Option<LogOutputTiming>) -> TestDescriptor {
        match timing {
            Some(t) => TestDescriptor::with_log_output("ATestClass", t),
            None => TestDescriptor::new("ATestClass"),
        }
    }

    #[test]
    fn test_no_declaration_anywhere_suppresses_output() {
        assert!(!should_output_logs(None, None, true));
        assert!(!should_output_logs(None, None, false));
        assert!(!should_output_logs(
            Some(&method(None)),
            Some(&class(None)),
            false
        ));
    }

    #[test]
    fn test_always_outputs_for_both_outcomes() {
        let m = method(Some(LogOutputTiming::Always));
        assert!(should_output_logs(Some(&m), None, true));
        assert!(should_output_logs(Some(&m), None, false));
    }

    #[test]
    fn test_on_failure_outputs_only_when_failed() {
        let m = method(Some(LogOutputTiming::OnFailure));
        assert!(!should_output_logs(Some(&m), None, true));
        assert!(should_output_logs(Some(&m), None, false));
    }

    #[test]
    fn test_on_success_outputs_only_when_passed() {
        let m = method(Some(LogOutputTiming::OnSuccess));
        assert!(should_output_logs(Some(&m), None, true));
        assert!(!should_output_logs(Some(&m), None, false));
    }

    #[test]
    fn test_method_declaration_wins_over_class() {
        // Method says only-on-success, class says always. A failed test must
        // not fall through to the class declaration.
        let m = method(Some(LogOutputTiming::OnSuccess));
        let c = class(Some(LogOutputTiming::Always));
        assert!(!should_output_logs(Some(&m), Some(&c), false));
    }

    #[test]
    fn test_class_declaration_applies_when_method_is_silent() {
        let m = method(None);
        let c = class(Some(LogOutputTiming::OnFailure));
        assert!(should_output_logs(Some(&m), Some(&c), false));
        assert!(!should_output_logs(Some(&m), Some(&c), true));
    }

    #[test]
    fn test_missing_method_descriptor_falls_back_to_class() {
        let c = class(Some(LogOutputTiming::Always));
        assert!(should_output_logs(None, Some(&c), true));
    }

    #[test]
    fn test_default_policy_timing_is_always() {
        assert_eq!(LogOutputPolicy::default().timing, LogOutputTiming::Always);
    }

    #[test]
    fn test_timing_parses_from_common_spellings() {
        assert_eq!(
            "always".parse::<LogOutputTiming>().unwrap(),
            LogOutputTiming::Always
        );
        assert_eq!(
            "On-Failure".parse::<LogOutputTiming>().unwrap(),
            LogOutputTiming::OnFailure
        );
        assert_eq!(
            "on_success".parse::<LogOutputTiming>().unwrap(),
            LogOutputTiming::OnSuccess
        );
        assert!("sometimes".parse::<LogOutputTiming>().is_err());
    }

    #[test]
    fn test_format_absent_logger_returns_none() {
        assert_eq!(format_log_messages(None), None);
    }

    #[test]
    fn test_format_empty_logger_returns_none() {
        let logger = ListLogger::new();
        assert_eq!(format_log_messages(Some(&logger)), None);
    }

    #[test]
    fn test_format_orders_sections_by_severity() {
        let logger = ListLogger::new();
        logger.append(LogLevel::Error, "Y");
        logger.append(LogLevel::Information, "X");

        let block = format_log_messages(Some(&logger)).unwrap();

        assert_eq!(
            block,
            "=== Test Log Messages ===\n[Information]\n  X\n\n[Error]\n  Y\n\n"
        );
    }

    #[test]
    fn test_format_excludes_none_sentinel() {
        let logger = ListLogger::new();
        logger.append(LogLevel::None, "invisible");
        logger.append(LogLevel::Debug, "visible");

        let block = format_log_messages(Some(&logger)).unwrap();

        assert!(!block.contains("invisible"));
        assert!(block.contains("[Debug]\n  visible"));
    }

    #[test]
    fn test_format_is_idempotent() {
        let logger = ListLogger::new();
        logger.append(LogLevel::Warning, "same");

        let first = format_log_messages(Some(&logger));
        let second = format_log_messages(Some(&logger));

        assert_eq!(first, second);
    }
}
