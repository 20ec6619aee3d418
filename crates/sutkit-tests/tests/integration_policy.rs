// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Policy Integration Tests
//!
//! Integration tests for the log-output policy engine:
//!
//! - The full method-declaration by class-declaration by outcome matrix
//! - Formatting of captured blocks, including the empty and absent cases

use sutkit_core::logger::{ListLogger, LogLevel, TestLogger};
use sutkit_core::policy::{
    format_log_messages, should_output_logs, LogOutputTiming, TestDescriptor,
};

// =============================================================================
// Decision Matrix
// =============================================================================

fn descriptor(name: &str, timing: Option<LogOutputTiming>) -> TestDescriptor {
    match timing {
        Some(timing) => TestDescriptor::with_log_output(name, timing),
        None => TestDescriptor::new(name),
    }
}

fn expected_for(timing: LogOutputTiming, passed: bool) -> bool {
    match timing {
        LogOutputTiming::Always => true,
        LogOutputTiming::OnFailure => !passed,
        LogOutputTiming::OnSuccess => passed,
    }
}

#[test]
fn test_full_declaration_matrix() {
    let timings = [
        None,
        Some(LogOutputTiming::Always),
        Some(LogOutputTiming::OnFailure),
        Some(LogOutputTiming::OnSuccess),
    ];

    for method_timing in timings {
        for class_timing in timings {
            for passed in [true, false] {
                let method = descriptor("the_test", method_timing);
                let class = descriptor("TheFixture", class_timing);

                // Method-level presence always wins; absence of both
                // yields false.
                let expected = match (method_timing, class_timing) {
                    (Some(timing), _) | (None, Some(timing)) => {
                        expected_for(timing, passed)
                    }
                    (None, None) => false,
                };

                let actual = should_output_logs(Some(&method), Some(&class), passed);
                assert_eq!(
                    actual, expected,
                    "method={:?} class={:?} passed={}",
                    method_timing, class_timing, passed
                );
            }
        }
    }
}

#[test]
fn test_absent_descriptors_contribute_no_declaration() {
    assert!(!should_output_logs(None, None, true));
    assert!(!should_output_logs(None, None, false));

    let class = descriptor("TheFixture", Some(LogOutputTiming::Always));
    assert!(should_output_logs(None, Some(&class), false));
}

#[test]
fn test_method_silence_with_declared_class_falls_through() {
    let method = descriptor("the_test", None);
    let class = descriptor("TheFixture", Some(LogOutputTiming::OnSuccess));

    assert!(should_output_logs(Some(&method), Some(&class), true));
    assert!(!should_output_logs(Some(&method), Some(&class), false));
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn test_format_absent_logger_is_absent() {
    assert_eq!(format_log_messages(None), None);
}

#[test]
fn test_format_all_empty_buckets_is_absent() {
    let logger = ListLogger::new();
    assert_eq!(format_log_messages(Some(&logger)), None);
}

#[test]
fn test_format_sections_follow_severity_order() {
    let logger = ListLogger::new();
    logger.append(LogLevel::Error, "Y");
    logger.append(LogLevel::Information, "X");

    let block = format_log_messages(Some(&logger)).unwrap();

    let header = block.find("=== Test Log Messages ===").unwrap();
    let info = block.find("[Information]").unwrap();
    let error = block.find("[Error]").unwrap();

    assert!(header < info);
    assert!(info < error);
    assert!(block.contains("  X\n"));
    assert!(block.contains("  Y\n"));
}

#[test]
fn test_format_skips_empty_levels_and_none_sentinel() {
    let logger = ListLogger::new();
    logger.append(LogLevel::Warning, "only warning");
    logger.append(LogLevel::None, "sentinel noise");

    let block = format_log_messages(Some(&logger)).unwrap();

    assert!(block.contains("[Warning]"));
    assert!(!block.contains("[Trace]"));
    assert!(!block.contains("[None]"));
    assert!(!block.contains("sentinel noise"));
}

#[test]
fn test_format_is_deterministic_for_unchanged_contents() {
    let logger = ListLogger::new();
    logger.append(LogLevel::Debug, "stable");
    logger.append(LogLevel::Critical, "also stable");

    let first = format_log_messages(Some(&logger)).unwrap();
    let second = format_log_messages(Some(&logger)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_format_works_through_the_trait_object() {
    let logger = ListLogger::new();
    logger.append(LogLevel::Information, "through dyn");

    let sink: &dyn TestLogger = &logger;
    let block = format_log_messages(Some(sink)).unwrap();

    assert!(block.contains("through dyn"));
}
