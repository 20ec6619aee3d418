// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Test outcome representation and the outcome capability seam.
//!
//! Harness styles differ in how (or whether) the true pass/fail outcome is
//! observable at the point teardown code runs. [`OutcomeSource`] isolates
//! that variance: each adapter reports what it can actually see, and
//! [`TestOutcome::Unknown`] carries the documented "assume passed"
//! approximation rather than a guess.

use serde::{Deserialize, Serialize};

// =============================================================================
// TestOutcome
// =============================================================================

/// The observable result of a test at teardown time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestOutcome {
    /// The test completed without failure.
    Passed,
    /// The test failed.
    Failed,
    /// The harness style cannot observe the outcome at teardown.
    ///
    /// Policy evaluation treats this as passed. This is an explicit,
    /// documented approximation for harness styles with no better signal;
    /// it degrades `OnFailure`/`OnSuccess` timing for those styles and is
    /// deliberately not inferred away.
    Unknown,
}

impl TestOutcome {
    /// Maps the outcome to the boolean the policy engine consumes.
    ///
    /// `Unknown` maps to `true` (the assume-passed fallback).
    pub fn assume_passed(self) -> bool {
        !matches!(self, TestOutcome::Failed)
    }

    /// Builds an outcome from a definite pass/fail observation.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            TestOutcome::Passed
        } else {
            TestOutcome::Failed
        }
    }
}

// =============================================================================
// OutcomeSource
// =============================================================================

/// Capability seam reporting the current test's outcome.
///
/// Each adapter implements this according to what its harness style can
/// observe: a caught panic, the unwinding state of the thread, or nothing
/// at all.
pub trait OutcomeSource {
    /// Returns the outcome as visible to this source right now.
    fn current_outcome(&self) -> TestOutcome;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_passed_mapping() {
        assert!(TestOutcome::Passed.assume_passed());
        assert!(!TestOutcome::Failed.assume_passed());
        assert!(TestOutcome::Unknown.assume_passed());
    }

    #[test]
    fn test_from_passed() {
        assert_eq!(TestOutcome::from_passed(true), TestOutcome::Passed);
        assert_eq!(TestOutcome::from_passed(false), TestOutcome::Failed);
    }
}
