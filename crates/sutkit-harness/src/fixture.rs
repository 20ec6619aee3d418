// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Fixture-style adapter.
//!
//! This adapter style models harnesses whose teardown hook cannot observe
//! the test's outcome at all. Evaluation therefore runs with
//! [`TestOutcome::Unknown`], which the policy engine treats as passed: an
//! explicit, documented approximation, not an inference. Consequences:
//!
//! - `Always` and `OnSuccess` declarations behave normally for passing
//!   tests;
//! - `OnFailure` declarations never emit under this style, because a
//!   failing test panics past [`TestFixture::complete`] and the backstop
//!   skips evaluation during unwinding (teardown is best-effort: when the
//!   harness's own failure handling takes over, log emission for that test
//!   is simply skipped).
//!
//! Prefer the runner or guard styles when the timing mode depends on the
//! true outcome.

use crate::context::{Evaluation, TestContext};
use crate::outcome::{OutcomeSource, TestOutcome};

// =============================================================================
// TestFixture
// =============================================================================

/// Fixture wrapper evaluating log output with no outcome visibility.
///
/// Call [`complete`](TestFixture::complete) as the last statement of the
/// test. If the fixture is instead dropped normally (completion forgotten),
/// a backstop evaluation runs; if it is dropped during a panic, evaluation
/// is skipped entirely.
///
/// # Examples
///
/// ```
/// use sutkit_core::policy::LogOutputTiming;
/// use sutkit_harness::context::TestContext;
/// use sutkit_harness::fixture::TestFixture;
///
/// let fixture = TestFixture::new(
///     TestContext::builder("books_a_desk")
///         .fixture("BookingTests")
///         .fixture_log_output(LogOutputTiming::Always)
///         .build(),
/// );
///
/// tracing::info!("exercising the system under test");
///
/// fixture.complete();
/// ```
#[derive(Debug)]
pub struct TestFixture {
    ctx: Option<TestContext>,
}

/// Outcome source for harness styles that cannot observe outcomes.
#[derive(Debug, Clone, Copy)]
struct NoVisibility;

impl OutcomeSource for NoVisibility {
    fn current_outcome(&self) -> TestOutcome {
        TestOutcome::Unknown
    }
}

impl TestFixture {
    /// Wraps a context in a fixture-style adapter.
    pub fn new(ctx: TestContext) -> Self {
        Self { ctx: Some(ctx) }
    }

    /// The wrapped test context.
    pub fn context(&self) -> &TestContext {
        self.ctx
            .as_ref()
            .expect("context is only taken by complete() or drop")
    }

    /// Finishes the test and evaluates log output.
    ///
    /// Reaching this call means no panic escaped the test body; the
    /// evaluation still reports [`TestOutcome::Unknown`] because this
    /// harness style has no authoritative outcome signal.
    pub fn complete(mut self) -> Evaluation {
        let ctx = self
            .ctx
            .take()
            .expect("context is only taken by complete() or drop");
        ctx.evaluate_with(&NoVisibility)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        if std::thread::panicking() {
            // The harness's failure handling owns this test now; emission
            // for it is skipped.
            return;
        }
        if let Some(ctx) = self.ctx.take() {
            ctx.evaluate_with(&NoVisibility);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::BufferSink;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use sutkit_core::policy::LogOutputTiming;

    fn fixture(timing: LogOutputTiming, sink: &BufferSink) -> TestFixture {
        TestFixture::new(
            TestContext::builder("fixture_test")
                .log_output(timing)
                .sink(sink.clone())
                .build(),
        )
    }

    #[test]
    fn test_complete_assumes_passed() {
        let sink = BufferSink::new();
        let fixture = fixture(LogOutputTiming::OnSuccess, &sink);

        tracing::info!("ran to completion");
        let evaluation = fixture.complete();

        assert_eq!(evaluation, Evaluation::Emitted);
        assert!(sink.lines()[0].contains("ran to completion"));
    }

    #[test]
    fn test_on_failure_never_emits_under_this_style() {
        let sink = BufferSink::new();
        let fixture = fixture(LogOutputTiming::OnFailure, &sink);

        tracing::error!("boom");
        let evaluation = fixture.complete();

        assert_eq!(evaluation, Evaluation::Suppressed);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_drop_backstop_evaluates_when_completion_is_forgotten() {
        let sink = BufferSink::new();
        {
            let _fixture = fixture(LogOutputTiming::Always, &sink);
            tracing::info!("forgot to complete");
        }

        assert!(sink.lines()[0].contains("forgot to complete"));
    }

    #[test]
    fn test_panic_skips_emission_entirely() {
        let sink = BufferSink::new();

        let outer = catch_unwind(AssertUnwindSafe(|| {
            let _fixture = fixture(LogOutputTiming::Always, &sink);
            tracing::error!("boom");
            panic!("test failure");
        }));

        assert!(outer.is_err());
        assert!(sink.is_empty());
    }
}
