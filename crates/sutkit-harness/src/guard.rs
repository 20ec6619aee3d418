// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Drop-guard adapter.
//!
//! This adapter style observes the true outcome at teardown time without
//! wrapping the test body: the guard's destructor runs while the thread is
//! unwinding iff the test panicked, so `std::thread::panicking()` is an
//! unambiguous pass/fail signal at that point. Declare the guard first in
//! the test body and use its context as usual; evaluation happens when the
//! guard goes out of scope.

use crate::context::TestContext;
use crate::outcome::{OutcomeSource, TestOutcome};

// =============================================================================
// OutcomeGuard
// =============================================================================

/// Guard evaluating log output when dropped, with the true outcome read
/// from the thread's unwinding state.
///
/// # Examples
///
/// ```
/// use sutkit_core::policy::LogOutputTiming;
/// use sutkit_harness::context::TestContext;
/// use sutkit_harness::guard::OutcomeGuard;
///
/// let guard = OutcomeGuard::new(
///     TestContext::builder("books_a_desk")
///         .log_output(LogOutputTiming::OnFailure)
///         .build(),
/// );
///
/// tracing::info!("exercising the system under test");
/// // Evaluation runs when `guard` drops; a panic before this point would
/// // be observed as a failure.
/// drop(guard);
/// ```
#[derive(Debug)]
pub struct OutcomeGuard {
    ctx: Option<TestContext>,
}

impl OutcomeGuard {
    /// Wraps a context in a teardown guard.
    pub fn new(ctx: TestContext) -> Self {
        Self { ctx: Some(ctx) }
    }

    /// The guarded test context.
    pub fn context(&self) -> &TestContext {
        self.ctx
            .as_ref()
            .expect("context is only taken during drop")
    }
}

impl OutcomeSource for OutcomeGuard {
    fn current_outcome(&self) -> TestOutcome {
        TestOutcome::from_passed(!std::thread::panicking())
    }
}

impl Drop for OutcomeGuard {
    fn drop(&mut self) {
        let outcome = self.current_outcome();
        if let Some(ctx) = self.ctx.take() {
            // evaluate() suppresses its own failures, so dropping during an
            // unwind cannot turn into a double panic.
            ctx.evaluate(outcome);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
