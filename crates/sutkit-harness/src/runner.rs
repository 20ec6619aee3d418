// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Closure-runner adapter.
//!
//! This adapter style wraps the whole test body and observes the true
//! outcome directly: a caught panic is a failure, a normal return is a
//! pass. After evaluation the panic is resumed, so the surrounding test
//! still fails exactly as it would have without the adapter.

use std::future::Future;
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

use futures_util::FutureExt;

use crate::context::{Evaluation, TestContext};
use crate::outcome::{OutcomeSource, TestOutcome};

// =============================================================================
// Caught Outcome
// =============================================================================

/// Outcome source backed by a caught test-body result.
#[derive(Debug, Clone, Copy)]
struct CaughtOutcome {
    failed: bool,
}

impl OutcomeSource for CaughtOutcome {
    fn current_outcome(&self) -> TestOutcome {
        TestOutcome::from_passed(!self.failed)
    }
}

// =============================================================================
// Synchronous Runner
// =============================================================================

/// Runs a synchronous test body with true-outcome log evaluation.
///
/// The body receives the context by reference; the runner evaluates the
/// output policy with the observed outcome, then re-raises any panic.
///
/// # Examples
///
/// ```
/// use sutkit_core::policy::LogOutputTiming;
/// use sutkit_harness::context::TestContext;
/// use sutkit_harness::runner::run_test;
///
/// let ctx = TestContext::builder("books_a_desk")
///     .log_output(LogOutputTiming::OnFailure)
///     .build();
///
/// run_test(ctx, |_ctx| {
///     tracing::info!("exercising the system under test");
/// });
/// ```
pub fn run_test<F>(ctx: TestContext, body: F) -> Evaluation
where
    F: FnOnce(&TestContext),
{
    let result = catch_unwind(AssertUnwindSafe(|| body(&ctx)));
    let source = CaughtOutcome {
        failed: result.is_err(),
    };
    let evaluation = ctx.evaluate_with(&source);

    if let Err(payload) = result {
        resume_unwind(payload);
    }
    evaluation
}

// =============================================================================
// Asynchronous Runner
// =============================================================================

/// Runs an asynchronous test body with true-outcome log evaluation.
///
/// The future is polled on the current task, so thread-scoped log capture
/// keeps working on the current-thread runtimes `#[tokio::test]` uses by
/// default. A panic unwinding out of the future is caught, evaluated as a
/// failure, and resumed.
///
/// # Examples
///
/// ```rust,ignore
/// let ctx = TestContext::builder("books_a_desk_async")
///     .log_output(LogOutputTiming::OnFailure)
///     .build();
/// let sut: DeskBookingRequestProcessor = ctx.container().resolve_sut()?;
///
/// run_async_test(ctx, async move {
///     sut.book_desk(&request, &correlation).await.unwrap();
/// })
/// .await;
/// ```
pub async fn run_async_test<F>(ctx: TestContext, body: F) -> Evaluation
where
    F: Future<Output = ()>,
{
    let result = AssertUnwindSafe(body).catch_unwind().await;
    let source = CaughtOutcome {
        failed: result.is_err(),
    };
    let evaluation = ctx.evaluate_with(&source);

    if let Err(payload) = result {
        resume_unwind(payload);
    }
    evaluation
}

// =============================================================================
// Tests
// =============================================================================
