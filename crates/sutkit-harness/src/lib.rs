// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # sutkit-harness
//!
//! Harness adapters wiring the sutkit core pieces into test teardown.
//!
//! Each test owns a [`TestContext`] bundling its object container, its log
//! capture sink, and its declared output policy. At completion an adapter
//! obtains the test's outcome as well as its harness style allows, asks the
//! policy engine whether to emit, and writes the formatted block to the
//! style's output channel. Per test the evaluation always traverses
//!
//! ```text
//! Idle -> Executing -> (Passed | Failed) -> LogsEvaluated
//!      -> [Emitted | Suppressed] -> Idle
//! ```
//!
//! ## Adapter styles
//!
//! Three styles cover the ways harnesses expose (or hide) outcomes:
//!
//! - [`runner`]: wraps the test body in a closure or future and catches the
//!   panic itself; true outcome, works for sync and async tests
//! - [`guard`]: a drop guard reading `std::thread::panicking()` at
//!   teardown; true outcome without wrapping the body
//! - [`fixture`]: explicit completion with no outcome visibility; the
//!   documented assume-passed approximation
//!
//! Failures inside evaluation or emission are suppressed; reporting never
//! fails or masks the actual test result.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod context;
pub mod fixture;
pub mod guard;
pub mod outcome;
pub mod runner;
pub mod sink;

// =============================================================================
// Re-exports
// =============================================================================

pub use context::{Evaluation, TestContext, TestContextBuilder, LOG_OUTPUT_ENV};
pub use fixture::TestFixture;
pub use guard::OutcomeGuard;
pub use outcome::{OutcomeSource, TestOutcome};
pub use runner::{run_async_test, run_test};
pub use sink::{BufferSink, OutputSink, StdoutSink};
