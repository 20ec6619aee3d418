// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Per-test context: container, capture sink, declarations, and the
//! teardown evaluation step shared by every adapter style.
//!
//! A [`TestContext`] bundles everything one test owns: its [`Container`],
//! its [`ListLogger`] with an installed capture guard, the method- and
//! class-level [`TestDescriptor`]s, and the [`OutputSink`] the adapter
//! writes through. Per test, evaluation follows
//!
//! ```text
//! Idle -> Executing -> (Passed | Failed) -> LogsEvaluated
//!      -> [Emitted | Suppressed] -> Idle
//! ```
//!
//! [`TestContext::evaluate`] consumes the context, so the terminal state is
//! reached exactly once by construction and no adapter can re-evaluate or
//! skip the evaluation step.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use sutkit_core::capture::{capture_logs, CaptureGuard};
use sutkit_core::container::Container;
use sutkit_core::logger::ListLogger;
use sutkit_core::policy::{
    format_log_messages, should_output_logs, LogOutputTiming, TestDescriptor,
};

use crate::outcome::{OutcomeSource, TestOutcome};
use crate::sink::{OutputSink, StdoutSink};

/// Environment variable forcing a method-level timing declaration.
///
/// Accepts `always`, `on-failure`, or `on-success`; unrecognized values are
/// ignored. Resolved once at context construction.
pub const LOG_OUTPUT_ENV: &str = "SUTKIT_LOG_OUTPUT";

// =============================================================================
// Evaluation
// =============================================================================

/// Terminal state of one test's log evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The formatted log block was written to the sink.
    Emitted,
    /// Nothing was written: the policy declined, there was nothing to
    /// print, or emission failed and was suppressed.
    Suppressed,
}

// =============================================================================
// TestContext
// =============================================================================

/// Everything one test execution owns.
///
/// Created at test start (one per test method execution), consumed by
/// [`evaluate`](TestContext::evaluate) at teardown. The context is never
/// shared across concurrent tests; parallel tests each hold their own.
pub struct TestContext {
    container: Container,
    logger: ListLogger,
    method: Option<TestDescriptor>,
    class: Option<TestDescriptor>,
    sink: Arc<dyn OutputSink>,
    _capture: CaptureGuard,
}

impl std::fmt::Debug for TestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestContext")
            .field("method", &self.method)
            .field("class", &self.class)
            .finish()
    }
}

impl TestContext {
    /// Starts building a context for the named test.
    pub fn builder(test_name: impl Into<String>) -> TestContextBuilder {
        TestContextBuilder::new(test_name)
    }

    /// Creates a context for the named test with default settings.
    pub fn new(test_name: impl Into<String>) -> Self {
        Self::builder(test_name).build()
    }

    /// The container constructing this test's collaborators.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The capture sink receiving this test's log writes.
    pub fn logger(&self) -> &ListLogger {
        &self.logger
    }

    /// The method-level descriptor, when one was declared.
    pub fn method(&self) -> Option<&TestDescriptor> {
        self.method.as_ref()
    }

    /// The class-level descriptor, when one was declared.
    pub fn class(&self) -> Option<&TestDescriptor> {
        self.class.as_ref()
    }

    /// Runs the teardown evaluation for this test.
    ///
    /// Consults the output policy with the given outcome, formats and emits
    /// the captured block when the policy affirms and there is something to
    /// print, then resets the logger. Consuming `self` makes re-evaluation
    /// impossible and releases the capture guard.
    ///
    /// A failure anywhere inside evaluation or emission is caught and
    /// suppressed; at worst one best-effort diagnostic line is attempted.
    /// Reporting must never fail or mask the actual test result.
    pub fn evaluate(self, outcome: TestOutcome) -> Evaluation {
        let TestContext {
            container: _container,
            logger,
            method,
            class,
            sink,
            _capture,
        } = self;

        let passed = outcome.assume_passed();
        let result = catch_unwind(AssertUnwindSafe(|| {
            if !should_output_logs(method.as_ref(), class.as_ref(), passed) {
                return Evaluation::Suppressed;
            }
            match format_log_messages(Some(&logger)) {
                Some(block) => {
                    sink.write_line(&block);
                    Evaluation::Emitted
                }
                None => Evaluation::Suppressed,
            }
        }));

        logger.clear();

        result.unwrap_or_else(|_| {
            let _ = catch_unwind(AssertUnwindSafe(|| {
                sink.write_line("warning: failed to emit captured log messages");
            }));
            Evaluation::Suppressed
        })
    }

    /// Runs the teardown evaluation with the outcome an adapter's
    /// [`OutcomeSource`] reports.
    pub fn evaluate_with(self, source: &dyn OutcomeSource) -> Evaluation {
        self.evaluate(source.current_outcome())
    }
}

// =============================================================================
// TestContextBuilder
// =============================================================================

/// Builder for [`TestContext`].
///
/// All capability and configuration values (declarations, sink, seed, and
/// the [`LOG_OUTPUT_ENV`] override) are resolved once in
/// [`build`](TestContextBuilder::build) and threaded through the context;
/// nothing is cached process-wide.
pub struct TestContextBuilder {
    test_name: String,
    fixture_name: Option<String>,
    log_output: Option<LogOutputTiming>,
    fixture_log_output: Option<LogOutputTiming>,
    sink: Option<Arc<dyn OutputSink>>,
    seed: Option<u64>,
}

impl std::fmt::Debug for TestContextBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestContextBuilder")
            .field("test_name", &self.test_name)
            .field("fixture_name", &self.fixture_name)
            .field("log_output", &self.log_output)
            .field("fixture_log_output", &self.fixture_log_output)
            .field("seed", &self.seed)
            .finish()
    }
}

impl TestContextBuilder {
    /// Starts a builder for the named test.
    pub fn new(test_name: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            fixture_name: None,
            log_output: None,
            fixture_log_output: None,
            sink: None,
            seed: None,
        }
    }

    /// Declares a method-level log-output timing for this test.
    pub fn log_output(mut self, timing: LogOutputTiming) -> Self {
        self.log_output = Some(timing);
        self
    }

    /// Names the fixture (test class) this test belongs to.
    pub fn fixture(mut self, name: impl Into<String>) -> Self {
        self.fixture_name = Some(name.into());
        self
    }

    /// Declares a class-level log-output timing for this test's fixture.
    pub fn fixture_log_output(mut self, timing: LogOutputTiming) -> Self {
        self.fixture_log_output = Some(timing);
        self
    }

    /// Replaces the default stdout sink.
    pub fn sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Seeds the container's generator for reproducible specimens.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the context: container, logger with installed capture, and
    /// resolved descriptors.
    ///
    /// The logger is registered in the container so injection recipes can
    /// receive it as a declared dependency.
    pub fn build(self) -> TestContext {
        let container = match self.seed {
            Some(seed) => Container::with_seed(seed),
            None => Container::new(),
        };

        let logger = ListLogger::new();
        container.register(logger.clone());
        let capture = capture_logs(&logger);

        let env_value = std::env::var(LOG_OUTPUT_ENV).ok();
        let method_timing = resolve_env_override(env_value.as_deref()).or(self.log_output);
        let method = Some(match method_timing {
            Some(timing) => TestDescriptor::with_log_output(self.test_name.clone(), timing),
            None => TestDescriptor::new(self.test_name.clone()),
        });

        let class = match (&self.fixture_name, self.fixture_log_output) {
            (None, None) => None,
            (name, timing) => {
                let class_name = name.clone().unwrap_or_else(|| "fixture".to_string());
                Some(match timing {
                    Some(timing) => TestDescriptor::with_log_output(class_name, timing),
                    None => TestDescriptor::new(class_name),
                })
            }
        };

        TestContext {
            container,
            logger,
            method,
            class,
            sink: self.sink.unwrap_or_else(|| Arc::new(StdoutSink)),
            _capture: capture,
        }
    }
}

/// Parses the [`LOG_OUTPUT_ENV`] value into a forced timing declaration.
///
/// Unset or unrecognized values yield no override.
fn resolve_env_override(raw: Option<&str>) -> Option<LogOutputTiming> {
    raw.and_then(|value| value.parse::<LogOutputTiming>().ok())
}

// =============================================================================
// Tests
// =============================================================================
