// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Routing of `tracing` events into the capture sink.
//!
//! The system under test logs through the `tracing` macros like any other
//! production code. During a test, [`capture_logs`] installs a thread-scoped
//! subscriber whose only layer is a [`CaptureLayer`] writing rendered events
//! into the test's [`ListLogger`]. Dropping the returned guard uninstalls
//! the subscriber, confining capture to the owning test.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use crate::logger::ListLogger;

// =============================================================================
// CaptureLayer
// =============================================================================

/// A `tracing` layer that appends rendered events to a [`ListLogger`].
///
/// The event's `message` field becomes the body of the captured line; any
/// remaining fields are rendered as trailing `key=value` pairs. Severity is
/// mapped through `LogLevel::from(tracing::Level)`.
#[derive(Debug, Clone)]
pub struct CaptureLayer {
    logger: ListLogger,
}

impl CaptureLayer {
    /// Creates a layer writing into the given logger handle.
    pub fn new(logger: ListLogger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.logger
            .append((*event.metadata().level()).into(), visitor.render());
    }
}

// =============================================================================
// Event Rendering
// =============================================================================

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl EventVisitor {
    fn render(self) -> String {
        let mut line = self.message.unwrap_or_default();
        for (name, value) in self.fields {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(name);
            line.push('=');
            line.push_str(&value);
        }
        line
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push((field.name(), format!("{:?}", value)));
        }
    }
}

// =============================================================================
// CaptureGuard
// =============================================================================

/// Scopes log capture to the current test.
///
/// Holds the thread-default subscriber installed by [`capture_logs`]; when
/// dropped, the previous subscriber (if any) is restored and events stop
/// flowing into the test's logger.
pub struct CaptureGuard {
    _guard: DefaultGuard,
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard").finish_non_exhaustive()
    }
}

/// Installs a thread-scoped subscriber capturing `tracing` events into
/// `logger`.
///
/// Capture is thread-default rather than global, so parallel tests on other
/// threads are unaffected. Async tests should run on a current-thread
/// runtime (the `#[tokio::test]` default); on a multi-thread runtime,
/// events emitted from other worker threads bypass the per-test scope.
///
/// # Examples
///
/// ```
/// use sutkit_core::capture::capture_logs;
/// use sutkit_core::logger::{ListLogger, LogLevel};
///
/// let logger = ListLogger::new();
/// let _guard = capture_logs(&logger);
///
/// tracing::error!("boom");
///
/// assert_eq!(logger.logs_for(LogLevel::Error), vec!["boom".to_string()]);
/// ```
pub fn capture_logs(logger: &ListLogger) -> CaptureGuard {
    let subscriber = tracing_subscriber::registry().with(CaptureLayer::new(logger.clone()));
    CaptureGuard {
        _guard: tracing::subscriber::set_default(subscriber),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;

    #[test]
    fn test_events_are_routed_by_severity() {
        let logger = ListLogger::new();
        let _guard = capture_logs(&logger);

        tracing::info!("hello");
        tracing::warn!("careful");
        tracing::error!("broken");

        assert_eq!(logger.logs_for(LogLevel::Information), vec!["hello"]);
        assert_eq!(logger.logs_for(LogLevel::Warning), vec!["careful"]);
        assert_eq!(logger.logs_for(LogLevel::Error), vec!["broken"]);
    }

    #[test]
    fn test_structured_fields_are_rendered_as_pairs() {
        let logger = ListLogger::new();
        let _guard = capture_logs(&logger);

        tracing::info!(desk_id = 7, "booked");

        let logs = logger.logs_for(LogLevel::Information);
        assert_eq!(logs, vec!["booked desk_id=7"]);
    }

    #[test]
    fn test_capture_stops_when_guard_drops() {
        let logger = ListLogger::new();
        {
            let _guard = capture_logs(&logger);
            tracing::info!("inside");
        }
        tracing::info!("outside");

        assert_eq!(logger.logs_for(LogLevel::Information), vec!["inside"]);
    }

    #[test]
    fn test_interpolated_message_is_captured() {
        let logger = ListLogger::new();
        let _guard = capture_logs(&logger);

        let id = 42;
        tracing::error!("request {id} failed");

        assert_eq!(logger.logs_for(LogLevel::Error), vec!["request 42 failed"]);
    }
}
