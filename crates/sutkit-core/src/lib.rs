// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # sutkit-core
//!
//! Core abstractions of the sutkit test-support library:
//!
//! - **Container**: auto-populating object container constructing systems
//!   under test with randomized or stubbed dependencies
//! - **Logger**: in-memory structured log capture, bucketed by severity
//! - **Capture**: routing of `tracing` events into the capture sink
//! - **Policy**: declarative, outcome-conditional log-output decisions and
//!   deterministic formatting
//! - **Assertions**: extension traits for asserting over captured logs
//!
//! The harness adapters in `sutkit-harness` wire these pieces together at
//! test teardown; this crate stays runner-agnostic.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sutkit_core::container::Container;
//! use sutkit_core::capture::capture_logs;
//! use sutkit_core::logger::ListLogger;
//!
//! let container = Container::new();
//! let logger = ListLogger::new();
//! let _guard = capture_logs(&logger);
//!
//! let sut: MySut = container.resolve_sut()?;
//! sut.do_work();
//!
//! assert!(!logger.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod assertions;
pub mod capture;
pub mod container;
pub mod error;
pub mod logger;
pub mod policy;

// =============================================================================
// Re-exports
// =============================================================================

pub use assertions::{LogAssertions, MessageAssertions};
pub use capture::{capture_logs, CaptureGuard, CaptureLayer};
pub use container::{Container, Inject, MockBinding, SpecimenBuilder};
pub use error::ContainerError;
pub use logger::{ListLogger, LogLevel, NoopScope, TestLogger};
pub use policy::{
    format_log_messages, should_output_logs, LogOutputPolicy, LogOutputTiming, TestDescriptor,
};
