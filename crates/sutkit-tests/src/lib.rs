// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # sutkit Integration Tests
//!
//! This crate provides the integration test suites for the sutkit
//! workspace, together with the shared utilities they build on.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities
//!   - `fixtures`: Pre-built booking-domain test data
//!   - `mocks`: Configurable mock repositories
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p sutkit-tests
//!
//! # Run a specific test suite
//! cargo test -p sutkit-tests --test integration_container
//! cargo test -p sutkit-tests --test integration_logger
//! cargo test -p sutkit-tests --test integration_policy
//! cargo test -p sutkit-tests --test integration_harness
//! cargo test -p sutkit-tests --test integration_deskbooker
//!
//! # Show emitted log blocks for passing tests
//! cargo test -p sutkit-tests -- --nocapture
//! ```
//!
//! ## Test Categories
//!
//! ### Container Tests (`integration_container.rs`)
//! - Specimen generation and seeding
//! - Freeze and registration semantics
//! - Mock binding and injection recipes
//!
//! ### Logger Tests (`integration_logger.rs`)
//! - Per-level partitioning and ordering
//! - Clear and reuse semantics
//! - `tracing` event capture
//!
//! ### Policy Tests (`integration_policy.rs`)
//! - The full declaration-by-outcome decision matrix
//! - Formatting of captured blocks
//!
//! ### Harness Tests (`integration_harness.rs`)
//! - End-to-end emit/suppress scenarios per adapter style
//!
//! ### Demo Tests (`integration_deskbooker.rs`)
//! - Example suites exercising the desk-booking processor through the
//!   container, capture, and assertion helpers

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod common;
