// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Shared test utilities for the sutkit integration suites.

pub mod fixtures;
pub mod mocks;

use sutkit_core::container::Container;
use sutkit_harness::context::TestContext;

use self::mocks::{MockBookingRepository, MockDeskRepository};

/// Registers default mock repositories for the booking domain.
///
/// Both mocks are frozen, so a test can resolve them again later and
/// configure the very instances the processor will receive.
pub fn register_booking_mocks(container: &Container) {
    container.resolve_mock::<MockDeskRepository>();
    container.resolve_mock::<MockBookingRepository>();
}

/// Builds a test context pre-wired for desk-booking tests.
///
/// The analog of a shared test base class: a fresh container with the
/// domain's default mocks registered and log capture installed.
pub fn booking_context(test_name: &str) -> TestContext {
    let ctx = TestContext::new(test_name);
    register_booking_mocks(ctx.container());
    ctx
}
