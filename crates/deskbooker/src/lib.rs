// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # deskbooker
//!
//! Demo application for the sutkit test-support library: a desk-booking
//! request processor with storage collaborators behind trait seams.
//!
//! The crate exists to be tested. Its processor is constructed through the
//! container's [`Inject`](sutkit_core::container::Inject) recipe, its
//! repositories are substituted with mocks, and its `tracing` output is
//! captured and conditionally reported by the harness adapters. See the
//! `sutkit-tests` crate for the example suites.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod domain;
pub mod error;
pub mod processor;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::{
    CorrelationId, Desk, DeskBooking, DeskBookingRequest, DeskBookingResult,
    DeskBookingResultCode,
};
pub use error::{BookingError, RepositoryError};
pub use processor::DeskBookingRequestProcessor;
pub use repository::{DeskBookingRepository, DeskRepository};
