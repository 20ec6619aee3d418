// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Pre-built booking-domain test data for consistent and reproducible
//! testing.
//!
//! ## Design Principles
//!
//! - Fixtures are immutable and cheap to construct
//! - Each fixture represents a realistic scenario
//! - Fixtures can be composed for complex test scenarios

use chrono::NaiveDate;
use deskbooker::{CorrelationId, Desk, DeskBookingRequest};

// =============================================================================
// Booking Fixtures
// =============================================================================

/// Fixture providing standard booking-domain values.
pub struct BookingFixtures;

impl BookingFixtures {
    /// A date with desks available in most scenarios.
    pub fn booking_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).expect("valid calendar date")
    }

    /// A well-formed booking request.
    pub fn request() -> DeskBookingRequest {
        Self::request_for(Self::booking_date())
    }

    /// A well-formed booking request for a specific date.
    pub fn request_for(date: NaiveDate) -> DeskBookingRequest {
        DeskBookingRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada.lovelace@example.com".to_string(),
            date,
        }
    }

    /// A request that fails validation (blank first name).
    pub fn blank_name_request() -> DeskBookingRequest {
        let mut request = Self::request();
        request.first_name = String::new();
        request
    }

    /// A single desk.
    pub fn desk(id: u32) -> Desk {
        Desk { id }
    }

    /// Multiple desks with sequential ids starting at 1.
    pub fn desk_batch(count: usize) -> Vec<Desk> {
        (1..=count as u32).map(|id| Desk { id }).collect()
    }

    /// A fresh correlation id.
    pub fn correlation() -> CorrelationId {
        CorrelationId::new()
    }
}
