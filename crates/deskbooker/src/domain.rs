// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Desk-booking domain types.
//!
//! Plain data types for booking requests and their outcomes. Everything
//! derives `Dummy`, so the test container can generate fully populated
//! specimens.

use std::fmt;

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::{Dummy, Fake, Faker};
use rand::Rng;
use serde::{Deserialize, Serialize};

// =============================================================================
// Correlation
// =============================================================================

/// Identifier correlating the log lines of one booking request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CorrelationId(uuid::Uuid);

impl CorrelationId {
    /// Creates a fresh random correlation id.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Dummy<Faker> for CorrelationId {
    fn dummy_with_rng<R: Rng + ?Sized>(_config: &Faker, rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

// =============================================================================
// Requests & Desks
// =============================================================================

/// A request to book any available desk on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskBookingRequest {
    /// Requester's first name.
    pub first_name: String,
    /// Requester's last name.
    pub last_name: String,
    /// Requester's email address.
    pub email: String,
    /// The date the desk is needed.
    pub date: NaiveDate,
}

// Generated requests must pass the processor's validation, so the fields use
// realistic fakers rather than arbitrary strings.
impl Dummy<Faker> for DeskBookingRequest {
    fn dummy_with_rng<R: Rng + ?Sized>(config: &Faker, rng: &mut R) -> Self {
        Self {
            first_name: FirstName().fake_with_rng::<String, _>(rng),
            last_name: LastName().fake_with_rng::<String, _>(rng),
            email: SafeEmail().fake_with_rng::<String, _>(rng),
            date: config.fake_with_rng::<NaiveDate, _>(rng),
        }
    }
}

/// A bookable desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Dummy)]
pub struct Desk {
    /// Stable desk identifier.
    pub id: u32,
}

// =============================================================================
// Bookings & Results
// =============================================================================

/// A desk booking ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Dummy)]
pub struct DeskBooking {
    /// The desk being booked.
    pub desk_id: u32,
    /// Requester's first name.
    pub first_name: String,
    /// Requester's last name.
    pub last_name: String,
    /// Requester's email address.
    pub email: String,
    /// The booked date.
    pub date: NaiveDate,
}

impl DeskBooking {
    /// Builds a booking for `desk_id` from the request's details.
    pub fn from_request(request: &DeskBookingRequest, desk_id: u32) -> Self {
        Self {
            desk_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
        }
    }
}

/// Outcome category of a processed booking request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Dummy,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeskBookingResultCode {
    /// A desk was booked.
    Success,
    /// No desk was free on the requested date.
    NoDeskAvailable,
}

/// The result handed back to the requester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Dummy)]
pub struct DeskBookingResult {
    /// Outcome category.
    pub code: DeskBookingResultCode,
    /// Identifier of the stored booking, when one was made.
    pub desk_booking_id: Option<u32>,
    /// Requester's first name.
    pub first_name: String,
    /// Requester's last name.
    pub last_name: String,
    /// Requester's email address.
    pub email: String,
    /// The requested date.
    pub date: NaiveDate,
}

impl DeskBookingResult {
    /// Builds a result echoing the request's details.
    pub fn from_request(
        request: &DeskBookingRequest,
        code: DeskBookingResultCode,
        desk_booking_id: Option<u32>,
    ) -> Self {
        Self {
            code,
            desk_booking_id,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            date: request.date,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
