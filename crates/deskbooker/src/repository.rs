// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Storage abstraction for desks and bookings.
//!
//! The processor depends on these traits only; tests substitute mocks
//! through the container's dependency registry.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Desk, DeskBooking};
use crate::error::RepositoryError;

// =============================================================================
// DeskRepository
// =============================================================================

/// Read access to the desk inventory.
#[async_trait]
pub trait DeskRepository: Send + Sync {
    /// Returns the desks still free on `date`.
    async fn available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, RepositoryError>;
}

// =============================================================================
// DeskBookingRepository
// =============================================================================

/// Write access to the booking store.
#[async_trait]
pub trait DeskBookingRepository: Send + Sync {
    /// Persists a booking and returns its assigned identifier.
    async fn save(&self, booking: DeskBooking) -> Result<u32, RepositoryError>;
}
