// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Desk-booking request processor.
//!
//! Validates a booking request, books the first available desk, and reports
//! the outcome. Every log line of one request carries its correlation id so
//! captured test logs can be tied back to the triggering call.

use std::sync::Arc;

use sutkit_core::container::{Container, Inject};
use sutkit_core::error::ContainerError;

use crate::domain::{
    CorrelationId, DeskBookingRequest, DeskBookingResult, DeskBookingResultCode, DeskBooking,
};
use crate::error::BookingError;
use crate::repository::{DeskBookingRepository, DeskRepository};

// =============================================================================
// DeskBookingRequestProcessor
// =============================================================================

/// Processes desk-booking requests against the desk and booking stores.
pub struct DeskBookingRequestProcessor {
    booking_repository: Arc<dyn DeskBookingRepository>,
    desk_repository: Arc<dyn DeskRepository>,
}

impl DeskBookingRequestProcessor {
    /// Creates a processor over the given stores.
    pub fn new(
        booking_repository: Arc<dyn DeskBookingRepository>,
        desk_repository: Arc<dyn DeskRepository>,
    ) -> Self {
        Self {
            booking_repository,
            desk_repository,
        }
    }

    /// Books the first available desk for `request`.
    ///
    /// Returns a [`DeskBookingResult`] echoing the request's details with
    /// [`DeskBookingResultCode::Success`] and the stored booking id, or
    /// [`DeskBookingResultCode::NoDeskAvailable`] when the date is fully
    /// booked.
    ///
    /// # Errors
    ///
    /// [`BookingError::InvalidRequest`] when a required field is blank or
    /// the email address is malformed; [`BookingError::Repository`] when a
    /// store fails.
    pub async fn book_desk(
        &self,
        request: &DeskBookingRequest,
        correlation_id: &CorrelationId,
    ) -> Result<DeskBookingResult, BookingError> {
        if let Err(reason) = validate(request) {
            tracing::error!(
                "booking request rejected: {reason}. Correlation Id: {correlation_id}"
            );
            return Err(BookingError::InvalidRequest { reason });
        }

        let available = self
            .desk_repository
            .available_desks(request.date)
            .await
            .map_err(|error| {
                tracing::error!(
                    "desk lookup failed: {error}. Correlation Id: {correlation_id}"
                );
                error
            })?;

        let Some(desk) = available.first() else {
            tracing::warn!(
                "no desk available on {}. Correlation Id: {correlation_id}",
                request.date
            );
            return Ok(DeskBookingResult::from_request(
                request,
                DeskBookingResultCode::NoDeskAvailable,
                None,
            ));
        };

        let booking = DeskBooking::from_request(request, desk.id);
        let booking_id = self
            .booking_repository
            .save(booking)
            .await
            .map_err(|error| {
                tracing::error!(
                    "saving booking failed: {error}. Correlation Id: {correlation_id}"
                );
                error
            })?;

        tracing::info!(
            "booked desk {} as booking {booking_id} for {}. Correlation Id: {correlation_id}",
            desk.id,
            request.date
        );

        Ok(DeskBookingResult::from_request(
            request,
            DeskBookingResultCode::Success,
            Some(booking_id),
        ))
    }
}

impl Inject for DeskBookingRequestProcessor {
    fn inject(container: &Container) -> Result<Self, ContainerError> {
        Ok(Self::new(
            container.dep::<dyn DeskBookingRepository>()?,
            container.dep::<dyn DeskRepository>()?,
        ))
    }
}

// =============================================================================
// Validation
// =============================================================================

fn validate(request: &DeskBookingRequest) -> Result<(), String> {
    if request.first_name.trim().is_empty() {
        return Err("first name is blank".to_string());
    }
    if request.last_name.trim().is_empty() {
        return Err("last name is blank".to_string());
    }
    if request.email.trim().is_empty() {
        return Err("email is blank".to_string());
    }
    if !request.email.contains('@') {
        return Err("email is malformed".to_string());
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
