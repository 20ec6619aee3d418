// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the desk-booking demo.

use thiserror::Error;

// =============================================================================
// RepositoryError
// =============================================================================

/// Errors surfaced by the storage collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },

    /// The store rejected the write.
    #[error("write rejected: {reason}")]
    WriteRejected {
        /// Human-readable cause.
        reason: String,
    },
}

// =============================================================================
// BookingError
// =============================================================================

/// Errors produced while processing a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// The request failed validation before any storage was consulted.
    #[error("invalid booking request: {reason}")]
    InvalidRequest {
        /// Which validation rule failed.
        reason: String,
    },

    /// A storage collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
