// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Mock Implementations
//!
//! Mock repositories for testing the desk-booking processor in isolation.
//!
//! ## Design Principles
//!
//! - Configurable behavior for different test scenarios
//! - Recording of interactions for verification
//! - Thread-safe for concurrent testing
//! - Easy to set up error injection
//!
//! Both mocks implement [`MockBinding`], so
//! `container.resolve_mock::<MockDeskRepository>()` freezes the mock and
//! registers it as the repository trait the processor injects.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;

use deskbooker::{
    Desk, DeskBooking, DeskBookingRepository, DeskRepository, RepositoryError,
};
use sutkit_core::container::MockBinding;

// =============================================================================
// Mock Desk Repository
// =============================================================================

/// A configurable mock of the desk inventory.
///
/// Defaults to an empty inventory, so an unconfigured processor observes
/// "no desk available" rather than failing.
#[derive(Debug, Default)]
pub struct MockDeskRepository {
    /// Desks reported as available.
    available: Mutex<Vec<Desk>>,

    /// Force the next lookup to fail.
    fail_next_lookup: AtomicBool,

    /// Force all lookups to fail.
    fail_all_lookups: AtomicBool,

    /// Lookup count for verification.
    lookup_count: AtomicU64,

    /// Dates looked up, for verification.
    requested_dates: Mutex<Vec<NaiveDate>>,
}

impl MockDeskRepository {
    /// Sets the desks reported as available.
    pub fn set_available(&self, desks: Vec<Desk>) {
        *self.available.lock() = desks;
    }

    /// Makes the next lookup fail with [`RepositoryError::Unavailable`].
    pub fn fail_next_lookup(&self) {
        self.fail_next_lookup.store(true, Ordering::SeqCst);
    }

    /// Makes every lookup fail with [`RepositoryError::Unavailable`].
    pub fn fail_all_lookups(&self) {
        self.fail_all_lookups.store(true, Ordering::SeqCst);
    }

    /// Number of lookups performed.
    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::SeqCst)
    }

    /// Dates that were looked up, in call order.
    pub fn requested_dates(&self) -> Vec<NaiveDate> {
        self.requested_dates.lock().clone()
    }
}

#[async_trait]
impl DeskRepository for MockDeskRepository {
    async fn available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, RepositoryError> {
        self.lookup_count.fetch_add(1, Ordering::SeqCst);
        self.requested_dates.lock().push(date);

        if self.fail_all_lookups.load(Ordering::SeqCst)
            || self.fail_next_lookup.swap(false, Ordering::SeqCst)
        {
            return Err(RepositoryError::Unavailable {
                reason: "injected lookup failure".to_string(),
            });
        }

        Ok(self.available.lock().clone())
    }
}

impl MockBinding for MockDeskRepository {
    type Subject = dyn DeskRepository;

    fn as_subject(self: Arc<Self>) -> Arc<dyn DeskRepository> {
        self
    }
}

// =============================================================================
// Mock Booking Repository
// =============================================================================

/// A configurable mock of the booking store.
///
/// Assigns sequential booking ids starting at 1 and records every saved
/// booking for verification.
#[derive(Debug, Default)]
pub struct MockBookingRepository {
    /// Saved bookings, in call order.
    saved: Mutex<Vec<DeskBooking>>,

    /// Force the next save to fail.
    fail_next_save: AtomicBool,

    /// Save count for verification.
    save_count: AtomicU64,
}

impl MockBookingRepository {
    /// Makes the next save fail with [`RepositoryError::WriteRejected`].
    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }

    /// Number of saves attempted (including injected failures).
    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::SeqCst)
    }

    /// The bookings saved so far, in call order.
    pub fn saved(&self) -> Vec<DeskBooking> {
        self.saved.lock().clone()
    }
}

#[async_trait]
impl DeskBookingRepository for MockBookingRepository {
    async fn save(&self, booking: DeskBooking) -> Result<u32, RepositoryError> {
        self.save_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(RepositoryError::WriteRejected {
                reason: "injected save failure".to_string(),
            });
        }

        let mut saved = self.saved.lock();
        saved.push(booking);
        Ok(saved.len() as u32)
    }
}

impl MockBinding for MockBookingRepository {
    type Subject = dyn DeskBookingRepository;

    fn as_subject(self: Arc<Self>) -> Arc<dyn DeskBookingRepository> {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
