// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Container Integration Tests
//!
//! Integration tests for the object container:
//!
//! - Specimen generation and seeding
//! - Freeze and registration semantics
//! - Mock binding and injection recipes
//!
//! ## Test Categories
//!
//! - `test_create_*`: specimen generation
//! - `test_resolve_*`: freeze and injection semantics
//! - `test_register_*`: explicit registration

use sutkit_core::container::Container;
use sutkit_core::error::ContainerError;

use deskbooker::{
    CorrelationId, DeskBookingRequest, DeskBookingRequestProcessor, DeskBookingResult,
    DeskBookingResultCode,
};

use sutkit_tests::common::mocks::{MockBookingRepository, MockDeskRepository};
use sutkit_tests::common::register_booking_mocks;

// =============================================================================
// Specimen Generation
// =============================================================================

#[test]
fn test_create_populates_domain_requests() {
    let container = Container::with_seed(11);
    let request: DeskBookingRequest = container.create();

    assert!(!request.first_name.is_empty());
    assert!(!request.last_name.is_empty());
    assert!(request.email.contains('@'));
}

#[test]
fn test_create_many_returns_requested_count() {
    let container = Container::with_seed(12);
    let requests: Vec<DeskBookingRequest> = container.create_many(5);

    assert_eq!(requests.len(), 5);
}

#[test]
fn test_seeded_containers_generate_identical_requests() {
    let first = Container::with_seed(42);
    let second = Container::with_seed(42);

    let a: DeskBookingRequest = first.create();
    let b: DeskBookingRequest = second.create();

    assert_eq!(a, b);
}

#[test]
fn test_correlation_ids_generate_uniquely() {
    let container = Container::with_seed(13);
    let first: CorrelationId = container.create();
    let second: CorrelationId = container.create();

    assert_ne!(first, second);
}

#[test]
fn test_build_customizes_a_generated_result() {
    let container = Container::with_seed(14);
    let request: DeskBookingRequest = container.create();

    let expected = container
        .build::<DeskBookingResult>()
        .with(|r| {
            r.code = DeskBookingResultCode::Success;
            r.desk_booking_id = Some(1);
            r.first_name = request.first_name.clone();
            r.last_name = request.last_name.clone();
            r.email = request.email.clone();
            r.date = request.date;
        })
        .create();

    assert_eq!(expected.code, DeskBookingResultCode::Success);
    assert_eq!(expected.desk_booking_id, Some(1));
    assert_eq!(expected.email, request.email);
}

// =============================================================================
// Freeze & Registration
// =============================================================================

#[test]
fn test_resolve_returns_the_same_request_everywhere() {
    let container = Container::with_seed(15);

    let frozen: DeskBookingRequest = container.resolve();
    let resolved_again: DeskBookingRequest = container.resolve();
    let created: DeskBookingRequest = container.create();

    assert_eq!(frozen, resolved_again);
    assert_eq!(frozen, created);
}

#[test]
fn test_register_overrides_generated_values() {
    let container = Container::new();
    let request = DeskBookingRequest {
        first_name: "Margaret".to_string(),
        last_name: "Hamilton".to_string(),
        email: "margaret@example.com".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2026, 7, 20).unwrap(),
    };
    container.register(request.clone());

    assert_eq!(container.create::<DeskBookingRequest>(), request);
}

#[test]
fn test_register_factory_controls_generation() {
    let container = Container::new();
    container.register_factory(|c: &Container| DeskBookingRequest {
        first_name: "Factory".to_string(),
        last_name: "Made".to_string(),
        email: "factory@example.com".to_string(),
        date: c.create(),
    });

    let request: DeskBookingRequest = container.create();
    assert_eq!(request.first_name, "Factory");
    assert_eq!(request.last_name, "Made");
}

// =============================================================================
// Mocks & Injection
// =============================================================================

#[tokio::test]
async fn test_resolve_mock_is_frozen_and_bound() {
    let container = Container::new();

    let mock = container.resolve_mock::<MockDeskRepository>();
    mock.set_available(vec![deskbooker::Desk { id: 21 }]);

    // The same instance comes back on a later resolve.
    let again = container.resolve_mock::<MockDeskRepository>();
    assert_eq!(again.lookup_count(), 0);

    // And the subject binding observes the configuration.
    let subject = container.dep::<dyn deskbooker::DeskRepository>().unwrap();
    let desks = subject
        .available_desks(chrono::NaiveDate::from_ymd_opt(2026, 2, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(desks, vec![deskbooker::Desk { id: 21 }]);
}

#[test]
fn test_resolve_sut_requires_registered_dependencies() {
    let container = Container::new();

    let result = container.resolve_sut::<DeskBookingRequestProcessor>();

    assert!(matches!(
        result,
        Err(ContainerError::MissingDependency { .. })
    ));
}

#[tokio::test]
async fn test_resolve_sut_with_registered_mocks() {
    let container = Container::new();
    register_booking_mocks(&container);

    let sut: DeskBookingRequestProcessor = container.resolve_sut().unwrap();
    let request: DeskBookingRequest = container.create();
    let correlation: CorrelationId = container.create();

    // Default mocks report no availability, so the processor runs end to
    // end without further configuration.
    let result = sut.book_desk(&request, &correlation).await.unwrap();
    assert_eq!(result.code, DeskBookingResultCode::NoDeskAvailable);

    let bookings = container.resolve_mock::<MockBookingRepository>();
    assert_eq!(bookings.save_count(), 0);
}
