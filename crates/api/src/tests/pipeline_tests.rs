// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end pipeline tests over the real SQLite in-memory store.

use crate::handler::process_notification;
use crate::tests::fixtures::{Notification, provisioned_store, response_echo_token};
use res_notif::ReservationStore;
use res_notif_domain::{PaymentStatus, ReservationState};

#[test]
fn missing_password_is_an_authentication_error_with_echo_token() {
    let mut store = provisioned_store();
    let body: String = Notification {
        password: None,
        echo_token: None,
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Errors>"));
    assert!(response.contains("<Error Type=\"6\" Code=\"497\">Missing &lt;wsse:Password&gt; field in SOAP XML.</Error>"));
    // No token was recoverable, so one was generated.
    let echo: String = response_echo_token(&response).unwrap();
    assert!(!echo.is_empty());
}

#[test]
fn invalid_api_key_is_an_authentication_error() {
    let mut store = provisioned_store();
    let body: String = Notification {
        password: Some("wrong-key"),
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Error Type=\"6\" Code=\"497\">Invalid API key.</Error>"));
}

#[test]
fn malformed_body_is_a_validation_error_not_a_crash() {
    let mut store = provisioned_store();

    let response: String = process_notification(&mut store, "<not-xml");
    assert!(response.contains("<Error Type=\"4\" Code=\"400\">"));
    assert!(response.contains("Failed to parse XML"));
    let echo: String = response_echo_token(&response).unwrap();
    assert!(!echo.is_empty());
}

#[test]
fn valid_creation_returns_a_sequential_reservation_number() {
    let mut store = provisioned_store();

    let first: String =
        process_notification(&mut store, &Notification::default().render());
    assert!(first.contains("<Success/>"));
    assert!(first.contains("ResID_Value=\"R/00001\""));
    assert_eq!(response_echo_token(&first).as_deref(), Some("echo-fixture-1"));

    let second_body: String = Notification {
        channel_id: "SM-2002",
        rooms: vec![("Standard", "STD", "102")],
        ..Notification::default()
    }
    .render();
    let second: String = process_notification(&mut store, &second_body);
    assert!(second.contains("ResID_Value=\"R/00002\""));
}

#[test]
fn warnings_round_trip_with_success() {
    let mut store = provisioned_store();
    let body: String = Notification {
        email: None,
        phone: None,
        amount: "0",
        adults: 2,
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Success/>"));
    assert!(response.contains("Code=\"321\""));
    assert!(response.contains("Code=\"322\""));
    assert!(response.contains("Code=\"323\""));
    assert!(!response.contains("Code=\"324\""));
    assert_eq!(response.matches("<Warning ").count(), 3);
}

#[test]
fn capacity_boundary_passes_at_exactly_full() {
    let mut store = provisioned_store();
    let body: String = Notification {
        adults: 2,
        children: 0,
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Success/>"));
}

#[test]
fn capacity_overflow_is_rejected_with_the_capacity_pair() {
    let mut store = provisioned_store();
    let body: String = Notification {
        adults: 2,
        children: 1,
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Error Type=\"6\" Code=\"392\">"));
    assert!(response.contains("Insufficient room capacity: 3 guests require 2 total capacity"));
}

#[test]
fn repeated_notification_updates_instead_of_duplicating() {
    let mut store = provisioned_store();
    let body: String = Notification::default().render();

    let first: String = process_notification(&mut store, &body);
    assert!(first.contains("<Success/>"));

    let second: String = process_notification(&mut store, &body);
    assert!(second.contains("<Success/>"));
    // The update path reports the number assigned at creation.
    assert!(second.contains("ResID_Value=\"R/00001\""));

    let record = store.find_by_channel_id("SM-1001").unwrap().unwrap();
    assert_eq!(record.state, ReservationState::Draft);
    assert_eq!(store.reservation_numbers().unwrap().len(), 1);
}

#[test]
fn multi_room_creation_persists_true_guest_counts() {
    let mut store = provisioned_store();
    let body: String = Notification {
        channel_id: "SM-3003",
        rooms: vec![("Deluxe", "DLX", "101"), ("Standard", "STD", "102")],
        adults: 3,
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Success/>"));

    let record = store.find_by_channel_id("SM-3003").unwrap().unwrap();
    assert_eq!(record.adults, 3);
    assert_eq!(record.children, 0);
    assert_eq!(record.state, ReservationState::Confirm);
}

#[test]
fn payment_downgrade_from_channel_is_suppressed_end_to_end() {
    let mut store = provisioned_store();
    process_notification(&mut store, &Notification::default().render());
    assert_eq!(
        store.find_by_channel_id("SM-1001").unwrap().unwrap().payment,
        PaymentStatus::Paid
    );

    let downgrade: String = Notification {
        deposit_percent: "0",
        ..Notification::default()
    }
    .render();
    let response: String = process_notification(&mut store, &downgrade);
    assert!(response.contains("<Success/>"));

    assert_eq!(
        store.find_by_channel_id("SM-1001").unwrap().unwrap().payment,
        PaymentStatus::Paid
    );
}

#[test]
fn missing_customer_name_is_a_validation_error() {
    let mut store = provisioned_store();
    let body: String = Notification {
        guest_name: ("", ""),
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Error Type=\"4\" Code=\"400\">Missing customer name in data</Error>"));
}

#[test]
fn unknown_room_is_a_validation_error() {
    let mut store = provisioned_store();
    let body: String = Notification {
        rooms: vec![("Deluxe", "DLX", "999")],
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains("<Error Type=\"4\" Code=\"400\">"));
    assert!(response.contains("999"));
}

#[test]
fn missing_channel_id_is_a_validation_error() {
    let mut store = provisioned_store();
    let body: String = Notification {
        channel_id: "",
        ..Notification::default()
    }
    .render();

    let response: String = process_notification(&mut store, &body);
    assert!(response.contains(
        "<Error Type=\"4\" Code=\"400\">Missing siteminder_id in reservation data</Error>"
    ));
}

#[test]
fn envelope_without_reservations_is_a_validation_error() {
    let mut store = provisioned_store();
    let body: &str = "<?xml version=\"1.0\"?>\n<soap-env:Envelope xmlns:soap-env=\"http://schemas.xmlsoap.org/soap/envelope/\">\n <soap-env:Header>\n  <wsse:Security><wsse:UsernameToken><wsse:Password>test-api-key</wsse:Password></wsse:UsernameToken></wsse:Security>\n </soap-env:Header>\n <soap-env:Body>\n  <OTA_HotelResNotifRQ Version=\"1.0\"/>\n </soap-env:Body>\n</soap-env:Envelope>";

    let response: String = process_notification(&mut store, body);
    assert!(response.contains("<Error Type=\"4\" Code=\"400\">"));
    assert!(response.contains("Failed to extract reservation data"));
}
