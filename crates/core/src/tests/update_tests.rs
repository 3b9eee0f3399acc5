// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::reconcile;
use crate::error::EngineError;
use crate::outcome::ReconcileAction;
use crate::tests::helpers::{profile, single_room_stay, two_room_store};
use res_notif_domain::{GuestProfile, PaymentStatus, ReservationState, StayDetails};

#[test]
fn second_notification_updates_in_place() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    let mut updated_profile: GuestProfile = profile("SM-1001");
    updated_profile.email = Some(String::from("new.address@example.com"));

    let outcome = reconcile(&mut store, &updated_profile, &single_room_stay()).unwrap();
    assert_eq!(outcome.action, ReconcileAction::Updated);
    assert_eq!(outcome.state, ReservationState::Draft);

    assert_eq!(store.reservations.len(), 1);
    let record = &store.reservations[0];
    assert_eq!(record.email.as_deref(), Some("new.address@example.com"));
    // Deliberately left in draft, not re-confirmed.
    assert_eq!(record.state, ReservationState::Draft);
}

#[test]
fn payment_downgrade_from_channel_is_suppressed() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();
    assert_eq!(store.reservations[0].payment, PaymentStatus::Paid);

    let mut downgrading: GuestProfile = profile("SM-1001");
    downgrading.payment = PaymentStatus::NotPaid;

    reconcile(&mut store, &downgrading, &single_room_stay()).unwrap();
    assert_eq!(store.reservations[0].payment, PaymentStatus::Paid);
}

#[test]
fn payment_upgrade_from_channel_is_applied() {
    let mut store = two_room_store();
    let mut initial: GuestProfile = profile("SM-1001");
    initial.payment = PaymentStatus::PartialPaid;
    reconcile(&mut store, &initial, &single_room_stay()).unwrap();

    let mut upgraded: GuestProfile = profile("SM-1001");
    upgraded.payment = PaymentStatus::Paid;
    reconcile(&mut store, &upgraded, &single_room_stay()).unwrap();

    assert_eq!(store.reservations[0].payment, PaymentStatus::Paid);
}

#[test]
fn update_rebuilds_lines_for_new_rooms() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();
    assert_eq!(store.lines[0].room_id, 11);

    let mut stay: StayDetails = single_room_stay();
    stay.room_types[0].name = String::from("Standard");
    stay.room_types[0].code = String::from("102");

    reconcile(&mut store, &profile("SM-1001"), &stay).unwrap();
    assert_eq!(store.lines.len(), 1);
    assert_eq!(store.lines[0].room_id, 12);
}

#[test]
fn overlapping_active_booking_blocks_the_update() {
    let mut store = two_room_store();
    // Guest A confirms room 101 for March 1-4.
    reconcile(&mut store, &profile("SM-AAAA"), &single_room_stay()).unwrap();

    // Guest B confirms room 102 for the same dates.
    let mut stay_b: StayDetails = single_room_stay();
    stay_b.room_types[0].name = String::from("Standard");
    stay_b.room_types[0].code = String::from("102");
    reconcile(&mut store, &profile("SM-BBBB"), &stay_b).unwrap();

    // Guest B now asks to move into room 101 while A still holds it.
    let mut conflicting: StayDetails = single_room_stay();
    conflicting.checkin = String::from("2026-03-02");
    conflicting.checkout = String::from("2026-03-05");

    let err = reconcile(&mut store, &profile("SM-BBBB"), &conflicting).unwrap_err();
    assert!(matches!(err, EngineError::Availability(_)));
    assert!(err.to_string().contains("101"));
}

#[test]
fn own_lines_are_excluded_from_the_availability_check() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    // Same guest, same room, same dates: must not conflict with itself.
    let outcome = reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();
    assert_eq!(outcome.action, ReconcileAction::Updated);
}

#[test]
fn back_to_back_stays_do_not_conflict() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-AAAA"), &single_room_stay()).unwrap();

    let mut stay_b: StayDetails = single_room_stay();
    stay_b.room_types[0].name = String::from("Standard");
    stay_b.room_types[0].code = String::from("102");
    reconcile(&mut store, &profile("SM-BBBB"), &stay_b).unwrap();

    // B moves to room 101 starting the day A checks out.
    let mut adjacent: StayDetails = single_room_stay();
    adjacent.checkin = String::from("2026-03-04");
    adjacent.checkout = String::from("2026-03-07");

    assert!(reconcile(&mut store, &profile("SM-BBBB"), &adjacent).is_ok());
}

#[test]
fn bad_date_aborts_update_after_lines_are_cleared() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    let mut stay: StayDetails = single_room_stay();
    stay.checkin = String::from("garbage-date");

    let err = reconcile(&mut store, &profile("SM-1001"), &stay).unwrap_err();
    assert!(matches!(err, EngineError::Validation(_)));

    // Inherited partial-mutation window: the record survives in draft with
    // its lines already cleared.
    assert_eq!(store.reservations.len(), 1);
    assert_eq!(store.reservations[0].state, ReservationState::Draft);
    assert!(store.lines.is_empty());
}

#[test]
fn update_capacity_is_revalidated() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    let mut stay: StayDetails = single_room_stay();
    stay.adults = 4;

    let err = reconcile(&mut store, &profile("SM-1001"), &stay).unwrap_err();
    assert_eq!(
        err,
        EngineError::Capacity {
            guests: 4,
            capacity: 2
        }
    );
}

#[test]
fn update_refreshes_guest_counts() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    let mut stay: StayDetails = single_room_stay();
    stay.adults = 1;
    stay.children = 1;

    reconcile(&mut store, &profile("SM-1001"), &stay).unwrap();
    assert_eq!(store.reservations[0].adults, 1);
    assert_eq!(store.reservations[0].children, 1);
}
