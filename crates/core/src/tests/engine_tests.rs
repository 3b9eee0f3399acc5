// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::engine::reconcile;
use crate::error::EngineError;
use crate::outcome::ReconcileAction;
use crate::tests::helpers::{profile, single_room_stay, two_room_store};
use res_notif_domain::GuestProfile;

#[test]
fn missing_channel_id_is_rejected_before_any_lookup() {
    let mut store = two_room_store();
    let mut no_channel: GuestProfile = profile("");
    no_channel.channel_id = String::from("   ");

    let err = reconcile(&mut store, &no_channel, &single_room_stay()).unwrap_err();
    assert_eq!(
        err,
        EngineError::Validation(String::from("Missing siteminder_id in reservation data"))
    );
    assert!(store.reservations.is_empty());
}

#[test]
fn lookup_is_idempotent_never_creating_duplicates() {
    let mut store = two_room_store();

    let first = reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();
    assert_eq!(first.action, ReconcileAction::Created);

    let second = reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();
    assert_eq!(second.action, ReconcileAction::Updated);

    assert_eq!(store.reservations.len(), 1);
}

#[test]
fn distinct_channel_ids_create_distinct_records() {
    let mut store = two_room_store();
    reconcile(&mut store, &profile("SM-1001"), &single_room_stay()).unwrap();

    let mut other_stay = single_room_stay();
    other_stay.room_types[0].name = String::from("Standard");
    other_stay.room_types[0].code = String::from("102");
    reconcile(&mut store, &profile("SM-2002"), &other_stay).unwrap();

    assert_eq!(store.reservations.len(), 2);
}
