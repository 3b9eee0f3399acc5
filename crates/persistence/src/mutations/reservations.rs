// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation and line mutations.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{
    NewReservationLineRow, NewReservationRow, ReservationChangeset, store_date,
};
use crate::diesel_schema::{reservation_lines, reservations, rooms};
use crate::error::PersistenceError;
use crate::sqlite::{get_last_insert_rowid, now_timestamp};
use res_notif::{NewLine, NewReservation, ReservationPatch};
use res_notif_domain::{LineState, ReservationState, RoomState};

/// Inserts a new reservation in draft state and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate channel id,
/// which violates the unique constraint).
pub fn insert_reservation(
    conn: &mut SqliteConnection,
    new: &NewReservation,
) -> Result<i64, PersistenceError> {
    let row: NewReservationRow = NewReservationRow {
        siteminder_id: new.channel_id.clone(),
        customer_name: new.customer_name.clone(),
        email: new.email.clone(),
        phone: new.phone.clone(),
        checkin: store_date(new.checkin),
        checkout: store_date(new.checkout),
        adults: i32::try_from(new.adults).unwrap_or(i32::MAX),
        children: i32::try_from(new.children).unwrap_or(i32::MAX),
        payment: new.payment.as_str().to_string(),
        state: ReservationState::Draft.as_str().to_string(),
        created_at: now_timestamp(),
    };

    diesel::insert_into(reservations::table)
        .values(&row)
        .execute(conn)?;

    let id: i64 = get_last_insert_rowid(conn)?;
    debug!(reservation_id = id, channel_id = %new.channel_id, "inserted reservation");
    Ok(id)
}

/// Applies a selective field update to a reservation.
///
/// The `bypass_duplicate_check` flag exists for parity with the downstream
/// system's write context; this store has no duplicate-booking check to
/// bypass, so the flag is accepted and ignored.
///
/// # Errors
///
/// Returns `NotFound` if the reservation does not exist, or an error if the
/// write fails.
pub fn update_reservation(
    conn: &mut SqliteConnection,
    id: i64,
    patch: &ReservationPatch,
    _bypass_duplicate_check: bool,
) -> Result<(), PersistenceError> {
    let changeset: ReservationChangeset = ReservationChangeset {
        reservation_no: patch.reservation_no.clone(),
        customer_name: patch.customer_name.clone(),
        email: patch.email.clone(),
        phone: patch.phone.clone(),
        checkin: store_date(patch.checkin),
        checkout: store_date(patch.checkout),
        adults: patch.adults.map(|a| i32::try_from(a).unwrap_or(i32::MAX)),
        children: patch.children.map(|c| i32::try_from(c).unwrap_or(i32::MAX)),
        payment: patch.payment.map(|p| p.as_str().to_string()),
    };
    if changeset.is_noop() {
        return Ok(());
    }

    let updated: usize = diesel::update(reservations::table.find(id))
        .set(&changeset)
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("reservation {id}")));
    }
    Ok(())
}

/// Deletes a reservation after clearing its lines.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn delete_reservation(conn: &mut SqliteConnection, id: i64) -> Result<(), PersistenceError> {
    clear_lines(conn, id)?;
    diesel::delete(reservations::table.find(id)).execute(conn)?;
    debug!(reservation_id = id, "deleted reservation");
    Ok(())
}

/// Removes all lines of a reservation and releases their rooms to vacant.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn clear_lines(conn: &mut SqliteConnection, reservation_id: i64) -> Result<(), PersistenceError> {
    let room_ids: Vec<i64> = reservation_lines::table
        .filter(reservation_lines::reservation_id.eq(reservation_id))
        .select(reservation_lines::room_id)
        .load(conn)?;

    diesel::delete(
        reservation_lines::table.filter(reservation_lines::reservation_id.eq(reservation_id)),
    )
    .execute(conn)?;

    if !room_ids.is_empty() {
        diesel::update(rooms::table.filter(rooms::room_id.eq_any(&room_ids)))
            .set(rooms::state.eq(RoomState::Vacant.as_str()))
            .execute(conn)?;
    }
    Ok(())
}

/// Attaches new lines to a reservation, in `assigned` state.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn add_lines(
    conn: &mut SqliteConnection,
    reservation_id: i64,
    lines: &[NewLine],
) -> Result<(), PersistenceError> {
    let rows: Vec<NewReservationLineRow> = lines
        .iter()
        .map(|line| NewReservationLineRow {
            reservation_id,
            room_type_id: line.room_type_id,
            room_id: line.room_id,
            checkin: store_date(line.checkin),
            checkout: store_date(line.checkout),
            state: LineState::Assigned.as_str().to_string(),
            price_override: line.price_override,
        })
        .collect();

    diesel::insert_into(reservation_lines::table)
        .values(&rows)
        .execute(conn)?;
    Ok(())
}

/// Transitions a reservation to `confirm`, committing its lines and marking
/// their rooms occupied.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn confirm_reservation(conn: &mut SqliteConnection, id: i64) -> Result<(), PersistenceError> {
    set_reservation_state(conn, id, ReservationState::Confirm)?;

    diesel::update(reservation_lines::table.filter(reservation_lines::reservation_id.eq(id)))
        .set(reservation_lines::state.eq(LineState::Confirm.as_str()))
        .execute(conn)?;

    let room_ids: Vec<i64> = reservation_lines::table
        .filter(reservation_lines::reservation_id.eq(id))
        .select(reservation_lines::room_id)
        .load(conn)?;
    if !room_ids.is_empty() {
        diesel::update(rooms::table.filter(rooms::room_id.eq_any(&room_ids)))
            .set(rooms::state.eq(RoomState::Occupied.as_str()))
            .execute(conn)?;
    }
    Ok(())
}

/// Cancels a reservation.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn cancel_reservation(conn: &mut SqliteConnection, id: i64) -> Result<(), PersistenceError> {
    set_reservation_state(conn, id, ReservationState::Cancel)
}

/// Resets a reservation back to draft.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn reset_to_draft(conn: &mut SqliteConnection, id: i64) -> Result<(), PersistenceError> {
    set_reservation_state(conn, id, ReservationState::Draft)
}

fn set_reservation_state(
    conn: &mut SqliteConnection,
    id: i64,
    state: ReservationState,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(reservations::table.find(id))
        .set(reservations::state.eq(state.as_str()))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("reservation {id}")));
    }
    debug!(reservation_id = id, state = %state, "reservation state changed");
    Ok(())
}
