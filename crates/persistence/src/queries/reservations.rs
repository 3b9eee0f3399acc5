// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation and line queries.

use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{ReservationLineRow, ReservationRow};
use crate::diesel_schema::{reservation_lines, reservations};
use crate::error::PersistenceError;
use res_notif::{ReservationLine, ReservationRecord};
use res_notif_domain::LineState;

/// Looks up a reservation by its external channel identifier.
///
/// The `siteminder_id` column carries a unique constraint, so at most one
/// row can match.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be interpreted.
pub fn find_by_channel_id(
    conn: &mut SqliteConnection,
    channel_id: &str,
) -> Result<Option<ReservationRecord>, PersistenceError> {
    debug!(channel_id, "looking up reservation by channel id");

    let row: Option<ReservationRow> = reservations::table
        .filter(reservations::siteminder_id.eq(channel_id))
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?;

    row.map(ReservationRow::into_record).transpose()
}

/// Fetches a reservation by id.
///
/// # Errors
///
/// Returns `NotFound` if no such row exists.
pub fn get_reservation(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<ReservationRecord, PersistenceError> {
    let row: Option<ReservationRow> = reservations::table
        .find(id)
        .select(ReservationRow::as_select())
        .first(conn)
        .optional()?;

    row.ok_or_else(|| PersistenceError::NotFound(format!("reservation {id}")))?
        .into_record()
}

/// Returns every assigned reservation number.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn reservation_numbers(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    let numbers: Vec<Option<String>> = reservations::table
        .select(reservations::reservation_no)
        .load(conn)?;
    Ok(numbers.into_iter().flatten().collect())
}

/// Returns the lines currently holding a room in an active state.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be interpreted.
pub fn active_lines_for_room(
    conn: &mut SqliteConnection,
    room_id: i64,
) -> Result<Vec<ReservationLine>, PersistenceError> {
    let active_states: [&str; 2] = [LineState::Confirm.as_str(), LineState::Done.as_str()];

    let rows: Vec<ReservationLineRow> = reservation_lines::table
        .filter(reservation_lines::room_id.eq(room_id))
        .filter(reservation_lines::state.eq_any(active_states))
        .select(ReservationLineRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(ReservationLineRow::into_line)
        .collect()
}

/// Returns all lines of a reservation, in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails or a row cannot be interpreted.
pub fn lines_for_reservation(
    conn: &mut SqliteConnection,
    reservation_id: i64,
) -> Result<Vec<ReservationLine>, PersistenceError> {
    let rows: Vec<ReservationLineRow> = reservation_lines::table
        .filter(reservation_lines::reservation_id.eq(reservation_id))
        .order(reservation_lines::line_id.asc())
        .select(ReservationLineRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(ReservationLineRow::into_line)
        .collect()
}
