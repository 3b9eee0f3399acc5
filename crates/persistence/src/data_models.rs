// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Diesel row structs and their conversions to the engine's store records.

use crate::diesel_schema::{reservation_lines, reservations, rooms};
use crate::error::PersistenceError;
use diesel::prelude::*;
use res_notif::{ReservationLine, ReservationRecord, Room};
use res_notif_domain::{
    LineState, PaymentStatus, ReservationState, RoomState, format_stay_date, parse_stay_date,
};
use time::Date;

/// Parses an optional stored `YYYY-MM-DD` date column.
fn parse_stored_date(
    value: Option<String>,
    column: &str,
) -> Result<Option<Date>, PersistenceError> {
    value
        .map(|raw| {
            parse_stay_date(&raw).map_err(|e| {
                PersistenceError::DataIntegrity(format!("bad {column} date '{raw}': {e}"))
            })
        })
        .transpose()
}

/// Formats an optional date for storage.
pub fn store_date(value: Option<Date>) -> Option<String> {
    value.map(format_stay_date)
}

fn parse_count(value: i32, column: &str) -> Result<u32, PersistenceError> {
    u32::try_from(value)
        .map_err(|_| PersistenceError::DataIntegrity(format!("negative {column} count: {value}")))
}

/// Diesel Queryable struct for reservation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservations)]
pub struct ReservationRow {
    pub reservation_id: i64,
    pub reservation_no: Option<String>,
    pub siteminder_id: String,
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub adults: i32,
    pub children: i32,
    pub payment: String,
    pub state: String,
    pub created_at: String,
}

impl ReservationRow {
    /// Converts this row into the engine's record type.
    ///
    /// # Errors
    ///
    /// Returns a `DataIntegrity` error if a stored state, payment, count, or
    /// date literal cannot be interpreted.
    pub fn into_record(self) -> Result<ReservationRecord, PersistenceError> {
        let payment: PaymentStatus = self
            .payment
            .parse()
            .map_err(|e| PersistenceError::DataIntegrity(format!("{e}")))?;
        let state: ReservationState = self
            .state
            .parse()
            .map_err(|e| PersistenceError::DataIntegrity(format!("{e}")))?;

        Ok(ReservationRecord {
            id: self.reservation_id,
            reservation_no: self.reservation_no,
            channel_id: self.siteminder_id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            checkin: parse_stored_date(self.checkin, "checkin")?,
            checkout: parse_stored_date(self.checkout, "checkout")?,
            adults: parse_count(self.adults, "adult")?,
            children: parse_count(self.children, "child")?,
            payment,
            state,
        })
    }
}

/// Diesel Queryable struct for reservation line rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reservation_lines)]
pub struct ReservationLineRow {
    pub line_id: i64,
    pub reservation_id: i64,
    pub room_type_id: i64,
    pub room_id: i64,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub state: String,
    pub price_override: Option<f64>,
}

impl ReservationLineRow {
    /// Converts this row into the engine's line type.
    ///
    /// # Errors
    ///
    /// Returns a `DataIntegrity` error if the stored state or dates cannot
    /// be interpreted.
    pub fn into_line(self) -> Result<ReservationLine, PersistenceError> {
        let state: LineState = self
            .state
            .parse()
            .map_err(|e| PersistenceError::DataIntegrity(format!("{e}")))?;

        Ok(ReservationLine {
            id: self.line_id,
            reservation_id: self.reservation_id,
            room_type_id: self.room_type_id,
            room_id: self.room_id,
            checkin: parse_stored_date(self.checkin, "line checkin")?,
            checkout: parse_stored_date(self.checkout, "line checkout")?,
            state,
            price_override: self.price_override,
        })
    }
}

/// Diesel Queryable struct for room rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = rooms)]
pub struct RoomRow {
    pub room_id: i64,
    pub code: String,
    pub room_type_id: i64,
    pub capacity: i32,
    pub state: String,
}

impl RoomRow {
    /// Converts this row into the engine's room type.
    ///
    /// # Errors
    ///
    /// Returns a `DataIntegrity` error if the stored state or capacity
    /// cannot be interpreted.
    pub fn into_room(self) -> Result<Room, PersistenceError> {
        let state: RoomState = self
            .state
            .parse()
            .map_err(|e| PersistenceError::DataIntegrity(format!("{e}")))?;

        Ok(Room {
            id: self.room_id,
            code: self.code,
            room_type_id: self.room_type_id,
            capacity: parse_count(self.capacity, "capacity")?,
            state,
        })
    }
}

/// Diesel Insertable struct for new reservations.
#[derive(Insertable)]
#[diesel(table_name = reservations)]
pub struct NewReservationRow {
    pub siteminder_id: String,
    pub customer_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub adults: i32,
    pub children: i32,
    pub payment: String,
    pub state: String,
    pub created_at: String,
}

/// Diesel Insertable struct for new reservation lines.
#[derive(Insertable)]
#[diesel(table_name = reservation_lines)]
pub struct NewReservationLineRow {
    pub reservation_id: i64,
    pub room_type_id: i64,
    pub room_id: i64,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub state: String,
    pub price_override: Option<f64>,
}

/// Diesel `AsChangeset` struct for selective reservation updates.
///
/// `None` fields are skipped by Diesel, which is exactly the patch
/// semantics the engine expects.
#[derive(AsChangeset, Default)]
#[diesel(table_name = reservations)]
pub struct ReservationChangeset {
    pub reservation_no: Option<String>,
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
    pub adults: Option<i32>,
    pub children: Option<i32>,
    pub payment: Option<String>,
}

impl ReservationChangeset {
    /// Whether this changeset would write nothing.
    ///
    /// Diesel rejects an empty `SET` clause, so no-op patches are skipped
    /// before reaching the query builder.
    pub const fn is_noop(&self) -> bool {
        self.reservation_no.is_none()
            && self.customer_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.checkin.is_none()
            && self.checkout.is_none()
            && self.adults.is_none()
            && self.children.is_none()
            && self.payment.is_none()
    }
}
