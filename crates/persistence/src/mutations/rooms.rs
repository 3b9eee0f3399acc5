// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room and room-type bootstrap mutations.
//!
//! Room inventory is normally managed by the property system; these entry
//! points exist for initial provisioning and tests.

use diesel::prelude::*;

use crate::diesel_schema::{room_types, rooms};
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;
use res_notif_domain::RoomState;

/// Creates a room-type category if it does not exist, returning its id.
///
/// # Errors
///
/// Returns an error if the query or insert fails.
pub fn upsert_room_type(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    let existing: Option<i64> = room_types::table
        .filter(room_types::name.eq(name))
        .select(room_types::room_type_id)
        .first(conn)
        .optional()?;
    if let Some(id) = existing {
        return Ok(id);
    }

    diesel::insert_into(room_types::table)
        .values(room_types::name.eq(name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates or updates a physical room, returning its id.
///
/// # Errors
///
/// Returns an error if the query or write fails.
pub fn upsert_room(
    conn: &mut SqliteConnection,
    code: &str,
    room_type_id: i64,
    capacity: u32,
) -> Result<i64, PersistenceError> {
    let capacity: i32 = i32::try_from(capacity).unwrap_or(i32::MAX);

    let existing: Option<i64> = rooms::table
        .filter(rooms::code.eq(code))
        .select(rooms::room_id)
        .first(conn)
        .optional()?;
    if let Some(id) = existing {
        diesel::update(rooms::table.find(id))
            .set((rooms::room_type_id.eq(room_type_id), rooms::capacity.eq(capacity)))
            .execute(conn)?;
        return Ok(id);
    }

    diesel::insert_into(rooms::table)
        .values((
            rooms::code.eq(code),
            rooms::room_type_id.eq(room_type_id),
            rooms::capacity.eq(capacity),
            rooms::state.eq(RoomState::Vacant.as_str()),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}
