// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room and room-type queries.

use diesel::prelude::*;

use crate::data_models::RoomRow;
use crate::diesel_schema::{room_types, rooms};
use crate::error::PersistenceError;
use res_notif::{Room, RoomType};

/// Looks up a physical room by its channel-facing code.
///
/// # Errors
///
/// Returns an error if the query fails or the row cannot be interpreted.
pub fn room_by_code(
    conn: &mut SqliteConnection,
    code: &str,
) -> Result<Option<Room>, PersistenceError> {
    let row: Option<RoomRow> = rooms::table
        .filter(rooms::code.eq(code))
        .select(RoomRow::as_select())
        .first(conn)
        .optional()?;

    row.map(RoomRow::into_room).transpose()
}

/// Looks up a room-type category by its display name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn room_type_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<RoomType>, PersistenceError> {
    let row: Option<(i64, String)> = room_types::table
        .filter(room_types::name.eq(name))
        .select((room_types::room_type_id, room_types::name))
        .first(conn)
        .optional()?;

    Ok(row.map(|(id, name)| RoomType { id, name }))
}
