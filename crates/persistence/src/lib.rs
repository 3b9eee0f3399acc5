// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the OTA reservation gateway.
//!
//! This crate implements the engine's store traits on `SQLite` via Diesel:
//! the reservation and room inventory of the property system, plus the
//! credential store backing inbound authentication.
//!
//! `SQLite` is the only backend. In-memory databases (unique per
//! construction, via an atomic counter) serve tests and ephemeral runs;
//! file databases run with WAL enabled for read concurrency.
//!
//! The whole store sits behind one connection. Callers serialize access to
//! it for the duration of a request, which is what makes the engine's
//! scan-then-assign reservation numbering safe in this deployment.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use diesel::prelude::*;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use res_notif::{
    CredentialStore, NewLine, NewReservation, ReservationLine, ReservationPatch,
    ReservationRecord, ReservationStore, Room, RoomStore, RoomType, StoreError,
};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the reservation, room, and credential stores.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique shared-memory database instance via an
    /// atomic counter, ensuring deterministic test isolation without
    /// time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_resnotif_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Provisioning
    // ========================================================================

    /// Registers (or rotates) an inbound API key for a login.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn register_api_key(
        &mut self,
        login_name: &str,
        key: &str,
    ) -> Result<(), PersistenceError> {
        mutations::credentials::register_api_key(&mut self.conn, login_name, key)
    }

    /// Creates a room-type category if it does not exist, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_room_type(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::rooms::upsert_room_type(&mut self.conn, name)
    }

    /// Creates or updates a physical room, returning its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_room(
        &mut self,
        code: &str,
        room_type_id: i64,
        capacity: u32,
    ) -> Result<i64, PersistenceError> {
        mutations::rooms::upsert_room(&mut self.conn, code, room_type_id, capacity)
    }

    /// Returns all lines of a reservation, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn lines_for_reservation(
        &mut self,
        reservation_id: i64,
    ) -> Result<Vec<ReservationLine>, PersistenceError> {
        queries::reservations::lines_for_reservation(&mut self.conn, reservation_id)
    }
}

impl ReservationStore for Persistence {
    fn find_by_channel_id(
        &mut self,
        channel_id: &str,
    ) -> Result<Option<ReservationRecord>, StoreError> {
        queries::reservations::find_by_channel_id(&mut self.conn, channel_id)
            .map_err(StoreError::from)
    }

    fn get_reservation(&mut self, id: i64) -> Result<ReservationRecord, StoreError> {
        queries::reservations::get_reservation(&mut self.conn, id).map_err(StoreError::from)
    }

    fn insert_reservation(&mut self, new: &NewReservation) -> Result<i64, StoreError> {
        mutations::reservations::insert_reservation(&mut self.conn, new).map_err(StoreError::from)
    }

    fn update_reservation(
        &mut self,
        id: i64,
        patch: &ReservationPatch,
        bypass_duplicate_check: bool,
    ) -> Result<(), StoreError> {
        mutations::reservations::update_reservation(&mut self.conn, id, patch, bypass_duplicate_check)
            .map_err(StoreError::from)
    }

    fn delete_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        mutations::reservations::delete_reservation(&mut self.conn, id).map_err(StoreError::from)
    }

    fn reservation_numbers(&mut self) -> Result<Vec<String>, StoreError> {
        queries::reservations::reservation_numbers(&mut self.conn).map_err(StoreError::from)
    }

    fn clear_lines(&mut self, reservation_id: i64) -> Result<(), StoreError> {
        mutations::reservations::clear_lines(&mut self.conn, reservation_id)
            .map_err(StoreError::from)
    }

    fn add_lines(&mut self, reservation_id: i64, lines: &[NewLine]) -> Result<(), StoreError> {
        mutations::reservations::add_lines(&mut self.conn, reservation_id, lines)
            .map_err(StoreError::from)
    }

    fn confirm_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        mutations::reservations::confirm_reservation(&mut self.conn, id).map_err(StoreError::from)
    }

    fn cancel_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        mutations::reservations::cancel_reservation(&mut self.conn, id).map_err(StoreError::from)
    }

    fn reset_to_draft(&mut self, id: i64) -> Result<(), StoreError> {
        mutations::reservations::reset_to_draft(&mut self.conn, id).map_err(StoreError::from)
    }

    fn active_lines_for_room(&mut self, room_id: i64) -> Result<Vec<ReservationLine>, StoreError> {
        queries::reservations::active_lines_for_room(&mut self.conn, room_id)
            .map_err(StoreError::from)
    }
}

impl RoomStore for Persistence {
    fn room_by_code(&mut self, code: &str) -> Result<Option<Room>, StoreError> {
        queries::rooms::room_by_code(&mut self.conn, code).map_err(StoreError::from)
    }

    fn room_type_by_name(&mut self, name: &str) -> Result<Option<RoomType>, StoreError> {
        queries::rooms::room_type_by_name(&mut self.conn, name).map_err(StoreError::from)
    }
}

impl CredentialStore for Persistence {
    fn validate_api_key(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        queries::credentials::validate_api_key(&mut self.conn, key).map_err(StoreError::from)
    }

    fn find_or_create_token(&mut self, login: &str) -> Result<String, StoreError> {
        mutations::credentials::find_or_create_token(&mut self.conn, login)
            .map_err(StoreError::from)
    }
}
