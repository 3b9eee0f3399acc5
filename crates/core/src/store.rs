// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store collaborator traits.
//!
//! The property-management data store is an external collaborator with a
//! known query/command interface. The engine only sees these traits; all
//! transaction semantics (or the lack of them) belong to the implementation.

use res_notif_domain::{LineState, PaymentStatus, ReservationState, RoomState};
use time::Date;

/// Errors surfaced by a store implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store failed.
    Backend(String),
    /// A referenced record does not exist.
    NotFound(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Backend(msg) => write!(f, "Store error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// A physical room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Store identifier.
    pub id: i64,
    /// Room code as referenced by the channel (`@RoomID`).
    pub code: String,
    /// The room-type category this room belongs to.
    pub room_type_id: i64,
    /// Number of guests this room sleeps.
    pub capacity: u32,
    /// Current occupancy state.
    pub state: RoomState,
}

/// A room-type category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomType {
    /// Store identifier.
    pub id: i64,
    /// Display name as referenced by the channel (`@RoomType`).
    pub name: String,
}

/// A persisted reservation record.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationRecord {
    /// Store identifier.
    pub id: i64,
    /// Human-readable sequential number (`R/NNNNN`), once assigned.
    pub reservation_no: Option<String>,
    /// External channel booking identifier. Unique.
    pub channel_id: String,
    /// Guest name.
    pub customer_name: String,
    /// Guest email.
    pub email: Option<String>,
    /// Guest phone, digits only.
    pub phone: Option<String>,
    /// Check-in date.
    pub checkin: Option<Date>,
    /// Check-out date.
    pub checkout: Option<Date>,
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Payment status.
    pub payment: PaymentStatus,
    /// Lifecycle state.
    pub state: ReservationState,
}

/// One room-reservation line binding a physical room to a stay interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationLine {
    /// Store identifier.
    pub id: i64,
    /// Owning reservation.
    pub reservation_id: i64,
    /// Room-type category.
    pub room_type_id: i64,
    /// The bound physical room.
    pub room_id: i64,
    /// Line check-in date.
    pub checkin: Option<Date>,
    /// Line check-out date.
    pub checkout: Option<Date>,
    /// Line state.
    pub state: LineState,
    /// Channel-reported price carried on the first line only.
    pub price_override: Option<f64>,
}

/// Values for a new reservation record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    /// External channel booking identifier.
    pub channel_id: String,
    /// Guest name.
    pub customer_name: String,
    /// Guest email.
    pub email: Option<String>,
    /// Guest phone.
    pub phone: Option<String>,
    /// Check-in date.
    pub checkin: Option<Date>,
    /// Check-out date.
    pub checkout: Option<Date>,
    /// Number of adults at creation time (may be a placeholder).
    pub adults: u32,
    /// Number of children at creation time (may be a placeholder).
    pub children: u32,
    /// Payment status.
    pub payment: PaymentStatus,
}

/// Values for a new reservation line.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLine {
    /// Room-type category.
    pub room_type_id: i64,
    /// The physical room to bind.
    pub room_id: i64,
    /// Line check-in date.
    pub checkin: Option<Date>,
    /// Line check-out date.
    pub checkout: Option<Date>,
    /// Channel-reported price, first line only.
    pub price_override: Option<f64>,
}

/// Selective field updates for an existing reservation.
///
/// `None` means "leave the field untouched".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReservationPatch {
    /// New guest name.
    pub customer_name: Option<String>,
    /// New guest email.
    pub email: Option<String>,
    /// New guest phone.
    pub phone: Option<String>,
    /// New check-in date.
    pub checkin: Option<Date>,
    /// New check-out date.
    pub checkout: Option<Date>,
    /// New adult count.
    pub adults: Option<u32>,
    /// New child count.
    pub children: Option<u32>,
    /// New payment status. Downgrade suppression happens before the patch
    /// is assembled; the store writes whatever arrives here.
    pub payment: Option<PaymentStatus>,
    /// Assigned reservation number.
    pub reservation_no: Option<String>,
}

/// Query/command interface of the reservation side of the property store.
pub trait ReservationStore {
    /// Looks up a reservation by its external channel identifier.
    ///
    /// The channel identifier is unique; at most one record matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    fn find_by_channel_id(
        &mut self,
        channel_id: &str,
    ) -> Result<Option<ReservationRecord>, StoreError>;

    /// Fetches a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the query fails.
    fn get_reservation(&mut self, id: i64) -> Result<ReservationRecord, StoreError>;

    /// Inserts a new reservation and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_reservation(&mut self, new: &NewReservation) -> Result<i64, StoreError>;

    /// Applies a selective field update.
    ///
    /// `bypass_duplicate_check` mirrors the downstream system's context flag
    /// for writes that would otherwise trip its duplicate-booking check; see
    /// the multi-room creation workaround in the engine.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the write fails.
    fn update_reservation(
        &mut self,
        id: i64,
        patch: &ReservationPatch,
        bypass_duplicate_check: bool,
    ) -> Result<(), StoreError>;

    /// Deletes a reservation and its lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    fn delete_reservation(&mut self, id: i64) -> Result<(), StoreError>;

    /// Returns every assigned reservation number.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn reservation_numbers(&mut self) -> Result<Vec<String>, StoreError>;

    /// Removes all lines of a reservation, releasing their rooms to vacant.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn clear_lines(&mut self, reservation_id: i64) -> Result<(), StoreError>;

    /// Attaches new lines to a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn add_lines(&mut self, reservation_id: i64, lines: &[NewLine]) -> Result<(), StoreError>;

    /// Transitions a reservation to `confirm`, committing its lines and
    /// rooms.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition fails.
    fn confirm_reservation(&mut self, id: i64) -> Result<(), StoreError>;

    /// Cancels a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition fails.
    fn cancel_reservation(&mut self, id: i64) -> Result<(), StoreError>;

    /// Resets a reservation back to `draft`.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition fails.
    fn reset_to_draft(&mut self, id: i64) -> Result<(), StoreError>;

    /// Returns the lines currently holding a room in an active state.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn active_lines_for_room(&mut self, room_id: i64) -> Result<Vec<ReservationLine>, StoreError>;
}

/// Query interface of the room side of the property store.
pub trait RoomStore {
    /// Looks up a physical room by its channel-facing code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn room_by_code(&mut self, code: &str) -> Result<Option<Room>, StoreError>;

    /// Looks up a room-type category by its display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn room_type_by_name(&mut self, name: &str) -> Result<Option<RoomType>, StoreError>;
}

/// External credential validation and token issuance.
pub trait CredentialStore {
    /// Validates an opaque API key, returning the owning login on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails. An unknown key is `Ok(None)`.
    fn validate_api_key(&mut self, key: &str) -> Result<Option<String>, StoreError>;

    /// Mints or retrieves the opaque access token for a login.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails.
    fn find_or_create_token(&mut self, login: &str) -> Result<String, StoreError>;
}
