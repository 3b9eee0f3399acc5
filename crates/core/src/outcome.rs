// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use res_notif_domain::ReservationState;

/// Which reconciliation path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileAction {
    /// No record existed for the channel id; one was created and confirmed.
    Created,
    /// An existing record was updated in place.
    Updated,
}

impl ReconcileAction {
    /// Converts this action to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// The result of a successful reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// Store identifier of the reservation.
    pub reservation_id: i64,
    /// Assigned human-readable reservation number.
    pub reservation_no: String,
    /// Guest name.
    pub customer_name: String,
    /// Check-in date as received from the channel.
    pub checkin: String,
    /// Check-out date as received from the channel.
    pub checkout: String,
    /// Final persisted adult count.
    pub adults: u32,
    /// Final persisted child count.
    pub children: u32,
    /// Guest email.
    pub email: Option<String>,
    /// Guest phone.
    pub phone: Option<String>,
    /// Final reservation state (`confirm` after create, `draft` after
    /// update).
    pub state: ReservationState,
    /// Which path produced this outcome.
    pub action: ReconcileAction,
    /// Human-readable summary.
    pub message: String,
}
