// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;

/// Errors produced by the reconciliation engine.
///
/// This is a closed set: every failure mode of the create and update paths
/// has its own variant, and the API layer translates each into a wire error
/// kind. There are no blanket catch-alls; unexpected store failures arrive
/// as `Store` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or incomplete input (missing mandatory field, unresolvable
    /// room or room type, unparseable date on update).
    Validation(String),
    /// Requested guests exceed the summed capacity of the requested rooms.
    Capacity {
        /// Total requested guests (adults + children).
        guests: u32,
        /// Summed capacity of the requested rooms.
        capacity: u32,
    },
    /// A requested room is already booked for an overlapping interval.
    Availability(String),
    /// An existing record could not be forced back to draft before update.
    State(String),
    /// The record was created but could not be confirmed.
    Confirmation(String),
    /// Rollback after a failed confirmation itself failed.
    Cleanup(String),
    /// No record exists for the given channel identifier.
    NotFound {
        /// The channel identifier that was looked up.
        channel_id: String,
    },
    /// The store failed underneath the engine.
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "{msg}"),
            Self::Capacity { guests, capacity } => write!(
                f,
                "Insufficient room capacity: {guests} guests require {capacity} total capacity"
            ),
            Self::Availability(msg) => write!(f, "{msg}"),
            Self::State(msg) => write!(f, "{msg}"),
            Self::Confirmation(msg) => write!(f, "Reservation could not be confirmed: {msg}"),
            Self::Cleanup(msg) => write!(f, "Reservation cleanup failed: {msg}"),
            Self::NotFound { channel_id } => {
                write!(f, "No reservation found for siteminder_id '{channel_id}'")
            }
            Self::Store(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
