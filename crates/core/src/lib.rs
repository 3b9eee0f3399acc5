// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation reconciliation engine.
//!
//! Given a normalized guest profile and stay details, the engine looks up an
//! existing booking by its external channel identifier and either creates or
//! updates the property's reservation record. It talks to the property
//! system exclusively through the store traits in [`store`], so it can run
//! against the real SQLite persistence or a test double alike.

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

mod create;
mod engine;
mod error;
mod numbering;
mod outcome;
mod store;
mod update;

#[cfg(test)]
mod tests;

pub use engine::reconcile;
pub use error::EngineError;
pub use numbering::{RESERVATION_NO_PREFIX, next_reservation_number};
pub use outcome::{ReconcileAction, ReconcileOutcome};
pub use store::{
    CredentialStore, NewLine, NewReservation, ReservationLine, ReservationPatch,
    ReservationRecord, ReservationStore, Room, RoomStore, RoomType, StoreError,
};
