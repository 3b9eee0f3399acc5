// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod dates;
mod error;
mod types;
mod validation;
mod warnings;

#[cfg(test)]
mod tests;

pub use dates::{format_stay_date, parse_stay_date};
pub use error::DomainError;
pub use types::{
    GuestCounts, GuestProfile, LineState, PaymentStatus, ReservationState, RoomState,
    RoomTypeRequest, StayDetails,
};
pub use validation::{intervals_overlap, normalize_guest_counts, validate_profile};
pub use warnings::{Warning, collect_warnings};
