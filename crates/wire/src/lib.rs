// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! OTA XML wire handling.
//!
//! This crate owns both directions of the wire: a generic, fail-soft
//! XML-to-map reader with the OTA-specific extractors on the inbound side,
//! and the `OTA_HotelResNotifRS` response renderer on the outbound side.
//! Everything past this boundary works with typed domain records.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod customer;
mod document;
mod envelope;
mod response;
mod room_stay;

#[cfg(test)]
mod tests;

pub use customer::extract_guest_profile;
pub use document::{XmlValue, parse_document};
pub use envelope::{ExtractError, extract_echo_token, extract_password, first_reservation};
pub use response::{
    ErrorKind, build_error, build_success, build_success_with_warnings, generate_echo_token,
};
pub use room_stay::extract_stay_details;
