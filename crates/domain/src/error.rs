// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stay date string could not be parsed.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Reservation state literal is not recognized.
    InvalidReservationState(String),
    /// Reservation line state literal is not recognized.
    InvalidLineState(String),
    /// Payment status literal is not recognized.
    InvalidPaymentStatus(String),
    /// Room state literal is not recognized.
    InvalidRoomState(String),
    /// The guest profile is missing a name.
    MissingGuestName,
    /// The guest profile is missing the external channel identifier.
    MissingChannelId,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidReservationState(s) => write!(f, "Invalid reservation state: {s}"),
            Self::InvalidLineState(s) => write!(f, "Invalid reservation line state: {s}"),
            Self::InvalidPaymentStatus(s) => write!(f, "Invalid payment status: {s}"),
            Self::InvalidRoomState(s) => write!(f, "Invalid room state: {s}"),
            Self::MissingGuestName => write!(f, "Missing customer name in data"),
            Self::MissingChannelId => write!(f, "Missing siteminder_id in reservation data"),
        }
    }
}

impl std::error::Error for DomainError {}
