// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a reservation record.
///
/// The normal forward path is `Draft` → `Confirm`. `Cancel` and a reset back
/// to `Draft` exist so a failed confirmation can be unwound before the record
/// is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationState {
    /// Initial state after creation. Mutable.
    #[default]
    Draft,
    /// Confirmed with the property. Rooms are committed.
    Confirm,
    /// Cancelled. Used as the first step of rollback.
    Cancel,
    /// Stay completed.
    Done,
}

impl ReservationState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Done => "done",
        }
    }
}

impl FromStr for ReservationState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "confirm" => Ok(Self::Confirm),
            "cancel" => Ok(Self::Cancel),
            "done" => Ok(Self::Done),
            _ => Err(DomainError::InvalidReservationState(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReservationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of a single room-reservation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LineState {
    /// Room selected but not yet committed.
    #[default]
    Assigned,
    /// Room committed for the stay interval.
    Confirm,
    /// Stay on this line completed.
    Done,
}

impl LineState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Confirm => "confirm",
            Self::Done => "done",
        }
    }

    /// Returns whether this line blocks other bookings of the same room.
    ///
    /// Only committed lines participate in overlap checks; an `Assigned`
    /// line belongs to a draft record and does not hold the room.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Confirm | Self::Done)
    }
}

impl FromStr for LineState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(Self::Assigned),
            "confirm" => Ok(Self::Confirm),
            "done" => Ok(Self::Done),
            _ => Err(DomainError::InvalidLineState(s.to_string())),
        }
    }
}

impl std::fmt::Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Occupancy state of a physical room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomState {
    /// Room is free to be assigned.
    #[default]
    Vacant,
    /// Room is held by a reservation line.
    Occupied,
}

impl RoomState {
    /// Converts this state to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vacant => "vacant",
            Self::Occupied => "occupied",
        }
    }
}

impl FromStr for RoomState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vacant" => Ok(Self::Vacant),
            "occupied" => Ok(Self::Occupied),
            _ => Err(DomainError::InvalidRoomState(s.to_string())),
        }
    }
}

impl std::fmt::Display for RoomState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment status of a reservation, as reported by the channel.
///
/// Ordering matters: channel data may move a reservation forward
/// (`NotPaid` → `PartialPaid` → `Paid`) but never backward. Downgrades are
/// an explicit business decision, not the channel's to dictate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// No payment recorded.
    #[default]
    NotPaid,
    /// Deposit or partial payment recorded.
    PartialPaid,
    /// Fully paid.
    Paid,
}

impl PaymentStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotPaid => "not_paid",
            Self::PartialPaid => "partial_paid",
            Self::Paid => "paid",
        }
    }

    /// Numeric rank used for the forward-only update rule.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::NotPaid => 0,
            Self::PartialPaid => 1,
            Self::Paid => 2,
        }
    }

    /// Returns whether replacing `current` with `self` would be a downgrade.
    #[must_use]
    pub const fn is_downgrade_from(&self, current: Self) -> bool {
        self.rank() < current.rank()
    }

    /// Derives a payment status from a deposit/guarantee-payment percentage.
    ///
    /// `100` maps to `Paid`, anything strictly between 0 and 100 maps to
    /// `PartialPaid`, and everything else — including absent or unparseable
    /// values — maps to `NotPaid`.
    #[must_use]
    pub fn from_deposit_percent(percent: &str) -> Self {
        let Ok(value) = percent.trim().parse::<f64>() else {
            return Self::NotPaid;
        };
        if (value - 100.0).abs() < f64::EPSILON {
            Self::Paid
        } else if value > 0.0 && value < 100.0 {
            Self::PartialPaid
        } else {
            Self::NotPaid
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_paid" => Ok(Self::NotPaid),
            "partial_paid" => Ok(Self::PartialPaid),
            "paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidPaymentStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest and billing information extracted from a notification.
///
/// All fields are best-effort: the extractor never fails, so a profile may be
/// partially populated. `validate_profile` decides which absences are fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GuestProfile {
    /// Guest name (given + family, trimmed). May be empty.
    pub name: String,
    /// Guest email address, when present.
    pub email: Option<String>,
    /// Guest phone number, digits only, when present.
    pub phone: Option<String>,
    /// Total amount after tax as reported by the channel. Defaults to `"0"`.
    pub amount_after_tax: String,
    /// External channel booking identifier (`siteminder_id`).
    pub channel_id: String,
    /// Payment status derived from the deposit percentage.
    pub payment: PaymentStatus,
}

/// One requested room type within a room stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoomTypeRequest {
    /// Room-type display name (`@RoomType`).
    pub name: String,
    /// Physical room code (`@RoomID`), resolved against the room store.
    pub code: String,
    /// Room-type code (`@RoomTypeCode`).
    pub type_code: String,
    /// Free-text room description.
    pub description: String,
}

/// Normalized guest counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestCounts {
    /// Number of adults. Always at least 1.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
}

impl GuestCounts {
    /// Total number of guests.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.adults + self.children
    }
}

/// Stay and room information extracted from the first room-stay block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StayDetails {
    /// Check-in date as received (date-only, separators vary).
    pub checkin: String,
    /// Check-out date as received.
    pub checkout: String,
    /// Number of adults. At least 1.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Ordered list of requested room types.
    pub room_types: Vec<RoomTypeRequest>,
}

impl StayDetails {
    /// Total number of guests.
    #[must_use]
    pub const fn total_guests(&self) -> u32 {
        self.adults + self.children
    }
}
