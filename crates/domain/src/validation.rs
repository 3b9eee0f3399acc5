// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{GuestCounts, GuestProfile};
use time::Date;

/// OTA age-qualifying codes counted as adults.
const ADULT_AGE_CODES: [&str; 2] = ["10", "1"];

/// OTA age-qualifying codes counted as children.
const CHILD_AGE_CODES: [&str; 3] = ["8", "7", "2"];

/// Normalizes raw OTA guest-count entries into adult/child totals.
///
/// Each entry is an `(age_qualifying_code, count)` pair as found on a
/// `GuestCount` element. Codes `10` and `1` count as adults, `8`, `7` and `2`
/// as children; unknown codes default to adult. A zero adult total is forced
/// to 1 so a reservation always has at least one countable guest.
///
/// # Arguments
///
/// * `entries` - Raw `(age_code, count)` pairs in document order
#[must_use]
pub fn normalize_guest_counts(entries: &[(String, u32)]) -> GuestCounts {
    let mut adults: u32 = 0;
    let mut children: u32 = 0;

    for (age_code, count) in entries {
        if ADULT_AGE_CODES.contains(&age_code.as_str()) {
            adults += count;
        } else if CHILD_AGE_CODES.contains(&age_code.as_str()) {
            children += count;
        } else {
            adults += count;
        }
    }

    if adults == 0 {
        adults = 1;
    }

    GuestCounts { adults, children }
}

/// Checks whether two half-open `[check_in, check_out)` intervals overlap.
///
/// Back-to-back stays (one ending the day the other begins) do not overlap.
#[must_use]
pub fn intervals_overlap(a_in: Date, a_out: Date, b_in: Date, b_out: Date) -> bool {
    a_in < b_out && b_in < a_out
}

/// Validates the mandatory fields of an extracted guest profile.
///
/// The extractors fail soft and produce partially-populated profiles; this
/// is the point where missing mandatory fields become hard errors.
///
/// # Errors
///
/// Returns an error if:
/// - The guest name is empty
/// - The external channel identifier is empty
pub fn validate_profile(profile: &GuestProfile) -> Result<(), DomainError> {
    if profile.name.trim().is_empty() {
        return Err(DomainError::MissingGuestName);
    }
    if profile.channel_id.trim().is_empty() {
        return Err(DomainError::MissingChannelId);
    }
    Ok(())
}
