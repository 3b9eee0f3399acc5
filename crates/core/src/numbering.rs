// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation number generation.

use crate::error::EngineError;
use crate::store::ReservationStore;

/// Prefix of every generated reservation number.
pub const RESERVATION_NO_PREFIX: &str = "R/";

/// Derives the next reservation number.
///
/// Scans every assigned number with the `R/` prefix, parses the numeric
/// suffix of each (malformed suffixes are skipped, not counted), takes the
/// maximum and increments it, formatting as `R/` plus a 5-digit zero-padded
/// decimal. Numbering therefore survives gaps and manually assigned rows.
///
/// This read-compute-write sequence is not transactional: two concurrent
/// invocations can derive the same number. Callers must serialize access to
/// the store across the whole scan-then-assign span.
///
/// # Errors
///
/// Returns an error if the store query fails.
pub fn next_reservation_number<S: ReservationStore + ?Sized>(
    store: &mut S,
) -> Result<String, EngineError> {
    let numbers: Vec<String> = store.reservation_numbers()?;

    let mut highest: u32 = 0;
    for number in &numbers {
        if !number.starts_with(RESERVATION_NO_PREFIX) {
            continue;
        }
        if let Some(suffix) = number.rsplit('/').next()
            && let Ok(value) = suffix.parse::<u32>()
            && value > highest
        {
            highest = value;
        }
    }

    Ok(format!("{RESERVATION_NO_PREFIX}{:05}", highest + 1))
}
