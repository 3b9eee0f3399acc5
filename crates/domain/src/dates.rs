// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay-date parsing.
//!
//! Channel managers are inconsistent about date separators (`2026-03-04`,
//! `2026/3/4`), so dates are normalized before parsing. Only the date part is
//! carried; the property system attaches times of day itself.

use crate::error::DomainError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a date-only string from a notification.
///
/// Accepts `/` or `-` as separators and un-padded month/day components.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is empty, has the
/// wrong number of components, or does not name a real calendar date.
pub fn parse_stay_date(raw: &str) -> Result<Date, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::DateParseError {
            date_string: raw.to_string(),
            error: String::from("empty date string"),
        });
    }

    let dashed: String = trimmed.replace('/', "-");
    let parts: Vec<&str> = dashed.split('-').collect();

    let normalized: String = if parts.len() == 3 {
        format!("{}-{:0>2}-{:0>2}", parts[0], parts[1], parts[2])
    } else {
        dashed
    };

    Date::parse(&normalized, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date back into the canonical `YYYY-MM-DD` storage form.
#[must_use]
pub fn format_stay_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
