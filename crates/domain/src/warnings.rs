// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Non-fatal reservation warnings.
//!
//! Warnings flag missing-but-non-blocking fields on an otherwise successful
//! reconciliation. They ride back to the channel inside the success envelope
//! and never fail a request.

use crate::types::{GuestProfile, StayDetails};
use serde::{Deserialize, Serialize};

/// A structured, non-fatal warning attached to a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// OTA warning type literal.
    pub warning_type: String,
    /// OTA warning code literal.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl Warning {
    fn new(code: &str, message: &str) -> Self {
        Self {
            warning_type: String::from("10"),
            code: String::from(code),
            message: String::from(message),
        }
    }

    /// Guest email address is missing.
    #[must_use]
    pub fn missing_email() -> Self {
        Self::new("321", "Guest email address is required")
    }

    /// Guest phone number is missing.
    #[must_use]
    pub fn missing_phone() -> Self {
        Self::new("322", "Guest phone number is recommended")
    }

    /// Total amount is missing or zero.
    #[must_use]
    pub fn missing_amount() -> Self {
        Self::new("323", "Total amount information is missing")
    }

    /// Guest counts were absent and defaulted.
    #[must_use]
    pub fn defaulted_guest_count() -> Self {
        Self::new("324", "Guest count information was defaulted")
    }
}

/// Collects the standard warnings for a normalized notification.
///
/// The defaulted-guest-count warning fires when the counts look like the
/// extractor's fallback (at most one adult, no children), which is
/// indistinguishable from a genuine single-adult booking — the channel gets
/// the benefit of the doubt either way.
#[must_use]
pub fn collect_warnings(profile: &GuestProfile, stay: &StayDetails) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = Vec::new();

    if profile.email.as_deref().is_none_or(|e| e.trim().is_empty()) {
        warnings.push(Warning::missing_email());
    }
    if profile.phone.as_deref().is_none_or(|p| p.trim().is_empty()) {
        warnings.push(Warning::missing_phone());
    }
    if profile.amount_after_tax.trim().is_empty() || profile.amount_after_tax.trim() == "0" {
        warnings.push(Warning::missing_amount());
    }
    if stay.adults <= 1 && stay.children == 0 {
        warnings.push(Warning::defaulted_guest_count());
    }

    warnings
}
