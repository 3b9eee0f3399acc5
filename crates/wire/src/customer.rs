// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest profile extraction.

use crate::document::XmlValue;
use res_notif_domain::{GuestProfile, PaymentStatus};

/// OTA profile type literal for a primary guest profile.
const PRIMARY_PROFILE_TYPE: &str = "1";

/// Extracts guest and billing information from a reservation node.
///
/// Navigates to the first guest profile (preferring one explicitly typed as
/// primary when several exist) and projects name, phone, email, total
/// amount, the external channel identifier, and a payment status derived
/// from the deposit percentage.
///
/// This never fails: every lookup defaults to an empty or absent value, so
/// the result may be partially populated. Mandatory-field enforcement is the
/// caller's job.
#[must_use]
pub fn extract_guest_profile(reservation: &XmlValue) -> GuestProfile {
    let res_global: Option<&XmlValue> = reservation.get("ResGlobalInfo");

    let customer: Option<&XmlValue> = res_global
        .and_then(|g| g.get("Profiles"))
        .and_then(|p| p.get("ProfileInfo"))
        .and_then(select_profile_info)
        .and_then(|info| info.get("Profile"))
        .map(first_of)
        .and_then(|profile| profile.get("Customer"));

    let name: String = customer
        .and_then(|c| c.get("PersonName"))
        .map_or_else(String::new, person_name);

    let phone: Option<String> = customer
        .and_then(|c| c.get("Telephone"))
        .and_then(|t| t.attr("PhoneNumber"))
        .map(strip_non_digits)
        .filter(|p| !p.is_empty());

    let email: Option<String> = customer
        .and_then(|c| c.get("Email"))
        .and_then(XmlValue::text)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    let amount_after_tax: String = res_global
        .and_then(|g| g.get("Total"))
        .and_then(|t| t.attr("AmountAfterTax"))
        .map_or_else(|| String::from("0"), str::to_string);

    let channel_id: String = res_global
        .and_then(|g| g.get("HotelReservationIDs"))
        .and_then(|ids| ids.get("HotelReservationID"))
        .and_then(|id| id.attr("ResID_Value"))
        .map_or_else(String::new, str::to_string);

    let payment: PaymentStatus = res_global
        .and_then(|g| g.get("DepositPayments"))
        .and_then(|d| d.get("GuaranteePayment"))
        .map(first_of)
        .and_then(|g| g.get("AmountPercent"))
        .and_then(|a| a.attr("Percent"))
        .map_or(PaymentStatus::NotPaid, PaymentStatus::from_deposit_percent);

    GuestProfile {
        name,
        email,
        phone,
        amount_after_tax,
        channel_id,
        payment,
    }
}

/// Picks the profile-info entry to read the guest from.
///
/// When a payload carries several profiles (guest, travel agent, company),
/// the one whose profile is explicitly typed as primary wins; otherwise the
/// first entry is used.
fn select_profile_info(profile_info: &XmlValue) -> Option<&XmlValue> {
    let infos: Vec<&XmlValue> = profile_info.as_list();
    infos
        .iter()
        .find(|info| {
            info.get("Profile")
                .map(first_of)
                .and_then(|p| p.attr("ProfileType"))
                == Some(PRIMARY_PROFILE_TYPE)
        })
        .or_else(|| infos.first())
        .copied()
}

/// Single-or-many coercion to the first element.
fn first_of(value: &XmlValue) -> &XmlValue {
    value.as_list().first().copied().unwrap_or(value)
}

/// Concatenates given and family name, trimmed.
fn person_name(person: &XmlValue) -> String {
    let given: &str = person
        .get("GivenName")
        .and_then(XmlValue::text)
        .unwrap_or("");
    let family: &str = person
        .get("Surname")
        .and_then(XmlValue::text)
        .unwrap_or("");
    format!("{given} {family}").trim().to_string()
}

/// Strips every non-digit character from a phone number.
fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
