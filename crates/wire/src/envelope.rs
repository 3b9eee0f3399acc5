// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SOAP envelope navigation.

use crate::document::XmlValue;
use thiserror::Error;
use tracing::debug;

/// Failures while locating the reservation payload inside the envelope.
///
/// These surface to the caller as validation errors; the message text is the
/// wire-visible error body.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// The envelope does not contain an `OTA_HotelResNotifRQ` element.
    #[error("No OTA_HotelResNotifRQ found in XML")]
    NoOtaRequest,
    /// The request carries no hotel reservations.
    #[error("No hotel reservations found in XML")]
    NoReservation,
}

/// Extracts the WS-Security password from the SOAP header.
///
/// The password element is searched at any depth because senders disagree
/// about header nesting. Parse failures upstream yield an empty document, so
/// this simply returns `None` for them — absence of a key is the uniform
/// outcome for every failure mode here.
#[must_use]
pub fn extract_password(doc: &XmlValue) -> Option<String> {
    let text: &str = doc.find_first("Password")?.text()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Descends to the first hotel reservation in the request.
///
/// Path: Envelope → Body → `OTA_HotelResNotifRQ` → `HotelReservations` →
/// first `HotelReservation`. When a notification batches multiple
/// reservations only the first is processed; the rest are logged and
/// ignored.
///
/// # Errors
///
/// Returns an error if any path segment is absent.
pub fn first_reservation(doc: &XmlValue) -> Result<&XmlValue, ExtractError> {
    let ota: &XmlValue = doc
        .get("Envelope")
        .and_then(|e| e.get("Body"))
        .and_then(|b| b.get("OTA_HotelResNotifRQ"))
        .ok_or(ExtractError::NoOtaRequest)?;

    let reservations: &XmlValue = ota
        .get("HotelReservations")
        .and_then(|c| c.get("HotelReservation"))
        .ok_or(ExtractError::NoReservation)?;

    let all: Vec<&XmlValue> = reservations.as_list();
    if all.len() > 1 {
        debug!(
            count = all.len(),
            "notification batches multiple reservations; only the first is processed"
        );
    }
    all.first().copied().ok_or(ExtractError::NoReservation)
}

/// Best-effort recovery of the caller's correlation token.
///
/// Checked as a direct attribute on the OTA request element, then anywhere
/// in the parsed tree, then via a raw-text scan — the last covers documents
/// too malformed to parse at all.
#[must_use]
pub fn extract_echo_token(doc: &XmlValue, raw: &str) -> Option<String> {
    let direct: Option<&str> = doc
        .get("Envelope")
        .and_then(|e| e.get("Body"))
        .and_then(|b| b.get("OTA_HotelResNotifRQ"))
        .and_then(|o| o.attr("EchoToken"));
    if let Some(token) = nonempty(direct) {
        return Some(token);
    }

    if let Some(token) = nonempty(doc.find_first_attr("EchoToken")) {
        return Some(token);
    }

    raw_echo_token_scan(raw)
}

fn nonempty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Scans raw text for an `EchoToken="..."` attribute.
fn raw_echo_token_scan(raw: &str) -> Option<String> {
    for quote in ['"', '\''] {
        let marker: String = format!("EchoToken={quote}");
        if let Some(rest) = raw.split(marker.as_str()).nth(1)
            && let Some(token) = rest.split(quote).next()
        {
            let token: &str = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }
    None
}
