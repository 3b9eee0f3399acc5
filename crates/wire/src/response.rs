// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `OTA_HotelResNotifRS` response rendering.
//!
//! The response shape is a fixed template, so it is assembled as text with
//! escaped interpolations rather than through a serializer. Logical errors
//! ride inside the body; the transport status is always 200 and callers must
//! branch on `<Success/>` vs `<Errors>`.

use quick_xml::escape::escape;
use rand::RngExt;
use res_notif_domain::Warning;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// OTA namespace carried on every response payload.
const OTA_NAMESPACE: &str = "http://www.opentravel.org/OTA/2003/05";

/// SOAP envelope namespace.
const SOAP_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Logical error classification carried on the wire.
///
/// Kinds without a row in the OTA (Type, Code) table render through the
/// default `(1, 500)` pair while keeping their kind-specific message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete input.
    Validation,
    /// Guest count exceeds room capacity.
    Capacity,
    /// Uncaught or unexpected failure.
    System,
    /// General reservation processing failure.
    Reservation,
    /// Post-create confirmation failed.
    Confirmation,
    /// Bad or missing credential.
    Authentication,
    /// Room double-booked on update.
    Availability,
    /// Record could not be forced back to draft.
    State,
    /// Rollback after a failed confirmation itself failed.
    Cleanup,
    /// Update requested for an unknown external id.
    NotFound,
    /// Fallback classification.
    Unknown,
}

impl ErrorKind {
    /// Converts this kind to its taxonomy literal.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation_error",
            Self::Capacity => "capacity_error",
            Self::System => "system_error",
            Self::Reservation => "reservation_error",
            Self::Confirmation => "confirmation_error",
            Self::Authentication => "authentication_error",
            Self::Availability => "availability_error",
            Self::State => "state_error",
            Self::Cleanup => "cleanup_error",
            Self::NotFound => "not_found_error",
            Self::Unknown => "unknown_error",
        }
    }

    /// Maps this kind to its fixed OTA `(Type, Code)` pair.
    #[must_use]
    pub const fn wire_codes(&self) -> (&'static str, &'static str) {
        match self {
            Self::Validation => ("4", "400"),
            Self::Capacity => ("6", "392"),
            Self::Reservation => ("3", "300"),
            Self::Confirmation => ("3", "301"),
            Self::Authentication => ("6", "497"),
            _ => ("1", "500"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Generates a fresh correlation token for responses whose request carried
/// none — every response must be correlatable, even to garbage input.
#[must_use]
pub fn generate_echo_token() -> String {
    let value: u128 = rand::rng().random();
    format!("{value:032x}")
}

/// Current UTC timestamp in ISO-8601 form.
fn timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

fn open_envelope(out: &mut String, echo_token: &str) {
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<SOAP-ENV:Envelope xmlns:SOAP-ENV=\"{SOAP_NAMESPACE}\">\n"
    ));
    out.push_str(" <SOAP-ENV:Body>\n");
    out.push_str(&format!(
        "  <OTA_HotelResNotifRS xmlns=\"{OTA_NAMESPACE}\" Version=\"1.0\" TimeStamp=\"{}\" EchoToken=\"{}\">\n",
        timestamp(),
        escape(echo_token),
    ));
}

fn close_envelope(out: &mut String) {
    out.push_str("  </OTA_HotelResNotifRS>\n");
    out.push_str(" </SOAP-ENV:Body>\n");
    out.push_str("</SOAP-ENV:Envelope>\n");
}

fn reservation_block(out: &mut String, reservation_no: &str) {
    let escaped: String = escape(reservation_no).into_owned();
    out.push_str("   <HotelReservations>\n");
    out.push_str("    <HotelReservation>\n");
    out.push_str(&format!("     <UniqueID ID=\"{escaped}\"/>\n"));
    out.push_str("     <ResGlobalInfo>\n");
    out.push_str("      <HotelReservationIDs>\n");
    out.push_str(&format!(
        "       <HotelReservationID ResID_Type=\"10\" ResID_Value=\"{escaped}\"/>\n"
    ));
    out.push_str("      </HotelReservationIDs>\n");
    out.push_str("     </ResGlobalInfo>\n");
    out.push_str("    </HotelReservation>\n");
    out.push_str("   </HotelReservations>\n");
}

/// Renders a success envelope carrying the assigned reservation number.
#[must_use]
pub fn build_success(reservation_no: &str, echo_token: &str) -> String {
    build_success_with_warnings(reservation_no, echo_token, &[])
}

/// Renders a success envelope with an injected `<Warnings>` block.
///
/// Warnings are non-fatal: the envelope still carries `<Success/>`. The
/// caller-chosen type/code literals are preserved verbatim.
#[must_use]
pub fn build_success_with_warnings(
    reservation_no: &str,
    echo_token: &str,
    warnings: &[Warning],
) -> String {
    let mut out: String = String::new();
    open_envelope(&mut out, echo_token);
    out.push_str("   <Success/>\n");
    if !warnings.is_empty() {
        out.push_str("   <Warnings>\n");
        for warning in warnings {
            out.push_str(&format!(
                "    <Warning Type=\"{}\" Code=\"{}\">{}</Warning>\n",
                escape(warning.warning_type.as_str()),
                escape(warning.code.as_str()),
                escape(warning.message.as_str()),
            ));
        }
        out.push_str("   </Warnings>\n");
    }
    reservation_block(&mut out, reservation_no);
    close_envelope(&mut out);
    out
}

/// Renders a typed error envelope.
///
/// The error kind maps to its fixed `(Type, Code)` pair; the message is the
/// human-readable body of the `<Error>` element.
#[must_use]
pub fn build_error(message: &str, kind: ErrorKind, echo_token: &str) -> String {
    let (error_type, code) = kind.wire_codes();
    let mut out: String = String::new();
    open_envelope(&mut out, echo_token);
    out.push_str("   <Errors>\n");
    out.push_str(&format!(
        "    <Error Type=\"{error_type}\" Code=\"{code}\">{}</Error>\n",
        escape(message),
    ));
    out.push_str("   </Errors>\n");
    close_envelope(&mut out);
    out
}
