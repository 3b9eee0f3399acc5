// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The notification pipeline.

use crate::auth::AuthenticationService;
use crate::error::translate_engine_error;
use res_notif::{CredentialStore, ReservationStore, RoomStore, reconcile};
use res_notif_domain::{GuestProfile, Warning, collect_warnings};
use res_notif_wire::{
    ErrorKind, XmlValue, build_error, build_success, build_success_with_warnings,
    extract_echo_token, extract_guest_profile, extract_stay_details, first_reservation,
    generate_echo_token, parse_document,
};
use tracing::{info, warn};

/// Processes one inbound `OTA_HotelResNotifRQ` body end to end.
///
/// The pipeline runs strictly downstream: parse, authenticate, extract,
/// validate, reconcile, respond. Every exit, including authentication
/// failures and garbage input, produces a complete `OTA_HotelResNotifRS`
/// body with a correlatable echo token; the caller ships it with transport
/// status 200 and the channel branches on `<Success/>` vs `<Errors>`.
pub fn process_notification<S>(store: &mut S, body: &str) -> String
where
    S: ReservationStore + RoomStore + CredentialStore,
{
    let doc: XmlValue = parse_document(body);
    let echo: String = extract_echo_token(&doc, body).unwrap_or_else(generate_echo_token);

    if doc.is_empty() {
        warn!(body_len = body.len(), "notification body failed to parse");
        return build_error(
            "Failed to parse XML. Make sure the SOAP body is well-formed.",
            ErrorKind::Validation,
            &echo,
        );
    }

    let Some(api_key) = AuthenticationService::extract_api_key(&doc) else {
        return build_error(
            "Missing <wsse:Password> field in SOAP XML.",
            ErrorKind::Authentication,
            &echo,
        );
    };
    if AuthenticationService::get_token(store, &api_key).is_none() {
        return build_error("Invalid API key.", ErrorKind::Authentication, &echo);
    }

    let reservation: &XmlValue = match first_reservation(&doc) {
        Ok(node) => node,
        Err(err) => {
            return build_error(
                &format!("Failed to extract reservation data: {err}"),
                ErrorKind::Validation,
                &echo,
            );
        }
    };

    let profile: GuestProfile = extract_guest_profile(reservation);
    if profile.name.trim().is_empty() {
        return build_error("Missing customer name in data", ErrorKind::Validation, &echo);
    }

    let Some(stay) = extract_stay_details(reservation) else {
        return build_error(
            "No room stay information found in reservation",
            ErrorKind::Validation,
            &echo,
        );
    };

    let warnings: Vec<Warning> = collect_warnings(&profile, &stay);

    match reconcile(store, &profile, &stay) {
        Ok(outcome) => {
            info!(
                reservation_no = %outcome.reservation_no,
                action = outcome.action.as_str(),
                warnings = warnings.len(),
                "notification reconciled"
            );
            if warnings.is_empty() {
                build_success(&outcome.reservation_no, &echo)
            } else {
                build_success_with_warnings(&outcome.reservation_no, &echo, &warnings)
            }
        }
        Err(err) => {
            let (kind, message) = translate_engine_error(&err);
            warn!(kind = %kind, message = %message, "reconciliation failed");
            build_error(&message, kind, &echo)
        }
    }
}
