// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::document::parse_document;
use crate::envelope::{ExtractError, extract_echo_token, extract_password, first_reservation};
use crate::tests::helpers::SINGLE_ROOM_NOTIFICATION;

#[test]
fn password_is_found_in_security_header() {
    let doc = parse_document(SINGLE_ROOM_NOTIFICATION);
    assert_eq!(extract_password(&doc).as_deref(), Some("test-api-key"));
}

#[test]
fn missing_or_empty_password_yields_none() {
    let doc = parse_document("<Envelope><Body/></Envelope>");
    assert!(extract_password(&doc).is_none());

    let doc = parse_document(
        "<Envelope><Header><Security><Password>   </Password></Security></Header></Envelope>",
    );
    assert!(extract_password(&doc).is_none());
}

#[test]
fn malformed_document_yields_no_password() {
    let doc = parse_document("<not-xml");
    assert!(extract_password(&doc).is_none());
}

#[test]
fn first_reservation_descends_fixed_path() {
    let doc = parse_document(SINGLE_ROOM_NOTIFICATION);
    let reservation = first_reservation(&doc).unwrap();
    assert!(reservation.get("ResGlobalInfo").is_some());
}

#[test]
fn missing_ota_request_is_reported() {
    let doc = parse_document("<Envelope><Body><SomethingElse/></Body></Envelope>");
    assert_eq!(first_reservation(&doc), Err(ExtractError::NoOtaRequest));

    let doc = parse_document("<Junk/>");
    assert_eq!(first_reservation(&doc), Err(ExtractError::NoOtaRequest));
}

#[test]
fn missing_reservations_are_reported() {
    let doc = parse_document(
        "<Envelope><Body><OTA_HotelResNotifRQ Version=\"1.0\"/></Body></Envelope>",
    );
    assert_eq!(first_reservation(&doc), Err(ExtractError::NoReservation));
}

#[test]
fn batched_reservations_take_the_first() {
    let doc = parse_document(
        r#"<Envelope><Body><OTA_HotelResNotifRQ>
             <HotelReservations>
              <HotelReservation><Marker Value="first"/></HotelReservation>
              <HotelReservation><Marker Value="second"/></HotelReservation>
             </HotelReservations>
           </OTA_HotelResNotifRQ></Body></Envelope>"#,
    );
    let reservation = first_reservation(&doc).unwrap();
    assert_eq!(
        reservation.get("Marker").and_then(|m| m.attr("Value")),
        Some("first")
    );
}

#[test]
fn echo_token_direct_attribute_wins() {
    let doc = parse_document(SINGLE_ROOM_NOTIFICATION);
    assert_eq!(
        extract_echo_token(&doc, SINGLE_ROOM_NOTIFICATION).as_deref(),
        Some("echo-abc-123")
    );
}

#[test]
fn echo_token_recovered_from_raw_text_when_unparseable() {
    let raw: &str = r#"<broken EchoToken="raw-tok-9" <<<"#;
    let doc = parse_document(raw);
    assert!(doc.is_empty());
    assert_eq!(extract_echo_token(&doc, raw).as_deref(), Some("raw-tok-9"));
}

#[test]
fn echo_token_absent_everywhere_yields_none() {
    let raw: &str = "<Envelope><Body/></Envelope>";
    let doc = parse_document(raw);
    assert!(extract_echo_token(&doc, raw).is_none());
}
