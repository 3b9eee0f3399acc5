// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Room-stay extraction.

use crate::document::XmlValue;
use res_notif_domain::{GuestCounts, RoomTypeRequest, StayDetails, normalize_guest_counts};

/// Extracts stay and room information from the first room-stay block.
///
/// Returns `None` — not an error — when the room-stays collection is absent
/// or malformed; this is the uniform soft-failure contract shared with the
/// customer extractor.
#[must_use]
pub fn extract_stay_details(reservation: &XmlValue) -> Option<StayDetails> {
    let room_stay: &XmlValue = reservation
        .get("RoomStays")?
        .get("RoomStay")?
        .as_list()
        .first()
        .copied()?;

    let time_span: Option<&XmlValue> = room_stay.get("TimeSpan");
    let checkin: String = time_span
        .and_then(|t| t.attr("Start"))
        .unwrap_or("")
        .to_string();
    let checkout: String = time_span
        .and_then(|t| t.attr("End"))
        .unwrap_or("")
        .to_string();

    let counts: GuestCounts = guest_counts(room_stay);
    let room_types: Vec<RoomTypeRequest> = requested_room_types(room_stay);

    Some(StayDetails {
        checkin,
        checkout,
        adults: counts.adults,
        children: counts.children,
        room_types,
    })
}

/// Sums guest counts by OTA age-qualifying code.
fn guest_counts(room_stay: &XmlValue) -> GuestCounts {
    let entries: Vec<(String, u32)> = room_stay
        .get("GuestCounts")
        .and_then(|g| g.get("GuestCount"))
        .map(|counts| {
            counts
                .as_list()
                .iter()
                .map(|count| {
                    let age_code: String =
                        count.attr("AgeQualifyingCode").unwrap_or("").to_string();
                    let count: u32 = count
                        .attr("Count")
                        .and_then(|c| c.trim().parse::<u32>().ok())
                        .unwrap_or(1);
                    (age_code, count)
                })
                .collect()
        })
        .unwrap_or_default();

    normalize_guest_counts(&entries)
}

/// Collects the ordered list of requested room types.
fn requested_room_types(room_stay: &XmlValue) -> Vec<RoomTypeRequest> {
    let Some(room_types) = room_stay.get("RoomTypes").and_then(|r| r.get("RoomType")) else {
        return Vec::new();
    };

    room_types
        .as_list()
        .iter()
        .map(|rt| {
            let description: String = rt
                .get("RoomDescription")
                .and_then(|d| d.get("Text"))
                .and_then(XmlValue::text)
                .unwrap_or("")
                .to_string();
            RoomTypeRequest {
                name: rt.attr("RoomType").unwrap_or("").to_string(),
                code: rt.attr("RoomID").unwrap_or("").to_string(),
                type_code: rt.attr("RoomTypeCode").unwrap_or("").to_string(),
                description,
            }
        })
        .collect()
}
