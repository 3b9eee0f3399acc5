// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The create path of reconciliation.

use crate::error::EngineError;
use crate::numbering::next_reservation_number;
use crate::outcome::{ReconcileAction, ReconcileOutcome};
use crate::store::{NewLine, NewReservation, ReservationPatch, ReservationRecord, ReservationStore, RoomStore};
use res_notif_domain::{GuestProfile, ReservationState, StayDetails, parse_stay_date};
use time::Date;
use tracing::{debug, info, warn};

/// Soft date parsing for the create path.
///
/// Channel feeds occasionally ship unparseable dates on otherwise valid
/// bookings; creation proceeds with no date rather than rejecting the
/// reservation.
pub(crate) fn parse_optional_date(raw: &str) -> Option<Date> {
    if raw.trim().is_empty() {
        return None;
    }
    parse_stay_date(raw).ok()
}

/// Sums the capacities of every requested room.
///
/// # Errors
///
/// Returns a validation error naming the first room code that does not
/// resolve to a physical room.
pub(crate) fn total_room_capacity<S>(store: &mut S, stay: &StayDetails) -> Result<u32, EngineError>
where
    S: ReservationStore + RoomStore,
{
    let mut total: u32 = 0;
    for request in &stay.room_types {
        let room = store.room_by_code(&request.code)?.ok_or_else(|| {
            EngineError::Validation(format!(
                "Room '{}' not found for capacity validation",
                request.code
            ))
        })?;
        total += room.capacity;
    }
    Ok(total)
}

/// Resolves every requested room type into a reservation line.
///
/// The channel-reported total amount rides as a price override on the first
/// line only.
///
/// # Errors
///
/// Returns a validation error naming the first room type or room that does
/// not resolve.
pub(crate) fn build_lines<S>(
    store: &mut S,
    stay: &StayDetails,
    amount_after_tax: &str,
    checkin: Option<Date>,
    checkout: Option<Date>,
) -> Result<Vec<NewLine>, EngineError>
where
    S: ReservationStore + RoomStore,
{
    let price: Option<f64> = amount_after_tax.trim().parse::<f64>().ok();

    let mut lines: Vec<NewLine> = Vec::with_capacity(stay.room_types.len());
    for (index, request) in stay.room_types.iter().enumerate() {
        let room_type = store.room_type_by_name(&request.name)?;
        let room = store.room_by_code(&request.code)?;
        let (Some(room_type), Some(room)) = (room_type, room) else {
            return Err(EngineError::Validation(format!(
                "Could not find room type '{}' or room '{}'",
                request.name, request.code
            )));
        };

        lines.push(NewLine {
            room_type_id: room_type.id,
            room_id: room.id,
            checkin,
            checkout,
            price_override: if index == 0 { price } else { None },
        });
    }
    Ok(lines)
}

/// Creates, numbers, and confirms a new reservation.
///
/// The flow mirrors the property system's own booking sequence: validate
/// capacity, resolve rooms into lines, insert as draft, assign the next
/// reservation number, then confirm. A failed confirmation is rolled back
/// (cancel, reset to draft, delete) so no half-confirmed record survives.
///
/// Guest-count workaround: the downstream system rejects multi-room
/// creations that already carry multi-guest counts, so those records are
/// created with placeholder counts (1 adult, 0 children) and immediately
/// patched back to the true totals under the duplicate-check-bypass flag.
/// Single-room requests use true counts directly.
///
/// # Errors
///
/// Returns `Validation`, `Capacity`, `Confirmation`, `Cleanup`, or `Store`
/// depending on where the flow fails.
pub fn create_reservation<S>(
    store: &mut S,
    profile: &GuestProfile,
    stay: &StayDetails,
) -> Result<ReconcileOutcome, EngineError>
where
    S: ReservationStore + RoomStore,
{
    let checkin: Option<Date> = parse_optional_date(&stay.checkin);
    let checkout: Option<Date> = parse_optional_date(&stay.checkout);

    let capacity: u32 = total_room_capacity(store, stay)?;
    let guests: u32 = stay.total_guests();
    if guests > capacity {
        return Err(EngineError::Capacity { guests, capacity });
    }

    let lines: Vec<NewLine> = build_lines(store, stay, &profile.amount_after_tax, checkin, checkout)?;

    let multi_room: bool = stay.room_types.len() > 1;
    let (creation_adults, creation_children): (u32, u32) = if multi_room {
        // Placeholder counts sidestep the downstream multi-room validation
        // defect; the true counts are patched in right after creation.
        (1, 0)
    } else {
        (stay.adults, stay.children)
    };

    let new: NewReservation = NewReservation {
        channel_id: profile.channel_id.clone(),
        customer_name: profile.name.clone(),
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        checkin,
        checkout,
        adults: creation_adults,
        children: creation_children,
        payment: profile.payment,
    };

    let reservation_id: i64 = store.insert_reservation(&new)?;
    store.add_lines(reservation_id, &lines)?;

    let reservation_no: String = next_reservation_number(store)?;
    debug!(
        reservation_id,
        reservation_no = %reservation_no,
        multi_room,
        "assigning reservation number"
    );

    let patch: ReservationPatch = if multi_room {
        ReservationPatch {
            reservation_no: Some(reservation_no.clone()),
            adults: Some(stay.adults),
            children: Some(stay.children),
            ..ReservationPatch::default()
        }
    } else {
        ReservationPatch {
            reservation_no: Some(reservation_no.clone()),
            ..ReservationPatch::default()
        }
    };
    store.update_reservation(reservation_id, &patch, multi_room)?;

    if let Err(err) = confirm_created(store, reservation_id) {
        warn!(
            reservation_id,
            error = %err,
            "confirmation failed; rolling back the created reservation"
        );
        rollback_created(store, reservation_id)?;
        return Err(err);
    }

    info!(
        reservation_id,
        reservation_no = %reservation_no,
        channel_id = %profile.channel_id,
        "reservation created and confirmed"
    );

    Ok(ReconcileOutcome {
        reservation_id,
        reservation_no,
        customer_name: profile.name.clone(),
        checkin: stay.checkin.clone(),
        checkout: stay.checkout.clone(),
        adults: stay.adults,
        children: stay.children,
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        state: ReservationState::Confirm,
        action: ReconcileAction::Created,
        message: String::from("Reservation created and confirmed successfully"),
    })
}

/// Confirms a freshly created record and verifies the resulting state.
fn confirm_created<S>(store: &mut S, reservation_id: i64) -> Result<(), EngineError>
where
    S: ReservationStore + RoomStore,
{
    store
        .confirm_reservation(reservation_id)
        .map_err(|e| EngineError::Confirmation(e.to_string()))?;

    let record: ReservationRecord = store
        .get_reservation(reservation_id)
        .map_err(|e| EngineError::Confirmation(e.to_string()))?;
    if record.state == ReservationState::Confirm {
        Ok(())
    } else {
        Err(EngineError::Confirmation(format!(
            "Reservation state is '{}', expected 'confirm'",
            record.state
        )))
    }
}

/// Unwinds a record whose confirmation failed: cancel, reset to draft, then
/// delete. A failure here outranks the confirmation failure itself.
fn rollback_created<S>(store: &mut S, reservation_id: i64) -> Result<(), EngineError>
where
    S: ReservationStore + RoomStore,
{
    let rollback: Result<(), crate::store::StoreError> = store
        .cancel_reservation(reservation_id)
        .and_then(|()| store.reset_to_draft(reservation_id))
        .and_then(|()| store.delete_reservation(reservation_id));

    rollback.map_err(|e| EngineError::Cleanup(e.to_string()))
}
