// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The update path of reconciliation.

use crate::create::{build_lines, total_room_capacity};
use crate::error::EngineError;
use crate::outcome::{ReconcileAction, ReconcileOutcome};
use crate::store::{
    NewLine, ReservationLine, ReservationPatch, ReservationRecord, ReservationStore, RoomStore,
};
use res_notif_domain::{
    GuestProfile, PaymentStatus, ReservationState, StayDetails, intervals_overlap, parse_stay_date,
};
use time::Date;
use tracing::{debug, info, warn};

/// Updates an existing reservation in place from fresh channel data.
///
/// The record is forced back to draft if needed, its lines are cleared
/// (releasing the rooms), and selective field updates are applied. New dates
/// are re-parsed and new room types are re-validated for availability and
/// capacity before the lines are rebuilt. The record deliberately stays in
/// draft afterwards — re-confirmation is a manual decision at the property.
///
/// Lines are cleared before re-validation runs, so a validation failure
/// leaves the record in draft with no lines. That partial-mutation window is
/// inherited behavior the channel integration depends on; wrap the store in
/// a transaction before changing it.
///
/// # Errors
///
/// Returns `State`, `Validation`, `Availability`, `Capacity`, or `Store`
/// depending on where the flow fails.
pub fn update_reservation<S>(
    store: &mut S,
    record: &ReservationRecord,
    profile: &GuestProfile,
    stay: &StayDetails,
) -> Result<ReconcileOutcome, EngineError>
where
    S: ReservationStore + RoomStore,
{
    force_to_draft(store, record)?;
    store.clear_lines(record.id)?;

    let checkin: Option<Date> = parse_updated_date(&stay.checkin)?;
    let checkout: Option<Date> = parse_updated_date(&stay.checkout)?;

    let patch: ReservationPatch = assemble_patch(record, profile, stay, checkin, checkout);
    store.update_reservation(record.id, &patch, false)?;

    if !stay.room_types.is_empty() {
        let effective_in: Option<Date> = checkin.or(record.checkin);
        let effective_out: Option<Date> = checkout.or(record.checkout);

        validate_availability(store, record, stay, effective_in, effective_out)?;

        let capacity: u32 = total_room_capacity(store, stay)?;
        let guests: u32 = stay.total_guests();
        if guests > capacity {
            return Err(EngineError::Capacity { guests, capacity });
        }

        let lines: Vec<NewLine> = build_lines(
            store,
            stay,
            &profile.amount_after_tax,
            effective_in,
            effective_out,
        )?;
        store.add_lines(record.id, &lines)?;
    }

    let updated: ReservationRecord = store.get_reservation(record.id)?;
    info!(
        reservation_id = updated.id,
        channel_id = %updated.channel_id,
        "reservation updated from channel data"
    );

    Ok(ReconcileOutcome {
        reservation_id: updated.id,
        reservation_no: updated.reservation_no.unwrap_or_default(),
        customer_name: updated.customer_name,
        checkin: stay.checkin.clone(),
        checkout: stay.checkout.clone(),
        adults: updated.adults,
        children: updated.children,
        email: updated.email,
        phone: updated.phone,
        state: ReservationState::Draft,
        action: ReconcileAction::Updated,
        message: String::from("Reservation updated successfully"),
    })
}

/// Forces a non-draft record back to draft via cancel + reset.
fn force_to_draft<S>(store: &mut S, record: &ReservationRecord) -> Result<(), EngineError>
where
    S: ReservationStore + RoomStore,
{
    if record.state == ReservationState::Draft {
        return Ok(());
    }

    debug!(
        reservation_id = record.id,
        state = %record.state,
        "forcing reservation back to draft before update"
    );

    let reset: Result<(), crate::store::StoreError> = store
        .cancel_reservation(record.id)
        .and_then(|()| store.reset_to_draft(record.id));
    reset.map_err(|e| {
        EngineError::State(format!(
            "Could not return reservation to draft for update: {e}"
        ))
    })?;

    let current: ReservationRecord = store.get_reservation(record.id)?;
    if current.state == ReservationState::Draft {
        Ok(())
    } else {
        Err(EngineError::State(format!(
            "Reservation state is '{}' after reset, expected 'draft'",
            current.state
        )))
    }
}

/// Strict date parsing for the update path: a provided-but-unparseable date
/// aborts the update.
fn parse_updated_date(raw: &str) -> Result<Option<Date>, EngineError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_stay_date(raw)
        .map(Some)
        .map_err(|e| EngineError::Validation(e.to_string()))
}

/// Assembles the selective field patch.
///
/// Fields arrive from the channel best-effort, so only provided values are
/// written. Payment status moves forward only: a downgrade from channel data
/// is suppressed, since downgrades are business policy, not the channel's
/// call.
fn assemble_patch(
    record: &ReservationRecord,
    profile: &GuestProfile,
    stay: &StayDetails,
    checkin: Option<Date>,
    checkout: Option<Date>,
) -> ReservationPatch {
    let payment: Option<PaymentStatus> = if profile.payment == record.payment {
        None
    } else if profile.payment.is_downgrade_from(record.payment) {
        warn!(
            reservation_id = record.id,
            current = %record.payment,
            requested = %profile.payment,
            "suppressing payment status downgrade from channel data"
        );
        None
    } else {
        Some(profile.payment)
    };

    ReservationPatch {
        customer_name: if profile.name.trim().is_empty() {
            None
        } else {
            Some(profile.name.clone())
        },
        email: profile.email.clone(),
        phone: profile.phone.clone(),
        checkin,
        checkout,
        adults: Some(stay.adults),
        children: Some(stay.children),
        payment,
        reservation_no: None,
    }
}

/// Rejects the update when any requested room has an overlapping active
/// booking, excluding lines belonging to the record being updated.
fn validate_availability<S>(
    store: &mut S,
    record: &ReservationRecord,
    stay: &StayDetails,
    checkin: Option<Date>,
    checkout: Option<Date>,
) -> Result<(), EngineError>
where
    S: ReservationStore + RoomStore,
{
    let (Some(new_in), Some(new_out)) = (checkin, checkout) else {
        // Without a known interval there is nothing to compare against.
        return Ok(());
    };

    for request in &stay.room_types {
        let Some(room) = store.room_by_code(&request.code)? else {
            return Err(EngineError::Validation(format!(
                "Room '{}' not found for availability validation",
                request.code
            )));
        };

        let lines: Vec<ReservationLine> = store.active_lines_for_room(room.id)?;
        for line in &lines {
            if line.reservation_id == record.id || !line.state.is_active() {
                continue;
            }
            if let (Some(line_in), Some(line_out)) = (line.checkin, line.checkout)
                && intervals_overlap(new_in, new_out, line_in, line_out)
            {
                return Err(EngineError::Availability(format!(
                    "Room '{}' is already booked for the requested dates",
                    request.code
                )));
            }
        }
    }
    Ok(())
}
