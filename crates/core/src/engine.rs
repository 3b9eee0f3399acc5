// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::create::create_reservation;
use crate::error::EngineError;
use crate::outcome::ReconcileOutcome;
use crate::store::{ReservationStore, RoomStore};
use crate::update::update_reservation;
use res_notif_domain::{GuestProfile, StayDetails};
use tracing::debug;

/// Reconciles a normalized notification against the reservation store.
///
/// The external channel identifier decides the path: an existing record with
/// the same `siteminder_id` is updated in place, otherwise a new record is
/// created and confirmed. Running the same notification twice therefore
/// never creates a duplicate; the second pass routes through update.
///
/// # Arguments
///
/// * `store` - The property reservation and room store
/// * `profile` - Normalized guest and billing information
/// * `stay` - Normalized stay and room information
///
/// # Errors
///
/// Returns `Validation` if the channel identifier is missing, or whatever
/// the chosen path produces.
pub fn reconcile<S>(
    store: &mut S,
    profile: &GuestProfile,
    stay: &StayDetails,
) -> Result<ReconcileOutcome, EngineError>
where
    S: ReservationStore + RoomStore,
{
    if profile.channel_id.trim().is_empty() {
        return Err(EngineError::Validation(String::from(
            "Missing siteminder_id in reservation data",
        )));
    }

    match store.find_by_channel_id(&profile.channel_id)? {
        Some(existing) => {
            debug!(
                channel_id = %profile.channel_id,
                reservation_id = existing.id,
                "existing reservation found; taking the update path"
            );
            update_reservation(store, &existing, profile, stay)
        }
        None => {
            debug!(
                channel_id = %profile.channel_id,
                "no existing reservation; taking the create path"
            );
            create_reservation(store, profile, stay)
        }
    }
}
