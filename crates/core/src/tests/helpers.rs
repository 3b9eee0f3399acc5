// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper fixtures: an in-memory store double and canned inputs.

use crate::store::{
    NewLine, NewReservation, ReservationLine, ReservationPatch, ReservationRecord,
    ReservationStore, Room, RoomStore, RoomType, StoreError,
};
use res_notif_domain::{
    GuestProfile, LineState, PaymentStatus, ReservationState, RoomState, RoomTypeRequest,
    StayDetails,
};

/// In-memory implementation of the store traits.
///
/// Behaves like the SQLite persistence for the operations the engine uses,
/// with switches to simulate downstream failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub rooms: Vec<Room>,
    pub room_types: Vec<RoomType>,
    pub reservations: Vec<ReservationRecord>,
    pub lines: Vec<ReservationLine>,
    next_reservation_id: i64,
    next_line_id: i64,
    /// When set, `confirm_reservation` succeeds but leaves the record in
    /// draft — the downstream failure mode the create path must detect.
    pub confirm_leaves_draft: bool,
    /// When set, `delete_reservation` fails, breaking rollback.
    pub fail_delete: bool,
}

impl MemoryStore {
    fn room_state(&mut self, room_id: i64, state: RoomState) {
        if let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) {
            room.state = state;
        }
    }

    fn reservation_mut(&mut self, id: i64) -> Result<&mut ReservationRecord, StoreError> {
        self.reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("reservation {id}")))
    }

    /// Seeds a bare record, for numbering and update tests.
    pub fn seed_reservation(&mut self, channel_id: &str, reservation_no: Option<&str>) -> i64 {
        self.next_reservation_id += 1;
        let id: i64 = self.next_reservation_id;
        self.reservations.push(ReservationRecord {
            id,
            reservation_no: reservation_no.map(str::to_string),
            channel_id: channel_id.to_string(),
            customer_name: String::from("Seeded Guest"),
            email: None,
            phone: None,
            checkin: None,
            checkout: None,
            adults: 1,
            children: 0,
            payment: PaymentStatus::NotPaid,
            state: ReservationState::Draft,
        });
        id
    }
}

impl ReservationStore for MemoryStore {
    fn find_by_channel_id(
        &mut self,
        channel_id: &str,
    ) -> Result<Option<ReservationRecord>, StoreError> {
        Ok(self
            .reservations
            .iter()
            .find(|r| r.channel_id == channel_id)
            .cloned())
    }

    fn get_reservation(&mut self, id: i64) -> Result<ReservationRecord, StoreError> {
        self.reservations
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("reservation {id}")))
    }

    fn insert_reservation(&mut self, new: &NewReservation) -> Result<i64, StoreError> {
        self.next_reservation_id += 1;
        let id: i64 = self.next_reservation_id;
        self.reservations.push(ReservationRecord {
            id,
            reservation_no: None,
            channel_id: new.channel_id.clone(),
            customer_name: new.customer_name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            checkin: new.checkin,
            checkout: new.checkout,
            adults: new.adults,
            children: new.children,
            payment: new.payment,
            state: ReservationState::Draft,
        });
        Ok(id)
    }

    fn update_reservation(
        &mut self,
        id: i64,
        patch: &ReservationPatch,
        _bypass_duplicate_check: bool,
    ) -> Result<(), StoreError> {
        let record: &mut ReservationRecord = self.reservation_mut(id)?;
        if let Some(name) = &patch.customer_name {
            record.customer_name = name.clone();
        }
        if let Some(email) = &patch.email {
            record.email = Some(email.clone());
        }
        if let Some(phone) = &patch.phone {
            record.phone = Some(phone.clone());
        }
        if let Some(checkin) = patch.checkin {
            record.checkin = Some(checkin);
        }
        if let Some(checkout) = patch.checkout {
            record.checkout = Some(checkout);
        }
        if let Some(adults) = patch.adults {
            record.adults = adults;
        }
        if let Some(children) = patch.children {
            record.children = children;
        }
        if let Some(payment) = patch.payment {
            record.payment = payment;
        }
        if let Some(no) = &patch.reservation_no {
            record.reservation_no = Some(no.clone());
        }
        Ok(())
    }

    fn delete_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        if self.fail_delete {
            return Err(StoreError::Backend(String::from(
                "simulated delete failure",
            )));
        }
        self.clear_lines(id)?;
        self.reservations.retain(|r| r.id != id);
        Ok(())
    }

    fn reservation_numbers(&mut self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .reservations
            .iter()
            .filter_map(|r| r.reservation_no.clone())
            .collect())
    }

    fn clear_lines(&mut self, reservation_id: i64) -> Result<(), StoreError> {
        let released: Vec<i64> = self
            .lines
            .iter()
            .filter(|l| l.reservation_id == reservation_id)
            .map(|l| l.room_id)
            .collect();
        self.lines.retain(|l| l.reservation_id != reservation_id);
        for room_id in released {
            self.room_state(room_id, RoomState::Vacant);
        }
        Ok(())
    }

    fn add_lines(&mut self, reservation_id: i64, lines: &[NewLine]) -> Result<(), StoreError> {
        for line in lines {
            self.next_line_id += 1;
            self.lines.push(ReservationLine {
                id: self.next_line_id,
                reservation_id,
                room_type_id: line.room_type_id,
                room_id: line.room_id,
                checkin: line.checkin,
                checkout: line.checkout,
                state: LineState::Assigned,
                price_override: line.price_override,
            });
        }
        Ok(())
    }

    fn confirm_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        if self.confirm_leaves_draft {
            return Ok(());
        }
        self.reservation_mut(id)?.state = ReservationState::Confirm;
        let rooms: Vec<i64> = self
            .lines
            .iter_mut()
            .filter(|l| l.reservation_id == id)
            .map(|l| {
                l.state = LineState::Confirm;
                l.room_id
            })
            .collect();
        for room_id in rooms {
            self.room_state(room_id, RoomState::Occupied);
        }
        Ok(())
    }

    fn cancel_reservation(&mut self, id: i64) -> Result<(), StoreError> {
        self.reservation_mut(id)?.state = ReservationState::Cancel;
        Ok(())
    }

    fn reset_to_draft(&mut self, id: i64) -> Result<(), StoreError> {
        self.reservation_mut(id)?.state = ReservationState::Draft;
        Ok(())
    }

    fn active_lines_for_room(&mut self, room_id: i64) -> Result<Vec<ReservationLine>, StoreError> {
        Ok(self
            .lines
            .iter()
            .filter(|l| l.room_id == room_id && l.state.is_active())
            .cloned()
            .collect())
    }
}

impl RoomStore for MemoryStore {
    fn room_by_code(&mut self, code: &str) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.iter().find(|r| r.code == code).cloned())
    }

    fn room_type_by_name(&mut self, name: &str) -> Result<Option<RoomType>, StoreError> {
        Ok(self.room_types.iter().find(|t| t.name == name).cloned())
    }
}

/// A store with a Deluxe room 101 and a Standard room 102, both sleeping 2.
pub fn two_room_store() -> MemoryStore {
    MemoryStore {
        room_types: vec![
            RoomType {
                id: 1,
                name: String::from("Deluxe"),
            },
            RoomType {
                id: 2,
                name: String::from("Standard"),
            },
        ],
        rooms: vec![
            Room {
                id: 11,
                code: String::from("101"),
                room_type_id: 1,
                capacity: 2,
                state: RoomState::Vacant,
            },
            Room {
                id: 12,
                code: String::from("102"),
                room_type_id: 2,
                capacity: 2,
                state: RoomState::Vacant,
            },
        ],
        ..MemoryStore::default()
    }
}

/// A complete guest profile for the given channel id.
pub fn profile(channel_id: &str) -> GuestProfile {
    GuestProfile {
        name: String::from("Jane Doe"),
        email: Some(String::from("jane.doe@example.com")),
        phone: Some(String::from("15551234567")),
        amount_after_tax: String::from("450.00"),
        channel_id: channel_id.to_string(),
        payment: PaymentStatus::Paid,
    }
}

fn room_request(name: &str, code: &str) -> RoomTypeRequest {
    RoomTypeRequest {
        name: name.to_string(),
        code: code.to_string(),
        type_code: name.to_uppercase(),
        description: format!("{name} room"),
    }
}

/// A single-room stay: Deluxe 101, 2 adults, March 1–4.
pub fn single_room_stay() -> StayDetails {
    StayDetails {
        checkin: String::from("2026-03-01"),
        checkout: String::from("2026-03-04"),
        adults: 2,
        children: 0,
        room_types: vec![room_request("Deluxe", "101")],
    }
}

/// A two-room stay: Deluxe 101 + Standard 102, 3 adults, April 1–5.
pub fn multi_room_stay() -> StayDetails {
    StayDetails {
        checkin: String::from("2026-04-01"),
        checkout: String::from("2026-04-05"),
        adults: 3,
        children: 0,
        room_types: vec![room_request("Deluxe", "101"), room_request("Standard", "102")],
    }
}
