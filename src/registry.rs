// Booking registry: owns the fixed room pool and the live room -> guest assignments

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    eligibility::EligibilityPolicy,
    error::BookingError,
    guest::Guest,
    room::{Room, RoomId, RoomStatus},
    strategy::BookingStrategy,
};

// A live booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub guest: Guest,
    pub booked_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BookingRegistry {
    // rooms[i] holds room id i + 1
    rooms: Vec<Room>,
    assignments: BTreeMap<RoomId, Assignment>,
}

impl BookingRegistry {
    pub fn new(num_rooms: u32) -> Self {
        Self {
            rooms: (1..=num_rooms).map(Room::new).collect(),
            assignments: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    fn room_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        let idx = usize::try_from(room_id).ok()?.checked_sub(1)?;
        self.rooms.get_mut(idx)
    }

    /// Books `room_id` for `guest` if the strategy accepts the request.
    ///
    /// Ids outside `1..=N` are rejected with [`BookingError::InvalidRoomId`]
    /// before any room is looked at.
    pub fn book_room<P: EligibilityPolicy>(
        &mut self,
        room_id: RoomId,
        guest: Guest,
        strategy: &BookingStrategy<P>,
    ) -> Result<(), BookingError> {
        let Some(room) = self.room_mut(room_id) else {
            warn!(room_id, "booking requested for unknown room");
            return Err(BookingError::InvalidRoomId(room_id));
        };

        strategy.attempt_booking(room, &guest)?;

        info!(room_id, guest = guest.name(), "booking confirmed");
        // A previous entry can only exist if room state and map disagree; the new booking wins
        self.assignments.insert(
            room_id,
            Assignment {
                guest,
                booked_at: Utc::now(),
            },
        );

        Ok(())
    }

    pub fn checkout(&mut self, room_id: RoomId) -> Result<Assignment, BookingError> {
        let Some(assignment) = self.assignments.remove(&room_id) else {
            return Err(BookingError::NoBookingFound(room_id));
        };

        if let Some(room) = self.room_mut(room_id) {
            room.vacate();
        }

        info!(room_id, guest = assignment.guest.name(), "checked out");
        Ok(assignment)
    }

    pub fn assignment(&self, room_id: RoomId) -> Option<&Assignment> {
        self.assignments.get(&room_id)
    }

    pub fn list_rooms(&self) -> Vec<RoomStatus> {
        self.rooms.iter().map(Room::status).collect()
    }

    pub fn list_available(&self) -> Vec<RoomId> {
        self.rooms
            .iter()
            .filter(|room| room.is_available())
            .map(Room::id)
            .collect()
    }
}
