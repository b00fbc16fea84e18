// Room inventory: a single bookable unit and its availability flag

use serde::Serialize;
use thiserror::Error;

pub type RoomId = u32;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Room {0} is already booked")]
pub struct AlreadyBooked(pub RoomId);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    available: bool,
}

// Read-only view handed out by the registry listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoomStatus {
    pub id: RoomId,
    pub available: bool,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            available: true,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn book(&mut self) -> Result<(), AlreadyBooked> {
        if !self.available {
            return Err(AlreadyBooked(self.id));
        }

        self.available = false;
        Ok(())
    }

    /// Marks the room available again. Vacating an available room is a no-op.
    pub fn vacate(&mut self) {
        self.available = true;
    }

    pub fn status(&self) -> RoomStatus {
        RoomStatus {
            id: self.id,
            available: self.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_then_rebook() {
        let mut room = Room::new(4);
        assert!(room.is_available());

        assert_eq!(room.book(), Ok(()));
        assert!(!room.is_available());

        // Booked -> Booked is rejected but leaves the room untouched
        assert_eq!(room.book(), Err(AlreadyBooked(4)));
        assert!(!room.is_available());
    }

    #[test]
    fn test_vacate_is_idempotent() {
        let mut room = Room::new(1);
        room.vacate();
        assert!(room.is_available());

        room.book().unwrap();
        room.vacate();
        room.vacate();
        assert_eq!(
            room.status(),
            RoomStatus {
                id: 1,
                available: true
            }
        );
    }
}
