// Error types shared by the booking core

use thiserror::Error;

use crate::room::{AlreadyBooked, RoomId};

// Every variant is a recoverable business outcome, the front desk reports it and carries on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid room number: {0}")]
    InvalidRoomId(RoomId),

    #[error("Room {0} is already booked")]
    RoomUnavailable(RoomId),

    #[error("{guest} is not eligible to book room {room_id}")]
    NotEligible { room_id: RoomId, guest: String },

    #[error("No booking found for room {0}")]
    NoBookingFound(RoomId),
}

impl From<AlreadyBooked> for BookingError {
    fn from(err: AlreadyBooked) -> Self {
        BookingError::RoomUnavailable(err.0)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Hotel must have at least one room")]
    NoRooms,

    #[error("Hotel cannot have more than {max} rooms, got {num_rooms}")]
    TooManyRooms { num_rooms: u32, max: u32 },

    #[error("VIP room {room_id} is outside 1..={num_rooms}")]
    VipRoomOutOfRange { room_id: RoomId, num_rooms: u32 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Food item name must not be empty")]
    EmptyItem,

    #[error("Quantity for {0} must be at least 1")]
    ZeroQuantity(String),
}

// Errors surfaced by front desk operations that combine booking and ordering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Order(#[from] OrderError),
}
