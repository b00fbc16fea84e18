// Main library file for the hotel management system

// Booking core
pub mod eligibility;
pub mod error;
pub mod guest;
pub mod registry;
pub mod room;
pub mod strategy;

// Front desk collaborators
pub mod billing;
pub mod config;
pub mod food;
pub mod front_desk;

// Re-export key types for convenience
pub use billing::Bill;
pub use config::HotelConfig;
pub use eligibility::{AllowAll, EligibilityPolicy, PolicyKind, VipOnly};
pub use error::{BookingError, ConfigError, DeskError, OrderError};
pub use food::FoodOrder;
pub use front_desk::FrontDesk;
pub use guest::Guest;
pub use registry::{Assignment, BookingRegistry};
pub use room::{Room, RoomId, RoomStatus};
pub use strategy::BookingStrategy;
