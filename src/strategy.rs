// Booking strategy: the single gate turning a booking request into a room state change

use tracing::debug;

use crate::{
    eligibility::{AllowAll, EligibilityPolicy, PolicyKind, VipOnly},
    error::BookingError,
    guest::Guest,
    room::Room,
};

#[derive(Debug, Clone, Default)]
pub struct BookingStrategy<P = PolicyKind> {
    policy: P,
}

impl<P: EligibilityPolicy> BookingStrategy<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    // Availability is checked before eligibility, so a booked VIP room reports
    // RoomUnavailable even to a non-VIP guest.
    pub fn attempt_booking(&self, room: &mut Room, guest: &Guest) -> Result<(), BookingError> {
        if !room.is_available() {
            debug!(room_id = room.id(), "room already booked");
            return Err(BookingError::RoomUnavailable(room.id()));
        }

        if !self.policy.is_eligible(guest) {
            debug!(room_id = room.id(), guest = guest.name(), "guest not eligible");
            return Err(BookingError::NotEligible {
                room_id: room.id(),
                guest: guest.name().to_string(),
            });
        }

        room.book()?;
        Ok(())
    }
}

impl BookingStrategy<AllowAll> {
    pub fn standard() -> Self {
        Self::new(AllowAll)
    }
}

impl BookingStrategy<VipOnly> {
    pub fn vip() -> Self {
        Self::new(VipOnly)
    }
}

impl From<PolicyKind> for BookingStrategy {
    fn from(kind: PolicyKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_confirms_then_rejects() {
        let strategy = BookingStrategy::standard();
        let mut room = Room::new(2);
        let alice = Guest::new("Alice", 34, "555-0101");

        assert_eq!(strategy.attempt_booking(&mut room, &alice), Ok(()));
        assert!(!room.is_available());

        assert_eq!(
            strategy.attempt_booking(&mut room, &alice),
            Err(BookingError::RoomUnavailable(2))
        );
    }

    #[test]
    fn test_vip_rejects_without_touching_room() {
        let strategy = BookingStrategy::vip();
        let mut room = Room::new(1);

        let res = strategy.attempt_booking(&mut room, &Guest::new("Bob", 50, "555-0102"));
        assert_eq!(
            res,
            Err(BookingError::NotEligible {
                room_id: 1,
                guest: "Bob".to_string()
            })
        );
        assert!(room.is_available());

        let res = strategy.attempt_booking(&mut room, &Guest::new("VIP-Bob", 50, "555-0102"));
        assert_eq!(res, Ok(()));
        assert!(!room.is_available());
    }

    #[test]
    fn test_unavailable_reported_before_eligibility() {
        let strategy = BookingStrategy::vip();
        let mut room = Room::new(3);
        room.book().unwrap();

        let res = strategy.attempt_booking(&mut room, &Guest::new("Bob", 50, "555-0102"));
        assert_eq!(res, Err(BookingError::RoomUnavailable(3)));
    }

    #[test]
    fn test_custom_policy_needs_no_new_strategy() {
        let staff = BookingStrategy::new(|g: &Guest| g.contact().ends_with("@hotel.example"));
        let mut room = Room::new(9);

        assert!(staff
            .attempt_booking(&mut room, &Guest::new("Eve", 29, "eve@gmail.example"))
            .is_err());
        assert!(staff
            .attempt_booking(&mut room, &Guest::new("Eve", 29, "eve@hotel.example"))
            .is_ok());
    }

    #[test]
    fn test_from_policy_kind() {
        let strategy = BookingStrategy::from(PolicyKind::VipOnly);
        assert_eq!(*strategy.policy(), PolicyKind::VipOnly);
    }
}
