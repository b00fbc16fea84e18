// Eligibility policies: which guests may book which class of room

use serde::{Deserialize, Serialize};

use crate::guest::Guest;

// Narrow capability consulted by a booking strategy
// Implementations must be pure and total: same guest, same answer, no errors
pub trait EligibilityPolicy {
    fn is_eligible(&self, guest: &Guest) -> bool;
}

// Marker a guest name must start with to count as VIP
pub const VIP_PREFIX: &str = "VIP";

// Standard rooms: anyone may book
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllowAll;

impl EligibilityPolicy for AllowAll {
    fn is_eligible(&self, _guest: &Guest) -> bool {
        true
    }
}

// VIP rooms: only guests whose self-reported name carries the VIP prefix.
// This is a naming convention, not a verified membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VipOnly;

impl EligibilityPolicy for VipOnly {
    fn is_eligible(&self, guest: &Guest) -> bool {
        guest.name().starts_with(VIP_PREFIX)
    }
}

// Ad-hoc policies ("staff", "long-stay", ...) can be plain closures
impl<F> EligibilityPolicy for F
where
    F: Fn(&Guest) -> bool,
{
    fn is_eligible(&self, guest: &Guest) -> bool {
        self(guest)
    }
}

/// Policy binding as it appears in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    AllowAll,
    VipOnly,
}

impl EligibilityPolicy for PolicyKind {
    fn is_eligible(&self, guest: &Guest) -> bool {
        match self {
            PolicyKind::AllowAll => AllowAll.is_eligible(guest),
            PolicyKind::VipOnly => VipOnly.is_eligible(guest),
        }
    }
}
