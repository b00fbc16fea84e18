// Hotel configuration: pool size, policy bindings and charges

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{eligibility::PolicyKind, error::ConfigError, room::RoomId};

// Upper bound on the room pool, the registry allocates every room up front
pub const MAX_ROOMS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HotelConfig {
    pub num_rooms: u32,
    // rooms bound to the VIP policy, every other room is standard
    pub vip_rooms: Vec<RoomId>,
    pub room_charge: u64,
    pub food_service_charge: u64,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            num_rooms: 10,
            vip_rooms: Vec::new(),
            room_charge: 1000,
            food_service_charge: 500,
        }
    }
}

impl HotelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_rooms == 0 {
            return Err(ConfigError::NoRooms);
        }

        if self.num_rooms > MAX_ROOMS {
            return Err(ConfigError::TooManyRooms {
                num_rooms: self.num_rooms,
                max: MAX_ROOMS,
            });
        }

        if let Some(&room_id) = self
            .vip_rooms
            .iter()
            .find(|&&id| id == 0 || id > self.num_rooms)
        {
            return Err(ConfigError::VipRoomOutOfRange {
                room_id,
                num_rooms: self.num_rooms,
            });
        }

        Ok(())
    }

    pub fn policy_for(&self, room_id: RoomId) -> PolicyKind {
        if self.vip_rooms.contains(&room_id) {
            PolicyKind::VipOnly
        } else {
            PolicyKind::AllowAll
        }
    }
}
