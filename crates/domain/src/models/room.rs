//! Room domain model.

use serde::{Deserialize, Serialize};

/// A room belonging to exactly one house.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Room {
    pub room_id: i64,
    pub room_name: String,
    pub house_id: i64,
}

/// Room entry in house-scoped listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomSummary {
    pub room_id: i64,
    pub room_name: String,
}

impl From<Room> for RoomSummary {
    fn from(room: Room) -> Self {
        Self {
            room_id: room.room_id,
            room_name: room.room_name,
        }
    }
}
