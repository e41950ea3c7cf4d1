//! Room entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the rooms table.
#[derive(Debug, Clone, FromRow)]
pub struct RoomEntity {
    pub room_id: i64,
    pub room_name: String,
    pub house_id: i64,
}

impl From<RoomEntity> for domain::models::Room {
    fn from(entity: RoomEntity) -> Self {
        Self {
            room_id: entity.room_id,
            room_name: entity.room_name,
            house_id: entity.house_id,
        }
    }
}

impl From<RoomEntity> for domain::models::RoomSummary {
    fn from(entity: RoomEntity) -> Self {
        Self {
            room_id: entity.room_id,
            room_name: entity.room_name,
        }
    }
}
