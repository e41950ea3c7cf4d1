//! Disparition entity (database row mapping).

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database row mapping for the disparitions table.
#[derive(Debug, Clone, FromRow)]
pub struct DisparitionEntity {
    pub disparition_id: i64,
    pub disparition_date: NaiveDateTime,
    pub disparition_object_stolen: bool,
    pub disparition_image_overview: Option<String>,
    pub disparition_object: Option<String>,
    pub camera_id: i64,
    pub room_id: i64,
}

impl From<DisparitionEntity> for domain::models::Disparition {
    fn from(entity: DisparitionEntity) -> Self {
        Self {
            disparition_id: entity.disparition_id,
            disparition_date: entity.disparition_date,
            disparition_object_stolen: entity.disparition_object_stolen,
            disparition_image_overview: entity.disparition_image_overview,
            disparition_object: entity.disparition_object,
            camera_id: entity.camera_id,
            room_id: entity.room_id,
        }
    }
}
