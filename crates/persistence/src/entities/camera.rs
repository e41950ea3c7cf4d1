//! Camera entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct CameraEntity {
    pub camera_id: i64,
    pub camera_name: String,
    pub house_id: i64,
}

impl From<CameraEntity> for domain::models::Camera {
    fn from(entity: CameraEntity) -> Self {
        Self {
            camera_id: entity.camera_id,
            camera_name: entity.camera_name,
            house_id: entity.house_id,
        }
    }
}

impl From<CameraEntity> for domain::models::CameraSummary {
    fn from(entity: CameraEntity) -> Self {
        Self {
            camera_id: entity.camera_id,
            camera_name: entity.camera_name,
        }
    }
}
