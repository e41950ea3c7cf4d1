//! Camera domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Camera {
    pub camera_id: i64,
    pub camera_name: String,
    pub house_id: i64,
}

/// Camera entry in house-scoped listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CameraSummary {
    pub camera_id: i64,
    pub camera_name: String,
}

impl From<Camera> for CameraSummary {
    fn from(camera: Camera) -> Self {
        Self {
            camera_id: camera.camera_id,
            camera_name: camera.camera_name,
        }
    }
}
