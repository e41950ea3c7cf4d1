//! Video entity (database row mapping).

use chrono::{NaiveDateTime, NaiveTime};
use sqlx::FromRow;

/// Database row mapping for the videos table.
#[derive(Debug, Clone, FromRow)]
pub struct VideoEntity {
    pub video_id: i64,
    pub video_date: NaiveDateTime,
    pub video_length: NaiveTime,
    pub video_object_stolen: Option<bool>,
    pub video_link: String,
    pub room_id: Option<i64>,
    pub disparition_id: Option<i64>,
}

impl From<VideoEntity> for domain::models::Video {
    fn from(entity: VideoEntity) -> Self {
        Self {
            video_id: entity.video_id,
            video_date: entity.video_date,
            video_length: entity.video_length,
            video_object_stolen: entity.video_object_stolen,
            video_link: entity.video_link,
            room_id: entity.room_id,
            disparition_id: entity.disparition_id,
        }
    }
}
