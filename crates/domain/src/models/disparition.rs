//! Disparition (object disappearance detection) domain model.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::timestamp::{serde_duration, serde_timestamp};
use shared::validation::{deserialize_flag, validate_positive_id};
use validator::Validate;

/// Status message returned after a detection is recorded.
pub const DISPARITION_CREATED: &str = "Disparition created successfully";

/// A detection event tied to a room and a camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Disparition {
    pub disparition_id: i64,
    #[serde(with = "serde_timestamp")]
    pub disparition_date: NaiveDateTime,
    pub disparition_object_stolen: bool,
    pub disparition_image_overview: Option<String>,
    pub disparition_object: Option<String>,
    pub camera_id: i64,
    pub room_id: i64,
}

/// Request payload for recording a detection.
///
/// `video_id` must be present (it may be null) but is never used: the
/// companion video is always created fresh with placeholder values.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDisparitionRequest {
    #[serde(deserialize_with = "serde_timestamp::deserialize")]
    pub disparition_date: NaiveDateTime,

    #[serde(deserialize_with = "deserialize_flag")]
    pub disparition_object_stolen: bool,

    #[validate(length(max = 2048, message = "Image overview must be at most 2048 characters"))]
    pub disparition_image_overview: String,

    #[validate(length(max = 255, message = "Object description must be at most 255 characters"))]
    pub disparition_object: String,

    #[validate(custom(function = "validate_positive_id"))]
    pub camera_id: i64,

    #[validate(custom(function = "validate_positive_id"))]
    pub room_id: i64,

    #[serde(deserialize_with = "Option::deserialize")]
    pub video_id: Option<i64>,
}

/// Values inserted into the `disparitions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDisparition {
    pub disparition_date: NaiveDateTime,
    pub disparition_object_stolen: bool,
    pub disparition_image_overview: String,
    pub disparition_object: String,
    pub camera_id: i64,
    pub room_id: i64,
}

impl From<CreateDisparitionRequest> for NewDisparition {
    fn from(request: CreateDisparitionRequest) -> Self {
        Self {
            disparition_date: request.disparition_date,
            disparition_object_stolen: request.disparition_object_stolen,
            disparition_image_overview: request.disparition_image_overview,
            disparition_object: request.disparition_object,
            camera_id: request.camera_id,
            room_id: request.room_id,
        }
    }
}

/// Response payload after recording a detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateDisparitionResponse {
    pub status: String,
    pub disparition_id: i64,
    pub video_id: i64,
}

impl CreateDisparitionResponse {
    pub fn created(disparition_id: i64, video_id: i64) -> Self {
        Self {
            status: DISPARITION_CREATED.to_string(),
            disparition_id,
            video_id,
        }
    }
}

/// A detection merged with its room name, camera name and video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisparitionDetail {
    pub disparition_id: i64,
    #[serde(with = "serde_timestamp")]
    pub disparition_date: NaiveDateTime,
    pub disparition_object_stolen: bool,
    pub disparition_image_overview: Option<String>,
    pub disparition_object: Option<String>,
    pub camera_id: i64,
    pub room_id: i64,
    pub room_name: String,
    pub camera_name: String,
    pub video_id: i64,
    #[serde(with = "serde_timestamp")]
    pub video_date: NaiveDateTime,
    #[serde(with = "serde_duration")]
    pub video_length: NaiveTime,
    pub video_link: String,
}
