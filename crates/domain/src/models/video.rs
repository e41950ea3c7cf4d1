//! Video domain model.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::timestamp::{format_timestamp, serde_duration, serde_timestamp};

/// Length recorded for the companion video of a new detection.
pub const PLACEHOLDER_VIDEO_LENGTH: &str = "00:00:00";

/// Link recorded for the companion video of a new detection.
pub const PLACEHOLDER_VIDEO_LINK: &str = "https://www.youtube.com";

/// A recorded video, optionally tied to a room and to a detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub video_id: i64,
    #[serde(with = "serde_timestamp")]
    pub video_date: NaiveDateTime,
    #[serde(with = "serde_duration")]
    pub video_length: NaiveTime,
    pub video_object_stolen: Option<bool>,
    pub video_link: String,
    pub room_id: Option<i64>,
    pub disparition_id: Option<i64>,
}

/// Entry of the flat video listing.
///
/// `video_name` carries the rendered recording date; videos have no name
/// column of their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoListItem {
    pub video_id: i64,
    pub video_name: String,
    pub room_id: Option<i64>,
}

impl From<Video> for VideoListItem {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.video_id,
            video_name: format_timestamp(&video.video_date),
            room_id: video.room_id,
        }
    }
}

/// Video entry nested in [`RoomVideosResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomVideo {
    pub video_id: i64,
    #[serde(with = "serde_timestamp")]
    pub video_date: NaiveDateTime,
    #[serde(with = "serde_duration")]
    pub video_length: NaiveTime,
    pub video_object_stolen: Option<bool>,
    pub video_link: String,
}

impl From<Video> for RoomVideo {
    fn from(video: Video) -> Self {
        Self {
            video_id: video.video_id,
            video_date: video.video_date,
            video_length: video.video_length,
            video_object_stolen: video.video_object_stolen,
            video_link: video.video_link,
        }
    }
}

/// Videos recorded in one room, with house and room identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoomVideosResponse {
    pub house_id: i64,
    pub house_name: String,
    pub room_id: i64,
    pub room_name: String,
    pub videos: Vec<RoomVideo>,
}
