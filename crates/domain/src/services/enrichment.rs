//! Cross-reference enrichment of detection records.
//!
//! Merges each disparition with the name of its room, the name of its camera
//! and its associated video. The rows are fetched in batches by the
//! persistence layer; this module only joins them, so a missing related row
//! becomes a [`DomainError::MissingAssociation`] instead of a fabricated value.

use std::collections::HashMap;

use crate::error::DomainError;
use crate::models::{Camera, Disparition, DisparitionDetail, Room, Video};

/// Picks the associated video of each disparition.
///
/// When several videos point at the same disparition the one with the
/// lowest `video_id` wins. Videos without a `disparition_id` are ignored.
pub fn primary_videos(videos: &[Video]) -> HashMap<i64, &Video> {
    let mut by_disparition: HashMap<i64, &Video> = HashMap::new();

    for video in videos {
        let Some(disparition_id) = video.disparition_id else {
            continue;
        };
        by_disparition
            .entry(disparition_id)
            .and_modify(|current| {
                if video.video_id < current.video_id {
                    *current = video;
                }
            })
            .or_insert(video);
    }

    by_disparition
}

/// Joins disparitions with their room, camera and video.
///
/// Output order follows `disparitions`. Fails on the first disparition whose
/// room, camera or video is absent from the supplied rows.
pub fn enrich_disparitions(
    disparitions: Vec<Disparition>,
    rooms: &[Room],
    cameras: &[Camera],
    videos: &[Video],
) -> Result<Vec<DisparitionDetail>, DomainError> {
    let room_names: HashMap<i64, &str> = rooms
        .iter()
        .map(|r| (r.room_id, r.room_name.as_str()))
        .collect();
    let camera_names: HashMap<i64, &str> = cameras
        .iter()
        .map(|c| (c.camera_id, c.camera_name.as_str()))
        .collect();
    let videos = primary_videos(videos);

    disparitions
        .into_iter()
        .map(|d| -> Result<DisparitionDetail, DomainError> {
            let id = d.disparition_id;
            let room_name = room_names
                .get(&d.room_id)
                .ok_or_else(|| missing(id, "room"))?;
            let camera_name = camera_names
                .get(&d.camera_id)
                .ok_or_else(|| missing(id, "camera"))?;
            let video = videos.get(&id).ok_or_else(|| missing(id, "video"))?;

            Ok(DisparitionDetail {
                disparition_id: id,
                disparition_date: d.disparition_date,
                disparition_object_stolen: d.disparition_object_stolen,
                disparition_image_overview: d.disparition_image_overview,
                disparition_object: d.disparition_object,
                camera_id: d.camera_id,
                room_id: d.room_id,
                room_name: room_name.to_string(),
                camera_name: camera_name.to_string(),
                video_id: video.video_id,
                video_date: video.video_date,
                video_length: video.video_length,
                video_link: video.video_link.clone(),
            })
        })
        .collect()
}

fn missing(disparition_id: i64, what: &'static str) -> DomainError {
    tracing::warn!(disparition_id, missing = what, "Disparition references a missing row");
    DomainError::missing("Disparition", disparition_id, what)
}
