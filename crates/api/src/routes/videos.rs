//! Video routes.

use axum::{extract::State, Json};
use domain::models::{RoomVideo, RoomVideosResponse, Video, VideoListItem};
use domain::DomainError;
use persistence::repositories::VideoRepository;
use tracing::warn;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiPath;

/// GET /api/v1/videos
pub async fn list_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoListItem>>, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let videos = repo.list_all().await?;
    Ok(Json(
        videos
            .into_iter()
            .map(|v| VideoListItem::from(Video::from(v)))
            .collect(),
    ))
}

/// Videos recorded in one room, with the house and room names.
///
/// GET /api/v1/videos/:house_id/:room_id
///
/// Videos are selected by room only. The house id names the house in the
/// response but does not filter.
pub async fn videos_of_room(
    State(state): State<AppState>,
    ApiPath((house_id, room_id)): ApiPath<(i64, i64)>,
) -> Result<Json<RoomVideosResponse>, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let rows = repo.load_room_videos(house_id, room_id).await?;

    let house = rows
        .house
        .ok_or_else(|| DomainError::not_found("House", house_id))?;
    let room = rows
        .room
        .ok_or_else(|| DomainError::not_found("Room", room_id))?;

    if room.house_id != house_id {
        warn!(
            house_id,
            room_id,
            room_house_id = room.house_id,
            "Room belongs to another house"
        );
    }

    Ok(Json(RoomVideosResponse {
        house_id: house.house_id,
        house_name: house.house_name,
        room_id: room.room_id,
        room_name: room.room_name,
        videos: rows
            .videos
            .into_iter()
            .map(|v| RoomVideo::from(Video::from(v)))
            .collect(),
    }))
}
