//! Disparition (detection event) routes.

use axum::{extract::State, Json};
use domain::models::{
    Camera, CreateDisparitionRequest, CreateDisparitionResponse, Disparition, DisparitionDetail,
    NewDisparition, Room, RoomSummary, Video,
};
use domain::services::enrich_disparitions;
use persistence::repositories::{DisparitionRepository, RoomRepository};
use tracing::{debug, info};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiPath, ValidatedJson};
use crate::middleware::metrics::record_disparition_created;

/// Disparitions of every room of the house, each merged with its room name,
/// camera name and video.
///
/// GET /api/v1/disparitions/:house_id
pub async fn disparitions_of_house(
    State(state): State<AppState>,
    ApiPath(house_id): ApiPath<i64>,
) -> Result<Json<Vec<DisparitionDetail>>, ApiError> {
    let repo = DisparitionRepository::new(state.pool.clone());
    let rows = repo.load_house_rows(house_id).await?;

    let disparitions: Vec<Disparition> = rows.disparitions.into_iter().map(Into::into).collect();
    let rooms: Vec<Room> = rows.rooms.into_iter().map(Into::into).collect();
    let cameras: Vec<Camera> = rows.cameras.into_iter().map(Into::into).collect();
    let videos: Vec<Video> = rows.videos.into_iter().map(Into::into).collect();

    let details = enrich_disparitions(disparitions, &rooms, &cameras, &videos)?;
    debug!(house_id, count = details.len(), "Disparitions enriched");

    Ok(Json(details))
}

/// Rooms of the house, one entry per room.
///
/// GET /api/v1/disparitions_history/:house_id
///
/// Only the room list is returned; the per-room event history is not
/// assembled yet.
pub async fn disparitions_history_of_house(
    State(state): State<AppState>,
    ApiPath(house_id): ApiPath<i64>,
) -> Result<Json<Vec<RoomSummary>>, ApiError> {
    let repo = RoomRepository::new(state.pool.clone());
    let rooms = repo.list_by_house(house_id).await?;
    Ok(Json(rooms.into_iter().map(RoomSummary::from).collect()))
}

/// Record a detection event and its placeholder video.
///
/// POST /api/v1/create_disparition
///
/// A `video_id` in the body is accepted and ignored; the video row is
/// always created here and its id returned.
pub async fn create_disparition(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDisparitionRequest>,
) -> Result<Json<CreateDisparitionResponse>, ApiError> {
    if let Some(ignored) = request.video_id {
        debug!(video_id = ignored, "Ignoring client supplied video_id");
    }

    let new = NewDisparition::from(request);
    let repo = DisparitionRepository::new(state.pool.clone());
    let (disparition, video) = repo.create_with_video(&new).await?;

    record_disparition_created(disparition.disparition_object_stolen);
    info!(
        disparition_id = disparition.disparition_id,
        video_id = video.video_id,
        room_id = disparition.room_id,
        camera_id = disparition.camera_id,
        "Disparition created"
    );

    Ok(Json(CreateDisparitionResponse::created(
        disparition.disparition_id,
        video.video_id,
    )))
}
