//! Room routes.

use axum::{extract::State, Json};
use domain::models::{Room, RoomSummary};
use persistence::repositories::RoomRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiPath;

/// GET /api/v1/rooms
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, ApiError> {
    let repo = RoomRepository::new(state.pool.clone());
    let rooms = repo.list_all().await?;
    Ok(Json(rooms.into_iter().map(Room::from).collect()))
}

/// GET /api/v1/rooms/:house_id
pub async fn rooms_of_house(
    State(state): State<AppState>,
    ApiPath(house_id): ApiPath<i64>,
) -> Result<Json<Vec<RoomSummary>>, ApiError> {
    let repo = RoomRepository::new(state.pool.clone());
    let rooms = repo.list_by_house(house_id).await?;
    Ok(Json(rooms.into_iter().map(RoomSummary::from).collect()))
}
