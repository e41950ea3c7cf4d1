//! Camera routes.

use axum::{extract::State, Json};
use domain::models::CameraSummary;
use persistence::repositories::CameraRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiPath;

/// GET /api/v1/cameras/:house_id
pub async fn cameras_of_house(
    State(state): State<AppState>,
    ApiPath(house_id): ApiPath<i64>,
) -> Result<Json<Vec<CameraSummary>>, ApiError> {
    let repo = CameraRepository::new(state.pool.clone());
    let cameras = repo.list_by_house(house_id).await?;
    Ok(Json(cameras.into_iter().map(CameraSummary::from).collect()))
}
