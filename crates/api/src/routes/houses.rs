//! House routes.

use axum::{extract::State, Json};
use domain::models::House;
use domain::services::{resolve_user_houses, GrantedHouseRow};
use persistence::repositories::HouseRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ApiPath;

/// GET /api/v1/houses
pub async fn list_houses(State(state): State<AppState>) -> Result<Json<Vec<House>>, ApiError> {
    let repo = HouseRepository::new(state.pool.clone());
    let houses = repo.list_all().await?;
    Ok(Json(houses.into_iter().map(House::from).collect()))
}

/// Houses the user is allowed to consult.
///
/// GET /api/v1/houses/:user_id
///
/// An unknown user simply has no grants and gets an empty list.
pub async fn houses_of_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> Result<Json<Vec<House>>, ApiError> {
    let repo = HouseRepository::new(state.pool.clone());
    let rows = repo.list_for_user(user_id).await?;
    let houses = resolve_user_houses(
        user_id,
        rows.into_iter().map(GrantedHouseRow::from).collect(),
    )?;
    Ok(Json(houses))
}
