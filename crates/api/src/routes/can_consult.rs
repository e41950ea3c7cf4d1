//! Access grant routes.

use axum::{extract::State, Json};
use domain::models::CanConsultDetail;
use domain::services::{resolve_grants, GrantRow};
use persistence::repositories::CanConsultRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// Every grant, with the user's names and the house name.
///
/// GET /api/v1/canconsult
///
/// A grant whose user or house row is gone fails the whole request.
pub async fn list_can_consult(
    State(state): State<AppState>,
) -> Result<Json<Vec<CanConsultDetail>>, ApiError> {
    let repo = CanConsultRepository::new(state.pool.clone());
    let rows = repo.list_with_details().await?;
    let grants = resolve_grants(rows.into_iter().map(GrantRow::from).collect())?;
    Ok(Json(grants))
}
