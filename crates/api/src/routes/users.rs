//! User routes.

use axum::{extract::State, Json};
use domain::models::user::USER_CREATED;
use domain::models::{CreateUserRequest, StatusResponse, User};
use persistence::repositories::UserRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_user_created;

/// List every user.
///
/// GET /api/v1/users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.list_all().await?;
    Ok(Json(users.into_iter().map(User::from).collect()))
}

/// Register a user from an email and a password.
///
/// POST /api/v1/create_user
///
/// First and last names are not accepted here and are stored as NULL.
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let stored_password = state.password_storage.prepare(&request.password)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.create(&request.email, &stored_password).await?;

    record_user_created();
    info!(user_id = user.user_id, "User created");

    Ok(Json(StatusResponse::new(USER_CREATED)))
}
