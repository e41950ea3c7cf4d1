//! Health check endpoint handlers.

use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ProbeResponse {
    pub status: String,
}

impl HealthResponse {
    fn from_probe(probe: DatabaseHealth) -> Self {
        Self {
            status: if probe.connected { "healthy" } else { "unhealthy" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: probe,
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.database.connected {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

async fn probe_database(pool: &PgPool) -> DatabaseHealth {
    let start = Instant::now();
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => DatabaseHealth {
            connected: true,
            latency_ms: Some(start.elapsed().as_millis() as u64),
        },
        Err(err) => {
            tracing::warn!(error = %err, "Database health probe failed");
            DatabaseHealth {
                connected: false,
                latency_ms: None,
            }
        }
    }
}

/// Full health report. Answers 503, with the same body, when the database
/// cannot be reached.
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    persistence::metrics::record_pool_metrics(&state.pool);
    let response = HealthResponse::from_probe(probe_database(&state.pool).await);
    (response.status_code(), Json(response))
}

/// Liveness probe; succeeds while the process runs.
///
/// GET /api/health/live
pub async fn live() -> Json<ProbeResponse> {
    Json(ProbeResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe; succeeds once the database answers.
///
/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<ProbeResponse>, ApiError> {
    if probe_database(&state.pool).await.connected {
        Ok(Json(ProbeResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(ApiError::ServiceUnavailable("Database is not reachable".into()))
    }
}
