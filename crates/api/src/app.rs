use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use shared::password::PasswordStorage;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{
    cameras, can_consult, disparitions, health, houses, rooms, users, versioning, videos,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub password_storage: PasswordStorage,
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.security.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/users", get(users::list_users))
        .route("/api/v1/create_user", post(users::create_user))
        .route("/api/v1/houses", get(houses::list_houses))
        .route("/api/v1/houses/:user_id", get(houses::houses_of_user))
        .route("/api/v1/rooms", get(rooms::list_rooms))
        .route("/api/v1/rooms/:house_id", get(rooms::rooms_of_house))
        .route("/api/v1/cameras/:house_id", get(cameras::cameras_of_house))
        .route("/api/v1/canconsult", get(can_consult::list_can_consult))
        .route("/api/v1/videos", get(videos::list_videos))
        .route("/api/v1/videos/:house_id/:room_id", get(videos::videos_of_room))
        .route(
            "/api/v1/disparitions/:house_id",
            get(disparitions::disparitions_of_house),
        )
        .route(
            "/api/v1/disparitions_history/:house_id",
            get(disparitions::disparitions_history_of_house),
        )
        .route(
            "/api/v1/create_disparition",
            post(disparitions::create_disparition),
        )
}

fn legacy_routes() -> Router<AppState> {
    versioning::LEGACY_ROUTES
        .iter()
        .fold(Router::new(), |router, route| {
            router.route(
                &format!("/api/v1{}", route),
                get(versioning::redirect_legacy),
            )
        })
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        password_storage: PasswordStorage::from_hash_enabled(config.security.hash_passwords),
    };

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(resource_routes())
        .merge(legacy_routes())
        // Global middleware (bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config))
        .with_state(state)
}
