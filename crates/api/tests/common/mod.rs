//! Shared helpers for the integration tests.
//!
//! Tests run against the Postgres database named by `TEST_DATABASE_URL`.
//! When the variable is unset every test returns early. Tests do not clean
//! up after themselves; each one seeds its own rows and only asserts on ids
//! it created, so they can run in parallel against one database.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use chrono::NaiveDateTime;
use objura_api::{
    app::create_app,
    config::{Config, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig},
};
use sqlx::PgPool;

/// A router wired to the test database plus a pool for seeding.
pub struct TestContext {
    pub app: Router,
    pub pool: PgPool,
}

impl TestContext {
    /// Connects, migrates and builds the app, or `None` without a test database.
    pub async fn new() -> Option<Self> {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(customize: impl FnOnce(&mut Config)) -> Option<Self> {
        let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
            eprintln!("TEST_DATABASE_URL not set, skipping integration test");
            return None;
        };

        let mut config = test_config(url);
        customize(&mut config);

        let pool = persistence::db::create_pool(&config.pool_config())
            .await
            .expect("Failed to connect to test database");
        persistence::db::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let app = create_app(config, pool.clone());
        Some(Self { app, pool })
    }
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
            max_body_size: 1_048_576,
        },
        database: DatabaseConfig {
            url,
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 60,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
    }
}

pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4().simple())
}

pub fn unique_email() -> String {
    format!("{}@objura.test", unique_name("user"))
}

pub fn timestamp(value: &str) -> NaiveDateTime {
    shared::timestamp::parse_timestamp(value).expect("valid test timestamp")
}

pub async fn seed_user(pool: &PgPool, email: &str, firstname: Option<&str>, lastname: Option<&str>) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (user_email, user_firstname, user_lastname, user_password)
         VALUES ($1, $2, $3, 'secret') RETURNING user_id",
    )
    .bind(email)
    .bind(firstname)
    .bind(lastname)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user")
}

pub async fn seed_house(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO houses (house_name) VALUES ($1) RETURNING house_id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to seed house")
}

pub async fn seed_room(pool: &PgPool, house_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO rooms (room_name, house_id) VALUES ($1, $2) RETURNING room_id",
    )
    .bind(name)
    .bind(house_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed room")
}

pub async fn seed_camera(pool: &PgPool, house_id: i64, name: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO cameras (camera_name, house_id) VALUES ($1, $2) RETURNING camera_id",
    )
    .bind(name)
    .bind(house_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed camera")
}

pub async fn seed_grant(pool: &PgPool, user_id: i64, house_id: i64) {
    sqlx::query("INSERT INTO can_consult (user_id, house_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(house_id)
        .execute(pool)
        .await
        .expect("Failed to seed grant");
}

pub async fn seed_disparition(pool: &PgPool, camera_id: i64, room_id: i64, date: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO disparitions (disparition_date, disparition_object_stolen,
                                   disparition_image_overview, disparition_object,
                                   camera_id, room_id)
         VALUES ($1, TRUE, 'overview.png', 'vase', $2, $3) RETURNING disparition_id",
    )
    .bind(timestamp(date))
    .bind(camera_id)
    .bind(room_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed disparition")
}

pub async fn seed_video(
    pool: &PgPool,
    date: &str,
    link: &str,
    room_id: Option<i64>,
    disparition_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO videos (video_date, video_length, video_object_stolen, video_link,
                             room_id, disparition_id)
         VALUES ($1, '00:00:05', FALSE, $2, $3, $4) RETURNING video_id",
    )
    .bind(timestamp(date))
    .bind(link)
    .bind(room_id)
    .bind(disparition_id)
    .fetch_one(pool)
    .await
    .expect("Failed to seed video")
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}
