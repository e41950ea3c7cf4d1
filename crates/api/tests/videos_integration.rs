//! Integration tests for the video endpoints.
//!
//! - GET /api/v1/videos
//! - GET /api/v1/videos/:house_id/:room_id

mod common;

use axum::http::StatusCode;
use common::{
    get_request, parse_response_body, seed_house, seed_room, seed_video, unique_name, TestContext,
};
use serde_json::json;
use tower::ServiceExt;

async fn get_json(ctx: &TestContext, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = ctx.app.clone().oneshot(get_request(uri)).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

#[tokio::test]
async fn test_list_videos_uses_date_as_name() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;
    let video_id = seed_video(&ctx.pool, "2024-01-01 08:30:00", "http://x", Some(room_id), None).await;

    let (status, videos) = get_json(&ctx, "/api/v1/videos").await;
    assert_eq!(status, StatusCode::OK);
    assert!(videos.as_array().unwrap().contains(&json!({
        "video_id": video_id,
        "video_name": "2024-01-01 08:30:00",
        "room_id": room_id
    })));
}

#[tokio::test]
async fn test_videos_of_room() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_name = unique_name("house");
    let house_id = seed_house(&ctx.pool, &house_name).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;
    let other_room = seed_room(&ctx.pool, house_id, "Kitchen").await;
    let video_id = seed_video(&ctx.pool, "2024-01-01 08:30:00", "http://x", Some(room_id), None).await;
    seed_video(&ctx.pool, "2024-01-02 08:30:00", "http://y", Some(other_room), None).await;

    let (status, body) = get_json(&ctx, &format!("/api/v1/videos/{}/{}", house_id, room_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "house_id": house_id,
            "house_name": house_name,
            "room_id": room_id,
            "room_name": "Lounge",
            "videos": [{
                "video_id": video_id,
                "video_date": "2024-01-01 08:30:00",
                "video_length": "00:00:05",
                "video_object_stolen": false,
                "video_link": "http://x"
            }]
        })
    );
}

#[tokio::test]
async fn test_videos_of_room_ignores_house_for_filtering() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let other_house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;
    let video_id = seed_video(&ctx.pool, "2024-01-01 08:30:00", "http://x", Some(room_id), None).await;

    let (status, body) =
        get_json(&ctx, &format!("/api/v1/videos/{}/{}", other_house_id, room_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["house_id"], other_house_id);
    assert_eq!(body["videos"][0]["video_id"], video_id);
}

#[tokio::test]
async fn test_videos_of_room_empty() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;

    let (status, body) = get_json(&ctx, &format!("/api/v1/videos/{}/{}", house_id, room_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["videos"], json!([]));
}

#[tokio::test]
async fn test_videos_of_room_unknown_house_or_room() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;
    let missing = i64::MAX;

    let (status, body) = get_json(&ctx, &format!("/api/v1/videos/{}/{}", missing, room_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], format!("House with id {} not found", missing));

    let (status, body) = get_json(&ctx, &format!("/api/v1/videos/{}/{}", house_id, missing)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("Room with id {} not found", missing));
}
