//! Integration tests for houses, rooms, cameras and access grants.
//!
//! - GET /api/v1/houses, /api/v1/houses/:user_id
//! - GET /api/v1/rooms, /api/v1/rooms/:house_id
//! - GET /api/v1/cameras/:house_id
//! - GET /api/v1/canconsult
//! - GET /api/v1/disparitions_history/:house_id

mod common;

use axum::http::StatusCode;
use common::{
    get_request, parse_response_body, seed_camera, seed_grant, seed_house, seed_room, seed_user,
    unique_email, unique_name, TestContext,
};
use serde_json::json;
use tower::ServiceExt;

async fn get_json(ctx: &TestContext, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = ctx.app.clone().oneshot(get_request(uri)).await.unwrap();
    let status = response.status();
    (status, parse_response_body(response).await)
}

#[tokio::test]
async fn test_list_houses_includes_seeded_house() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let name = unique_name("house");
    let house_id = seed_house(&ctx.pool, &name).await;

    let (status, houses) = get_json(&ctx, "/api/v1/houses").await;
    assert_eq!(status, StatusCode::OK);
    assert!(houses
        .as_array()
        .unwrap()
        .contains(&json!({"house_id": house_id, "house_name": name})));
}

#[tokio::test]
async fn test_rooms_of_house_only_returns_its_rooms() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let other_house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let lounge = seed_room(&ctx.pool, house_id, "Lounge").await;
    let kitchen = seed_room(&ctx.pool, house_id, "Kitchen").await;
    seed_room(&ctx.pool, other_house_id, "Garage").await;

    let (status, rooms) = get_json(&ctx, &format!("/api/v1/rooms/{}", house_id)).await;
    assert_eq!(status, StatusCode::OK);

    let mut rooms = rooms.as_array().unwrap().clone();
    rooms.sort_by_key(|r| r["room_id"].as_i64());
    assert_eq!(
        rooms,
        vec![
            json!({"room_id": lounge, "room_name": "Lounge"}),
            json!({"room_id": kitchen, "room_name": "Kitchen"}),
        ]
    );

    let (_, all_rooms) = get_json(&ctx, "/api/v1/rooms").await;
    assert!(all_rooms
        .as_array()
        .unwrap()
        .contains(&json!({"room_id": lounge, "room_name": "Lounge", "house_id": house_id})));
}

#[tokio::test]
async fn test_empty_house_returns_empty_lists() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;

    for uri in [
        format!("/api/v1/rooms/{}", house_id),
        format!("/api/v1/cameras/{}", house_id),
        format!("/api/v1/disparitions/{}", house_id),
        format!("/api/v1/disparitions_history/{}", house_id),
    ] {
        let (status, body) = get_json(&ctx, &uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_unknown_parent_returns_empty_list() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };

    let (status, body) = get_json(&ctx, "/api/v1/rooms/9223372036854775807").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = get_json(&ctx, "/api/v1/houses/9223372036854775807").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_cameras_of_house() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let camera_id = seed_camera(&ctx.pool, house_id, "Cam1").await;

    let (status, cameras) = get_json(&ctx, &format!("/api/v1/cameras/{}", house_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cameras, json!([{"camera_id": camera_id, "camera_name": "Cam1"}]));
}

#[tokio::test]
async fn test_houses_of_user_and_grants() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let user_id = seed_user(&ctx.pool, &unique_email(), Some("Ada"), None).await;
    let lake_name = unique_name("lake");
    let lake = seed_house(&ctx.pool, &lake_name).await;
    seed_house(&ctx.pool, &unique_name("city")).await;
    seed_grant(&ctx.pool, user_id, lake).await;

    let (status, houses) = get_json(&ctx, &format!("/api/v1/houses/{}", user_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(houses, json!([{"house_id": lake, "house_name": lake_name}]));

    let (status, grants) = get_json(&ctx, "/api/v1/canconsult").await;
    assert_eq!(status, StatusCode::OK);
    assert!(grants.as_array().unwrap().contains(&json!({
        "user_id": user_id,
        "user_firstname": "Ada",
        "user_lastname": null,
        "house_id": lake,
        "house_name": lake_name
    })));
}

#[tokio::test]
async fn test_disparitions_history_lists_rooms() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    let room_id = seed_room(&ctx.pool, house_id, "Lounge").await;

    let (status, rooms) =
        get_json(&ctx, &format!("/api/v1/disparitions_history/{}", house_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rooms, json!([{"room_id": room_id, "room_name": "Lounge"}]));
}

#[tokio::test]
async fn test_get_endpoints_are_idempotent() {
    let Some(ctx) = TestContext::new().await else {
        return;
    };
    let house_id = seed_house(&ctx.pool, &unique_name("house")).await;
    seed_room(&ctx.pool, house_id, "Lounge").await;
    let uri = format!("/api/v1/rooms/{}", house_id);

    let (_, first) = get_json(&ctx, &uri).await;
    let (_, second) = get_json(&ctx, &uri).await;
    assert_eq!(first, second);
}
