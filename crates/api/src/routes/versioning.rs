//! Redirects for the legacy `get_`-prefixed paths.
//!
//! Older clients call `/api/v1/get_rooms/3`; the resource now lives at
//! `/api/v1/rooms/3`.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

const API_PREFIX: &str = "/api/v1/";
const LEGACY_PREFIX: &str = "get_";

/// Legacy paths served by [`redirect_legacy`], relative to `/api/v1`.
pub const LEGACY_ROUTES: [&str; 11] = [
    "/get_users",
    "/get_houses",
    "/get_rooms",
    "/get_videos",
    "/get_canconsult",
    "/get_houses/:user_id",
    "/get_rooms/:house_id",
    "/get_cameras/:house_id",
    "/get_disparitions_history/:house_id",
    "/get_videos/:house_id/:room_id",
    "/get_disparitions/:house_id",
];

/// Maps a legacy URI to its canonical location, keeping the query string.
pub fn canonical_location(uri: &Uri) -> Option<String> {
    let rest = uri
        .path()
        .strip_prefix(API_PREFIX)?
        .strip_prefix(LEGACY_PREFIX)?;
    if rest.is_empty() {
        return None;
    }

    let path = format!("{}{}", API_PREFIX, rest);
    Some(match uri.query() {
        Some(query) => format!("{}?{}", path, query),
        None => path,
    })
}

/// Answers 301 Moved Permanently pointing at the canonical path.
pub async fn redirect_legacy(uri: Uri) -> Response {
    match canonical_location(&uri) {
        Some(location) => (
            StatusCode::MOVED_PERMANENTLY,
            [(header::LOCATION, location)],
            "Moved to canonical path",
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_location_simple() {
        let uri: Uri = "/api/v1/get_users".parse().unwrap();
        assert_eq!(canonical_location(&uri).unwrap(), "/api/v1/users");
    }

    #[test]
    fn test_canonical_location_with_ids() {
        let uri: Uri = "/api/v1/get_videos/1/10".parse().unwrap();
        assert_eq!(canonical_location(&uri).unwrap(), "/api/v1/videos/1/10");
    }

    #[test]
    fn test_canonical_location_keeps_query() {
        let uri: Uri = "/api/v1/get_houses?debug=1".parse().unwrap();
        assert_eq!(canonical_location(&uri).unwrap(), "/api/v1/houses?debug=1");
    }

    #[test]
    fn test_canonical_location_rejects_other_paths() {
        let uri: Uri = "/api/v1/users".parse().unwrap();
        assert!(canonical_location(&uri).is_none());
        let uri: Uri = "/api/v1/get_".parse().unwrap();
        assert!(canonical_location(&uri).is_none());
    }

    #[tokio::test]
    async fn test_redirect_legacy() {
        let uri: Uri = "/api/v1/get_disparitions/7".parse().unwrap();
        let response = redirect_legacy(uri).await;
        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/disparitions/7"
        );
    }

    #[test]
    fn test_every_legacy_route_has_a_canonical_form() {
        for route in LEGACY_ROUTES {
            let uri: Uri = format!("/api/v1{}", route).parse().unwrap();
            let location = canonical_location(&uri).unwrap();
            assert!(!location.contains("get_"), "{}", location);
        }
    }
}
