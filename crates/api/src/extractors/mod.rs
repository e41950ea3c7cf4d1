//! Custom Axum extractors.
//!
//! Wrap the stock extractors so that rejections use the API error body.

pub mod json;
pub mod path;

pub use json::ValidatedJson;
pub use path::ApiPath;
