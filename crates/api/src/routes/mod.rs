//! HTTP route handlers.

pub mod can_consult;
pub mod cameras;
pub mod disparitions;
pub mod health;
pub mod houses;
pub mod rooms;
pub mod users;
pub mod versioning;
pub mod videos;
