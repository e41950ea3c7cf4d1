//! Domain layer for the Objura backend.
//!
//! This crate contains:
//! - Domain models (User, House, Room, Camera, Video, Disparition, CanConsult)
//! - Cross-reference enrichment of detection records
//! - Domain error types

pub mod error;
pub mod models;
pub mod services;

pub use error::DomainError;
