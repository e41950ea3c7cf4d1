//! Shared utilities and common types for the Objura backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Timestamp and duration parsing/formatting for detection records
//! - Optional password hashing with Argon2id
//! - Common validation and deserialization helpers

pub mod password;
pub mod timestamp;
pub mod validation;
