//! Domain services for Objura.
//!
//! Services contain logic that operates on domain models without touching
//! the database.

pub mod access;
pub mod enrichment;

pub use access::{resolve_grants, resolve_user_houses, GrantRow, GrantedHouseRow};
pub use enrichment::{enrich_disparitions, primary_videos};
