//! Resolution of access grants.
//!
//! Grants are read with outer joins so that a grant pointing at a missing
//! user or house is reported instead of silently dropped.

use crate::error::DomainError;
use crate::models::{CanConsultDetail, House};

/// A grant row outer-joined with its user and house.
///
/// Errors name the dangling id: the user id for a missing user, the house id
/// for a missing house.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRow {
    pub user_id: i64,
    pub house_id: i64,
    pub user_found: bool,
    pub user_firstname: Option<String>,
    pub user_lastname: Option<String>,
    pub house_name: Option<String>,
}

/// A house reachable through a grant; `house_name` is `None` when the house row is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantedHouseRow {
    pub house_id: i64,
    pub house_name: Option<String>,
}

pub fn resolve_grants(rows: Vec<GrantRow>) -> Result<Vec<CanConsultDetail>, DomainError> {
    rows.into_iter()
        .map(|row| -> Result<CanConsultDetail, DomainError> {
            if !row.user_found {
                return Err(DomainError::missing("CanConsult", row.user_id, "user"));
            }
            let house_name = row
                .house_name
                .ok_or_else(|| DomainError::missing("CanConsult", row.house_id, "house"))?;

            Ok(CanConsultDetail {
                user_id: row.user_id,
                user_firstname: row.user_firstname,
                user_lastname: row.user_lastname,
                house_id: row.house_id,
                house_name,
            })
        })
        .collect()
}

/// Resolves the houses a user may consult.
pub fn resolve_user_houses(
    user_id: i64,
    rows: Vec<GrantedHouseRow>,
) -> Result<Vec<House>, DomainError> {
    rows.into_iter()
        .map(|row| -> Result<House, DomainError> {
            let house_name = row.house_name.ok_or_else(|| {
                tracing::warn!(user_id, house_id = row.house_id, "Grant references a missing house");
                DomainError::missing("User", user_id, "house")
            })?;
            Ok(House {
                house_id: row.house_id,
                house_name,
            })
        })
        .collect()
}
