//! Access grant entities (database row mappings).

use sqlx::FromRow;

use domain::services::{GrantRow, GrantedHouseRow};

/// A `can_consult` row outer-joined with `users` and `houses`.
#[derive(Debug, Clone, FromRow)]
pub struct GrantEntity {
    pub user_id: i64,
    pub house_id: i64,
    pub user_found: bool,
    pub user_firstname: Option<String>,
    pub user_lastname: Option<String>,
    pub house_name: Option<String>,
}

impl From<GrantEntity> for GrantRow {
    fn from(entity: GrantEntity) -> Self {
        Self {
            user_id: entity.user_id,
            house_id: entity.house_id,
            user_found: entity.user_found,
            user_firstname: entity.user_firstname,
            user_lastname: entity.user_lastname,
            house_name: entity.house_name,
        }
    }
}

/// A house reached through `can_consult`, outer-joined with `houses`.
#[derive(Debug, Clone, FromRow)]
pub struct GrantedHouseEntity {
    pub house_id: i64,
    pub house_name: Option<String>,
}

impl From<GrantedHouseEntity> for GrantedHouseRow {
    fn from(entity: GrantedHouseEntity) -> Self {
        Self {
            house_id: entity.house_id,
            house_name: entity.house_name,
        }
    }
}
