//! House entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct HouseEntity {
    pub house_id: i64,
    pub house_name: String,
}

impl From<HouseEntity> for domain::models::House {
    fn from(entity: HouseEntity) -> Self {
        Self {
            house_id: entity.house_id,
            house_name: entity.house_name,
        }
    }
}
