//! House repository for database operations.

use sqlx::PgPool;

use crate::entities::{GrantedHouseEntity, HouseEntity};
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct HouseRepository {
    pool: PgPool,
}

impl HouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<HouseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_houses");
        let result = sqlx::query_as::<_, HouseEntity>(
            r#"
            SELECT house_id, house_name
            FROM houses
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Houses the user holds a grant for.
    ///
    /// The join is outer so a grant to a deleted house yields a row with no name.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<GrantedHouseEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_houses_for_user");
        let result = sqlx::query_as::<_, GrantedHouseEntity>(
            r#"
            SELECT cc.house_id, h.house_name
            FROM can_consult cc
            LEFT JOIN houses h ON h.house_id = cc.house_id
            WHERE cc.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
