//! Access grant repository for database operations.

use sqlx::PgPool;

use crate::entities::GrantEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct CanConsultRepository {
    pool: PgPool,
}

impl CanConsultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every grant with the user's names and the house name.
    pub async fn list_with_details(&self) -> Result<Vec<GrantEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_can_consult");
        let result = sqlx::query_as::<_, GrantEntity>(
            r#"
            SELECT cc.user_id,
                   cc.house_id,
                   (u.user_id IS NOT NULL) AS user_found,
                   u.user_firstname,
                   u.user_lastname,
                   h.house_name
            FROM can_consult cc
            LEFT JOIN users u ON u.user_id = cc.user_id
            LEFT JOIN houses h ON h.house_id = cc.house_id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
