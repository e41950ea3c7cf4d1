//! Camera repository for database operations.

use sqlx::PgPool;

use crate::entities::CameraEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct CameraRepository {
    pool: PgPool,
}

impl CameraRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cameras installed in a house. Empty when the house has none or does not exist.
    pub async fn list_by_house(&self, house_id: i64) -> Result<Vec<CameraEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_cameras_by_house");
        let result = sqlx::query_as::<_, CameraEntity>(
            r#"
            SELECT camera_id, camera_name, house_id
            FROM cameras
            WHERE house_id = $1
            "#,
        )
        .bind(house_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
