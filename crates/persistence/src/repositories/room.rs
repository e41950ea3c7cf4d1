//! Room repository for database operations.

use sqlx::PgPool;

use crate::entities::RoomEntity;
use crate::metrics::QueryTimer;

/// Repository for room-related database operations.
#[derive(Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<RoomEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rooms");
        let result = sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT room_id, room_name, house_id
            FROM rooms
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Rooms whose `house_id` matches. Empty when the house has none or does not exist.
    pub async fn list_by_house(&self, house_id: i64) -> Result<Vec<RoomEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rooms_by_house");
        let result = sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT room_id, room_name, house_id
            FROM rooms
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
