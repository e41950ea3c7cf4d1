//! Video repository for database operations.

use sqlx::PgPool;

use crate::entities::{HouseEntity, RoomEntity, VideoEntity};
use crate::metrics::QueryTimer;

/// Rows backing the per-room video listing.
#[derive(Debug, Clone)]
pub struct RoomVideoRows {
    pub house: Option<HouseEntity>,
    pub room: Option<RoomEntity>,
    pub videos: Vec<VideoEntity>,
}

/// Repository for video-related database operations.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VideoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_videos");
        let result = sqlx::query_as::<_, VideoEntity>(
            r#"
            SELECT video_id, video_date, video_length, video_object_stolen,
                   video_link, room_id, disparition_id
            FROM videos
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Load the house, the room and the room's videos over one connection.
    ///
    /// Videos are filtered by `room_id` only; `house_id` is used for the
    /// house lookup and nothing else. The video query is skipped when the
    /// house or the room does not exist.
    pub async fn load_room_videos(
        &self,
        house_id: i64,
        room_id: i64,
    ) -> Result<RoomVideoRows, sqlx::Error> {
        let timer = QueryTimer::new("load_room_videos");
        let mut conn = self.pool.acquire().await?;

        let house = sqlx::query_as::<_, HouseEntity>(
            r#"
            SELECT house_id, house_name
            FROM houses
            WHERE house_id = $1
            "#,
        )
        .bind(house_id)
        .fetch_optional(&mut *conn)
        .await?;

        let room = sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT room_id, room_name, house_id
            FROM rooms
            WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut *conn)
        .await?;

        let videos = if house.is_some() && room.is_some() {
            sqlx::query_as::<_, VideoEntity>(
                r#"
                SELECT video_id, video_date, video_length, video_object_stolen,
                       video_link, room_id, disparition_id
                FROM videos
                WHERE room_id = $1
                "#,
            )
            .bind(room_id)
            .fetch_all(&mut *conn)
            .await?
        } else {
            Vec::new()
        };

        timer.record();
        Ok(RoomVideoRows {
            house,
            room,
            videos,
        })
    }
}
