//! Disparition repository for database operations.

use sqlx::PgPool;

use domain::models::video::{PLACEHOLDER_VIDEO_LENGTH, PLACEHOLDER_VIDEO_LINK};
use domain::models::NewDisparition;

use crate::entities::{CameraEntity, DisparitionEntity, RoomEntity, VideoEntity};
use crate::metrics::QueryTimer;

/// Rows needed to enrich the disparitions of one house.
#[derive(Debug, Clone, Default)]
pub struct HouseDisparitionRows {
    pub disparitions: Vec<DisparitionEntity>,
    pub rooms: Vec<RoomEntity>,
    pub cameras: Vec<CameraEntity>,
    pub videos: Vec<VideoEntity>,
}

/// Repository for detection events.
#[derive(Clone)]
pub struct DisparitionRepository {
    pool: PgPool,
}

impl DisparitionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load every disparition recorded in a room of the house, plus the
    /// rooms, cameras and videos they reference.
    ///
    /// Uses one pooled connection; it returns to the pool when this function
    /// exits, including on error.
    pub async fn load_house_rows(&self, house_id: i64) -> Result<HouseDisparitionRows, sqlx::Error> {
        let timer = QueryTimer::new("load_house_disparitions");
        let mut conn = self.pool.acquire().await?;

        let disparitions = sqlx::query_as::<_, DisparitionEntity>(
            r#"
            SELECT disparition_id, disparition_date, disparition_object_stolen,
                   disparition_image_overview, disparition_object, camera_id, room_id
            FROM disparitions
            WHERE room_id IN (SELECT room_id FROM rooms WHERE house_id = $1)
            "#,
        )
        .bind(house_id)
        .fetch_all(&mut *conn)
        .await?;

        if disparitions.is_empty() {
            timer.record();
            return Ok(HouseDisparitionRows::default());
        }

        let room_ids = distinct(disparitions.iter().map(|d| d.room_id));
        let camera_ids = distinct(disparitions.iter().map(|d| d.camera_id));
        let disparition_ids: Vec<i64> = disparitions.iter().map(|d| d.disparition_id).collect();

        let rooms = sqlx::query_as::<_, RoomEntity>(
            r#"
            SELECT room_id, room_name, house_id
            FROM rooms
            WHERE room_id = ANY($1)
            "#,
        )
        .bind(&room_ids)
        .fetch_all(&mut *conn)
        .await?;

        let cameras = sqlx::query_as::<_, CameraEntity>(
            r#"
            SELECT camera_id, camera_name, house_id
            FROM cameras
            WHERE camera_id = ANY($1)
            "#,
        )
        .bind(&camera_ids)
        .fetch_all(&mut *conn)
        .await?;

        let videos = sqlx::query_as::<_, VideoEntity>(
            r#"
            SELECT video_id, video_date, video_length, video_object_stolen,
                   video_link, room_id, disparition_id
            FROM videos
            WHERE disparition_id = ANY($1)
            "#,
        )
        .bind(&disparition_ids)
        .fetch_all(&mut *conn)
        .await?;

        timer.record();
        tracing::debug!(
            house_id,
            disparitions = disparitions.len(),
            rooms = rooms.len(),
            cameras = cameras.len(),
            videos = videos.len(),
            "Loaded disparition rows"
        );
        Ok(HouseDisparitionRows {
            disparitions,
            rooms,
            cameras,
            videos,
        })
    }

    /// Insert a disparition and its placeholder video in one transaction.
    ///
    /// The video copies the disparition date and gets the fixed placeholder
    /// length and link. If either insert fails nothing is committed.
    pub async fn create_with_video(
        &self,
        new: &NewDisparition,
    ) -> Result<(DisparitionEntity, VideoEntity), sqlx::Error> {
        let timer = QueryTimer::new("create_disparition");
        let mut tx = self.pool.begin().await?;

        let disparition = sqlx::query_as::<_, DisparitionEntity>(
            r#"
            INSERT INTO disparitions (disparition_date, disparition_object_stolen,
                                      disparition_image_overview, disparition_object,
                                      camera_id, room_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING disparition_id, disparition_date, disparition_object_stolen,
                      disparition_image_overview, disparition_object, camera_id, room_id
            "#,
        )
        .bind(new.disparition_date)
        .bind(new.disparition_object_stolen)
        .bind(&new.disparition_image_overview)
        .bind(&new.disparition_object)
        .bind(new.camera_id)
        .bind(new.room_id)
        .fetch_one(&mut *tx)
        .await?;

        let video = sqlx::query_as::<_, VideoEntity>(
            r#"
            INSERT INTO videos (video_date, video_length, video_link, disparition_id)
            VALUES ($1, $2::TIME, $3, $4)
            RETURNING video_id, video_date, video_length, video_object_stolen,
                      video_link, room_id, disparition_id
            "#,
        )
        .bind(disparition.disparition_date)
        .bind(PLACEHOLDER_VIDEO_LENGTH)
        .bind(PLACEHOLDER_VIDEO_LINK)
        .bind(disparition.disparition_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        Ok((disparition, video))
    }
}

fn distinct(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut ids: Vec<i64> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
