//! User repository for database operations.

use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every user in store scan order.
    pub async fn list_all(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT user_id, user_email, user_firstname, user_lastname, user_password
            FROM users
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a user with only an email and a password.
    ///
    /// Fails with a unique violation when the email is already registered.
    pub async fn create(&self, email: &str, password: &str) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (user_email, user_password)
            VALUES ($1, $2)
            RETURNING user_id, user_email, user_firstname, user_lastname, user_password
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
