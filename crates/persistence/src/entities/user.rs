//! User entity (database row mapping).

use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub user_id: i64,
    pub user_email: String,
    pub user_firstname: Option<String>,
    pub user_lastname: Option<String>,
    pub user_password: String,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            user_id: entity.user_id,
            user_email: entity.user_email,
            user_firstname: entity.user_firstname,
            user_lastname: entity.user_lastname,
            user_password: entity.user_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_entity_to_domain() {
        let entity = UserEntity {
            user_id: 3,
            user_email: "a@b.com".to_string(),
            user_firstname: None,
            user_lastname: None,
            user_password: "x".to_string(),
        };
        let user: domain::models::User = entity.into();
        assert_eq!(user.user_id, 3);
        assert_eq!(user.user_email, "a@b.com");
        assert_eq!(user.user_password, "x");
        assert!(user.user_firstname.is_none());
    }
}
