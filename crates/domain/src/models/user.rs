//! User domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status message returned after a user is created.
pub const USER_CREATED: &str = "User created successfully";

/// A registered user.
///
/// First and last name are never set by the API and stay `None` for users
/// created through it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub user_id: i64,
    pub user_email: String,
    pub user_firstname: Option<String>,
    pub user_lastname: Option<String>,
    pub user_password: String,
}

/// Request payload for user creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = 255, message = "Password must be between 1 and 255 characters"))]
    pub password: String,
}
