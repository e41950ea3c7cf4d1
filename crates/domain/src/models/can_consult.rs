//! Access grant ("can consult") domain model.

use serde::{Deserialize, Serialize};

/// Grants a user visibility into one house.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanConsult {
    pub user_id: i64,
    pub house_id: i64,
}

/// A grant joined with the user's names and the house name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanConsultDetail {
    pub user_id: i64,
    pub user_firstname: Option<String>,
    pub user_lastname: Option<String>,
    pub house_id: i64,
    pub house_name: String,
}
