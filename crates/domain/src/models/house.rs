//! House domain model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct House {
    pub house_id: i64,
    pub house_name: String,
}
