use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    pub username: String,
    pub email: String,
    pub active: bool,

    // Audit
    pub created_at: DateTime<Utc>,
}

/// Input for creating a user. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub active: bool,
}

impl NewUser {
    pub fn new(username: String, email: String) -> Self {
        Self {
            username,
            email,
            active: true,
        }
    }
}
