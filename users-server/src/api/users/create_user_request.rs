use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name (required)
    pub username: String,

    /// Unique email address (required)
    pub email: String,
}
