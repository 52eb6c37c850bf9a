use crate::api::status::Status;

use serde::Serialize;

/// Response carrying a status marker and a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: Status,
    pub message: String,
}
