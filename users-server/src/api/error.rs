//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Clients only ever see the
//! fixed messages below; variant fields exist for server-side logs.

use crate::api::message_response::MessageResponse;
use crate::api::status::Status;

use users_core::ErrorLocation;
use users_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or incomplete request payload (400)
    #[error("Invalid payload: {message} {location}")]
    InvalidPayload {
        message: String,
        location: ErrorLocation,
    },

    /// Email is already registered (400)
    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    /// User lookup failed (404)
    #[error("User not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, message) = match self {
            ApiError::InvalidPayload { .. } => (StatusCode::BAD_REQUEST, "Invalid payload."),
            ApiError::DuplicateEmail { .. } => {
                (StatusCode::BAD_REQUEST, "Sorry. that email already exists.")
            }
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "User does not exist."),
            ApiError::Internal { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
        };

        let body = MessageResponse {
            status: Status::Fail,
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert body extraction rejections to API errors
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidPayload {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
