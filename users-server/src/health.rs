use crate::api::message_response::MessageResponse;
use crate::api::status::Status;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /ping - Service health check
pub async fn ping() -> Response {
    let body = MessageResponse {
        status: Status::Success,
        message: "pong!".to_string(),
    };

    (StatusCode::OK, Json(body)).into_response()
}
