use crate::ApiError;

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;
use users_core::ErrorLocation;
use users_db::DbError;

#[tokio::test]
async fn test_invalid_payload_returns_400_with_json_body() {
    let error = ApiError::InvalidPayload {
        message: "missing field `email`".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Invalid payload.");
}

#[tokio::test]
async fn test_duplicate_email_returns_400_with_fixed_message() {
    let error = ApiError::DuplicateEmail {
        email: "mahfuz@endecoder.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Sorry. that email already exists.");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        id: "999".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "User does not exist.");
}

#[tokio::test]
async fn test_internal_error_returns_500_without_details() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Something went wrong.");
}

#[test]
fn test_db_error_converts_to_internal() {
    let db_err = DbError::Migration {
        message: "migration table locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        _ => panic!("Expected Internal error"),
    }
}
