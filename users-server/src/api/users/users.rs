//! User REST API handlers
//!
//! Handlers for registering users and reading them back.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, MessageResponse, Status, UserDto,
    UserListData, UserListResponse, UserResponse,
};

use users_core::{ErrorLocation, NewUser};
use users_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /users
///
/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    // 1. Decode the payload, treating any rejection as an invalid payload
    let Json(req) = payload?;

    // 2. Reject emails that are already registered
    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_email(&req.email).await?.is_some() {
        return Err(ApiError::DuplicateEmail {
            email: req.email,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Save to database; the unique index backstops concurrent inserts
    let new_user = NewUser::new(req.username, req.email);
    let user = match repo.insert(&new_user).await {
        Ok(user) => user,
        Err(DbError::UniqueViolation { .. }) => {
            return Err(ApiError::DuplicateEmail {
                email: new_user.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Err(e) => return Err(e.into()),
    };

    log::info!("Created user {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            status: Status::Success,
            message: format!("{} was added!", user.email),
        }),
    ))
}

/// GET /users/{id}
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    // Ids are positive integers; anything else reads as a missing user
    let user_id = match id.parse::<i64>() {
        Ok(value) if value > 0 => value,
        _ => {
            return Err(ApiError::NotFound {
                id,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            id,
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse {
        status: Status::Success,
        data: user.into(),
    }))
}

/// GET /users
///
/// List all users in insertion order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(UserListResponse {
        status: Status::Success,
        data: UserListData {
            users: users.into_iter().map(UserDto::from).collect(),
        },
    }))
}
