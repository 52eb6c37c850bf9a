pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    message_response::MessageResponse,
    status::Status,
    users::{
        create_user_request::CreateUserRequest,
        user_dto::UserDto,
        user_list_response::{UserListData, UserListResponse},
        user_response::UserResponse,
        users::{create_user, get_user, list_users},
    },
};

pub use crate::config::Config;
pub use crate::error::ServerError;
pub use crate::routes::build_router;
pub use crate::state::AppState;
