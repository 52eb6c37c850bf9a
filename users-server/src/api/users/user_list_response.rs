use crate::api::status::Status;
use crate::api::users::user_dto::UserDto;

use serde::Serialize;

/// List of users response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub status: Status,
    pub data: UserListData,
}

/// Inner `data` object wrapping the user collection
#[derive(Debug, Serialize)]
pub struct UserListData {
    pub users: Vec<UserDto>,
}
