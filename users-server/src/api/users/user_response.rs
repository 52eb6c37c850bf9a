use crate::api::status::Status;
use crate::api::users::user_dto::UserDto;

use serde::Serialize;

/// Single user response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub status: Status,
    pub data: UserDto,
}
