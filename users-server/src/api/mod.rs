pub mod error;
pub mod message_response;
pub mod status;
pub mod users;
