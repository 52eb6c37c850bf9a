pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::ErrorLocation;
pub use models::user::{NewUser, User};
