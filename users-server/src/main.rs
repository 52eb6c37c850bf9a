pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

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

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.log_level, config.log_file.clone(), config.log_colored)?;

    info!("Starting users-server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize database pool and run migrations
    info!("Connecting to database: {}", config.database_path.display());
    let pool = users_db::create_pool(&config.database_path, config.max_connections).await?;
    info!("Database connection established");

    // Build router with shared state
    let app = build_router(AppState { pool });

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

/// Completes when SIGINT (Ctrl+C) is received
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
