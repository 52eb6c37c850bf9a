use crate::api::users::users::{create_user, get_user, list_users};
use crate::health;
use crate::state::AppState;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoint
        .route("/ping", get(health::ping))
        // User endpoints
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
