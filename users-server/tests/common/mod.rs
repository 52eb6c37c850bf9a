#![allow(dead_code)]

//! Test infrastructure for users-server API tests

use users_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/users-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState { pool }
}

/// Create a test user directly in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str, email: &str) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    let result = sqlx::query(
        "INSERT INTO users (username, email, active, created_at) VALUES (?, ?, 1, ?)",
    )
    .bind(username)
    .bind(email)
    .bind(chrono::Utc::now().timestamp())
    .execute(pool)
    .await
    .expect("Failed to create test user");

    result.last_insert_rowid()
}
