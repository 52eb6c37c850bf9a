use crate::Result;
use crate::connection::run_migrations;

use sqlx::SqlitePool;

/// Drops all application tables along with the migration ledger, then
/// reapplies migrations from scratch. Destroys all stored data.
pub async fn recreate_database(pool: &SqlitePool) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;

    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;

    run_migrations(pool).await?;

    Ok(())
}
