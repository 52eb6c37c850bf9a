use crate::DbError;
use crate::Result as DbErrorResult;

use users_core::{NewUser, User};

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new user and returns the stored row. The store assigns
    /// `id` and `created_at`.
    pub async fn insert(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let created_at = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT INTO users (username, email, active, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(new_user.active)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, username, email, active, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, username, email, active, created_at
              FROM users
              WHERE email = ?
              "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| Self::map_row(&r)).transpose()
    }

    /// Returns all users in insertion order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
              SELECT id, username, email, active, created_at
              FROM users
              ORDER BY id ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<User> {
        let created_at_ts: i64 = row.try_get("created_at")?;
        let created_at = DateTime::from_timestamp(created_at_ts, 0).ok_or_else(|| {
            DbError::from(sqlx::Error::ColumnDecode {
                index: "created_at".to_string(),
                source: format!("invalid unix timestamp: {}", created_at_ts).into(),
            })
        })?;

        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            email: row.try_get("email")?,
            active: row.try_get("active")?,
            created_at,
        })
    }
}
