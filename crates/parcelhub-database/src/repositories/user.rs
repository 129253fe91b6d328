//! User repository implementation.

use sqlx::PgPool;

use parcelhub_core::result::AppResult;
use parcelhub_entity::user::{NewUser, User};

use super::map_sqlx_error;

/// Repository for staff users.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find user by id", e))
    }

    /// Register a user.
    pub async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            r#"INSERT INTO users (first_name, last_name, email, role)
            VALUES ($1, $2, $3, $4)
            RETURNING *"#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create user", e))
    }
}
