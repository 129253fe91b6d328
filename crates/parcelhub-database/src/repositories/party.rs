//! Sender and receiver repository implementation.

use sqlx::PgPool;

use parcelhub_core::result::AppResult;
use parcelhub_entity::party::{NewParty, Party};

use super::map_sqlx_error;

/// Repository over one of the two party tables (`senders` or `receivers`).
#[derive(Debug, Clone)]
pub struct PartyRepository {
    pool: PgPool,
    table: &'static str,
}

impl PartyRepository {
    /// Repository over the `senders` table.
    pub fn senders(pool: PgPool) -> Self {
        Self {
            pool,
            table: "senders",
        }
    }

    /// Repository over the `receivers` table.
    pub fn receivers(pool: PgPool) -> Self {
        Self {
            pool,
            table: "receivers",
        }
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Party>> {
        let sql = format!("SELECT * FROM {} WHERE id = $1", self.table);
        sqlx::query_as::<_, Party>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to find {} by id", self.table), e))
    }

    pub async fn create(&self, data: &NewParty) -> AppResult<Party> {
        let sql = format!(
            "INSERT INTO {} (full_name, phone, email, center) VALUES ($1, $2, $3, $4) RETURNING *",
            self.table
        );
        sqlx::query_as::<_, Party>(&sql)
            .bind(&data.full_name)
            .bind(&data.phone)
            .bind(&data.email)
            .bind(&data.center)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(&format!("Failed to insert into {}", self.table), e))
    }
}
