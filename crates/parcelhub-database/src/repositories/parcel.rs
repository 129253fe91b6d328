//! Parcel repository implementation.

use sqlx::PgPool;

use parcelhub_core::result::AppResult;
use parcelhub_entity::parcel::{NewParcel, Parcel, ParcelChanges, ParcelFilter};

use super::map_sqlx_error;

/// Repository for parcel CRUD and listing.
#[derive(Debug, Clone)]
pub struct ParcelRepository {
    pool: PgPool,
}

impl ParcelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a parcel by numeric id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Parcel>> {
        sqlx::query_as::<_, Parcel>("SELECT * FROM parcels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find parcel by id", e))
    }

    /// Find a parcel by its human-facing number.
    pub async fn find_by_no(&self, parcel_no: &str) -> AppResult<Option<Parcel>> {
        sqlx::query_as::<_, Parcel>("SELECT * FROM parcels WHERE parcel_no = $1")
            .bind(parcel_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to find parcel by number", e))
    }

    /// List parcels matching the filter.
    pub async fn find_all(&self, filter: ParcelFilter) -> AppResult<Vec<Parcel>> {
        let sql = match filter {
            ParcelFilter::All => "SELECT * FROM parcels ORDER BY id DESC",
            ParcelFilter::Delivered => "SELECT * FROM parcels WHERE delivered = TRUE",
        };
        sqlx::query_as::<_, Parcel>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to list parcels", e))
    }

    /// Record a new, undelivered parcel.
    pub async fn create(&self, data: &NewParcel) -> AppResult<Parcel> {
        sqlx::query_as::<_, Parcel>(
            r#"INSERT INTO parcels
                (parcel_no, item, sender_id, teller_id, receiver_id,
                 dispatch_date, arrival_date, delivered, delivered_date, cost, quantity,
                 sender_name, sender_phone, sender_address, receiver_name, receiver_phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, NULL, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *"#,
        )
        .bind(&data.parcel_no)
        .bind(&data.item)
        .bind(data.sender_id)
        .bind(data.teller_id)
        .bind(data.receiver_id)
        .bind(data.dispatch_date)
        .bind(data.arrival_date)
        .bind(data.cost)
        .bind(data.quantity)
        .bind(&data.sender_name)
        .bind(&data.sender_phone)
        .bind(&data.sender_address)
        .bind(&data.receiver_name)
        .bind(&data.receiver_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create parcel", e))
    }

    /// Patch a parcel in one statement; absent fields keep their value.
    pub async fn update_by_no(
        &self,
        parcel_no: &str,
        changes: &ParcelChanges,
    ) -> AppResult<Option<Parcel>> {
        sqlx::query_as::<_, Parcel>(
            r#"UPDATE parcels SET
                teller_id = $2,
                sender_name = COALESCE($3, sender_name),
                sender_phone = COALESCE($4, sender_phone),
                sender_address = COALESCE($5, sender_address),
                receiver_name = COALESCE($6, receiver_name),
                receiver_phone = COALESCE($7, receiver_phone),
                quantity = COALESCE($8, quantity),
                updated_at = NOW()
            WHERE parcel_no = $1
            RETURNING *"#,
        )
        .bind(parcel_no)
        .bind(changes.teller_id)
        .bind(&changes.sender_name)
        .bind(&changes.sender_phone)
        .bind(&changes.sender_address)
        .bind(&changes.receiver_name)
        .bind(&changes.receiver_phone)
        .bind(changes.quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update parcel", e))
    }

    /// Hard-delete a parcel by number.
    pub async fn delete_by_no(&self, parcel_no: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM parcels WHERE parcel_no = $1")
            .bind(parcel_no)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("Failed to delete parcel", e))?;
        Ok(result.rows_affected() > 0)
    }
}
