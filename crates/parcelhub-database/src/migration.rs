//! Schema migration runner.

use sqlx::PgPool;
use tracing::info;

use parcelhub_core::error::{AppError, ErrorKind};
use parcelhub_core::result::AppResult;

/// Apply every pending migration under `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply parcel schema migrations: {e}"),
                e,
            )
        })?;

    info!("Parcel schema is up to date");
    Ok(())
}
