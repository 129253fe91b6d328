//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use parcelhub_core::config::DatabaseConfig;
use parcelhub_core::error::AppError;
use parcelhub_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryEntityStore;
use crate::migration::run_migrations;
use crate::postgres::PgEntityStore;
use crate::store::EntityStore;

/// Owns the selected [`EntityStore`] and hands out shared handles to it.
///
/// The provider is chosen once at construction from `database.provider`.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn EntityStore>,
    pool: Option<DatabasePool>,
}

impl StoreManager {
    /// Build the store named by configuration, running migrations for
    /// PostgreSQL when enabled.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL entity store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    inner: Arc::new(PgEntityStore::new(pool.clone())),
                    pool: Some(pool),
                })
            }
            "memory" => {
                info!("Initializing in-memory entity store");
                Ok(Self::from_store(Arc::new(MemoryEntityStore::new())))
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Wrap an existing store (for testing).
    pub fn from_store(store: Arc<dyn EntityStore>) -> Self {
        Self {
            inner: store,
            pool: None,
        }
    }

    /// Shared handle to the store.
    pub fn store(&self) -> Arc<dyn EntityStore> {
        Arc::clone(&self.inner)
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
