//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use parcelhub_auth::jwt::JwtDecoder;
use parcelhub_auth::policy::AccessPolicy;
use parcelhub_core::config::AppConfig;
use parcelhub_database::EntityStore;
use parcelhub_service::parcel::{ParcelQueryService, ParcelService};

/// Dependencies handed to every Axum handler via `State<AppState>`.
///
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Entity store (PostgreSQL or in-memory)
    pub store: Arc<dyn EntityStore>,
    /// Which operations need a caller identity
    pub policy: Arc<AccessPolicy>,
    /// Bearer token validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Parcel lifecycle service
    pub parcel_service: Arc<ParcelService>,
    /// Parcel listing service
    pub query_service: Arc<ParcelQueryService>,
}

impl AppState {
    /// Wire the services around an already opened store.
    pub fn new(config: AppConfig, store: Arc<dyn EntityStore>) -> Self {
        let policy = Arc::new(AccessPolicy::from_config(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let parcel_service = Arc::new(ParcelService::new(
            Arc::clone(&store),
            Arc::clone(&policy),
            &config.parcels,
        ));
        let query_service = Arc::new(ParcelQueryService::new(
            Arc::clone(&store),
            Arc::clone(&policy),
        ));

        Self {
            config: Arc::new(config),
            store,
            policy,
            jwt_decoder,
            parcel_service,
            query_service,
        }
    }
}
