//! Parcel listing.

use std::sync::Arc;

use tracing::debug;

use parcelhub_auth::policy::{AccessPolicy, ParcelOperation};
use parcelhub_core::result::AppResult;
use parcelhub_database::EntityStore;
use parcelhub_entity::parcel::ParcelFilter;

use super::store_failure;
use super::view::ParcelSummary;
use crate::context::RequestContext;

/// Read-only listing of parcels for the list view.
#[derive(Debug, Clone)]
pub struct ParcelQueryService {
    store: Arc<dyn EntityStore>,
    policy: Arc<AccessPolicy>,
}

impl ParcelQueryService {
    pub fn new(store: Arc<dyn EntityStore>, policy: Arc<AccessPolicy>) -> Self {
        Self { store, policy }
    }

    /// List parcels. `category == "received"` returns delivered parcels
    /// only; any other value lists everything, newest first.
    pub async fn list(
        &self,
        caller: Option<&RequestContext>,
        category: Option<&str>,
    ) -> AppResult<Vec<ParcelSummary>> {
        self.policy.check(ParcelOperation::List, caller.is_some())?;

        let filter = ParcelFilter::from_category(category);
        let parcels = self
            .store
            .list_parcels(filter)
            .await
            .map_err(store_failure("Could not get parcels. Please try again"))?;

        debug!(?filter, count = parcels.len(), "Listed parcels");
        Ok(parcels.into_iter().map(ParcelSummary::from).collect())
    }
}
