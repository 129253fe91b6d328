//! Entity store contract.

use std::fmt::Debug;

use async_trait::async_trait;

use parcelhub_core::result::AppResult;
use parcelhub_entity::parcel::{NewParcel, Parcel, ParcelChanges, ParcelFilter};
use parcelhub_entity::party::{NewParty, Receiver, Sender};
use parcelhub_entity::user::{NewUser, User};

/// Durable storage for users, senders, receivers and parcels.
///
/// Records are keyed by numeric id; parcels can also be addressed by
/// `parcel_no`. Every mutating call is a single atomic store operation.
/// No business rules live behind this trait.
#[async_trait]
pub trait EntityStore: Send + Sync + Debug + 'static {
    /// Short backend name reported by the health endpoint.
    fn name(&self) -> &'static str;

    async fn find_user(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_sender(&self, id: i64) -> AppResult<Option<Sender>>;

    async fn find_receiver(&self, id: i64) -> AppResult<Option<Receiver>>;

    async fn insert_user(&self, user: NewUser) -> AppResult<User>;

    async fn insert_sender(&self, sender: NewParty) -> AppResult<Sender>;

    async fn insert_receiver(&self, receiver: NewParty) -> AppResult<Receiver>;

    async fn find_parcel(&self, id: i64) -> AppResult<Option<Parcel>>;

    async fn find_parcel_by_no(&self, parcel_no: &str) -> AppResult<Option<Parcel>>;

    /// `ParcelFilter::All` is ordered by id descending; `Delivered` carries
    /// no ordering guarantee.
    async fn list_parcels(&self, filter: ParcelFilter) -> AppResult<Vec<Parcel>>;

    /// Insert a parcel. A duplicate `parcel_no` is a conflict and a dangling
    /// sender, receiver or teller reference is a validation error.
    async fn insert_parcel(&self, parcel: NewParcel) -> AppResult<Parcel>;

    /// Patch a parcel by number. Returns `None` when no parcel matches.
    async fn update_parcel_by_no(
        &self,
        parcel_no: &str,
        changes: ParcelChanges,
    ) -> AppResult<Option<Parcel>>;

    /// Hard-delete a parcel by number. Returns `false` when no parcel matches.
    async fn delete_parcel_by_no(&self, parcel_no: &str) -> AppResult<bool>;

    async fn health_check(&self) -> AppResult<bool>;
}
