//! PostgreSQL-backed entity store.

use async_trait::async_trait;

use parcelhub_core::error::{AppError, ErrorKind};
use parcelhub_core::result::AppResult;
use parcelhub_entity::parcel::{NewParcel, Parcel, ParcelChanges, ParcelFilter};
use parcelhub_entity::party::{NewParty, Receiver, Sender};
use parcelhub_entity::user::{NewUser, User};

use crate::connection::DatabasePool;
use crate::repositories::{ParcelRepository, PartyRepository, UserRepository};
use crate::store::EntityStore;

/// [`EntityStore`] composed from the per-table repositories.
#[derive(Debug, Clone)]
pub struct PgEntityStore {
    db: DatabasePool,
    users: UserRepository,
    senders: PartyRepository,
    receivers: PartyRepository,
    parcels: ParcelRepository,
}

impl PgEntityStore {
    pub fn new(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: UserRepository::new(pool.clone()),
            senders: PartyRepository::senders(pool.clone()),
            receivers: PartyRepository::receivers(pool.clone()),
            parcels: ParcelRepository::new(pool),
            db,
        }
    }
}

#[async_trait]
impl EntityStore for PgEntityStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn find_user(&self, id: i64) -> AppResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    async fn find_sender(&self, id: i64) -> AppResult<Option<Sender>> {
        self.senders.find_by_id(id).await
    }

    async fn find_receiver(&self, id: i64) -> AppResult<Option<Receiver>> {
        self.receivers.find_by_id(id).await
    }

    async fn insert_user(&self, user: NewUser) -> AppResult<User> {
        self.users.create(&user).await
    }

    async fn insert_sender(&self, sender: NewParty) -> AppResult<Sender> {
        self.senders.create(&sender).await
    }

    async fn insert_receiver(&self, receiver: NewParty) -> AppResult<Receiver> {
        self.receivers.create(&receiver).await
    }

    async fn find_parcel(&self, id: i64) -> AppResult<Option<Parcel>> {
        self.parcels.find_by_id(id).await
    }

    async fn find_parcel_by_no(&self, parcel_no: &str) -> AppResult<Option<Parcel>> {
        self.parcels.find_by_no(parcel_no).await
    }

    async fn list_parcels(&self, filter: ParcelFilter) -> AppResult<Vec<Parcel>> {
        self.parcels.find_all(filter).await
    }

    async fn insert_parcel(&self, parcel: NewParcel) -> AppResult<Parcel> {
        self.parcels.create(&parcel).await.map_err(|e| match e.kind {
            ErrorKind::Conflict => AppError::conflict(format!(
                "Parcel number {} is already taken",
                parcel.parcel_no
            )),
            ErrorKind::Validation => AppError::validation(
                "Parcel references a missing sender, receiver or teller",
            ),
            _ => e,
        })
    }

    async fn update_parcel_by_no(
        &self,
        parcel_no: &str,
        changes: ParcelChanges,
    ) -> AppResult<Option<Parcel>> {
        self.parcels.update_by_no(parcel_no, &changes).await
    }

    async fn delete_parcel_by_no(&self, parcel_no: &str) -> AppResult<bool> {
        self.parcels.delete_by_no(parcel_no).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.db.pool())
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
