//! Process-local entity store.
//!
//! Backs the `memory` provider and the test suites. All tables sit behind a
//! single [`RwLock`], so each mutation happens under one write lock and
//! mirrors the single-statement atomicity of the PostgreSQL store. Foreign
//! keys and the unique `parcel_no` index are enforced the same way the
//! schema enforces them.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use parcelhub_core::error::AppError;
use parcelhub_core::result::AppResult;
use parcelhub_entity::parcel::{NewParcel, Parcel, ParcelChanges, ParcelFilter};
use parcelhub_entity::party::{NewParty, Party, Receiver, Sender};
use parcelhub_entity::user::{NewUser, User};

use crate::store::EntityStore;

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Insert with an explicit id, keeping the sequence ahead of it.
    fn put(&mut self, id: i64, row: T) {
        self.rows.insert(id, row);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: Table<User>,
    senders: Table<Sender>,
    receivers: Table<Receiver>,
    parcels: Table<Parcel>,
}

/// In-memory [`EntityStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryEntityStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a user with a caller-chosen id, replacing any existing row.
    pub async fn seed_user(&self, user: User) {
        self.tables.write().await.users.put(user.id, user);
    }

    /// Store a sender with a caller-chosen id.
    pub async fn seed_sender(&self, sender: Sender) {
        self.tables.write().await.senders.put(sender.id, sender);
    }

    /// Store a receiver with a caller-chosen id.
    pub async fn seed_receiver(&self, receiver: Receiver) {
        self.tables.write().await.receivers.put(receiver.id, receiver);
    }

    /// Store a parcel as-is, including delivered parcels that no lifecycle
    /// operation produces.
    pub async fn seed_parcel(&self, parcel: Parcel) {
        self.tables.write().await.parcels.put(parcel.id, parcel);
    }
}

fn new_party(id: i64, data: NewParty) -> Party {
    Party {
        id,
        full_name: data.full_name,
        phone: data.phone,
        email: data.email,
        center: data.center,
    }
}

#[async_trait]
impl EntityStore for MemoryEntityStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn find_user(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.rows.get(&id).cloned())
    }

    async fn find_sender(&self, id: i64) -> AppResult<Option<Sender>> {
        Ok(self.tables.read().await.senders.rows.get(&id).cloned())
    }

    async fn find_receiver(&self, id: i64) -> AppResult<Option<Receiver>> {
        Ok(self.tables.read().await.receivers.rows.get(&id).cloned())
    }

    async fn insert_user(&self, data: NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.rows.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict(format!(
                "A user with email {} already exists",
                data.email
            )));
        }
        let id = tables.users.allocate_id();
        let user = User {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            role: data.role,
            created_at: Utc::now(),
        };
        tables.users.put(id, user.clone());
        Ok(user)
    }

    async fn insert_sender(&self, data: NewParty) -> AppResult<Sender> {
        let mut tables = self.tables.write().await;
        let id = tables.senders.allocate_id();
        let sender = new_party(id, data);
        tables.senders.put(id, sender.clone());
        Ok(sender)
    }

    async fn insert_receiver(&self, data: NewParty) -> AppResult<Receiver> {
        let mut tables = self.tables.write().await;
        let id = tables.receivers.allocate_id();
        let receiver = new_party(id, data);
        tables.receivers.put(id, receiver.clone());
        Ok(receiver)
    }

    async fn find_parcel(&self, id: i64) -> AppResult<Option<Parcel>> {
        Ok(self.tables.read().await.parcels.rows.get(&id).cloned())
    }

    async fn find_parcel_by_no(&self, parcel_no: &str) -> AppResult<Option<Parcel>> {
        let tables = self.tables.read().await;
        Ok(tables
            .parcels
            .rows
            .values()
            .find(|p| p.parcel_no == parcel_no)
            .cloned())
    }

    async fn list_parcels(&self, filter: ParcelFilter) -> AppResult<Vec<Parcel>> {
        let tables = self.tables.read().await;
        let rows = tables.parcels.rows.values();
        let parcels = match filter {
            ParcelFilter::All => rows.rev().cloned().collect(),
            ParcelFilter::Delivered => rows.filter(|p| p.delivered).cloned().collect(),
        };
        Ok(parcels)
    }

    async fn insert_parcel(&self, data: NewParcel) -> AppResult<Parcel> {
        let mut tables = self.tables.write().await;

        if tables
            .parcels
            .rows
            .values()
            .any(|p| p.parcel_no == data.parcel_no)
        {
            return Err(AppError::conflict(format!(
                "Parcel number {} is already taken",
                data.parcel_no
            )));
        }
        if !tables.senders.rows.contains_key(&data.sender_id)
            || !tables.receivers.rows.contains_key(&data.receiver_id)
            || !tables.users.rows.contains_key(&data.teller_id)
        {
            return Err(AppError::validation(
                "Parcel references a missing sender, receiver or teller",
            ));
        }
        if data.cost <= 0 || data.quantity <= 0 {
            return Err(AppError::validation(
                "Parcel cost and quantity must be positive",
            ));
        }

        let id = tables.parcels.allocate_id();
        let now = Utc::now();
        let parcel = Parcel {
            id,
            parcel_no: data.parcel_no,
            item: data.item,
            sender_id: data.sender_id,
            teller_id: data.teller_id,
            receiver_id: data.receiver_id,
            dispatch_date: data.dispatch_date,
            arrival_date: data.arrival_date,
            delivered_date: None,
            delivered: false,
            cost: data.cost,
            quantity: data.quantity,
            sender_name: data.sender_name,
            sender_phone: data.sender_phone,
            sender_address: data.sender_address,
            receiver_name: data.receiver_name,
            receiver_phone: data.receiver_phone,
            created_at: now,
            updated_at: now,
        };
        tables.parcels.put(id, parcel.clone());
        debug!(parcel_id = id, "Parcel stored in memory");
        Ok(parcel)
    }

    async fn update_parcel_by_no(
        &self,
        parcel_no: &str,
        changes: ParcelChanges,
    ) -> AppResult<Option<Parcel>> {
        let mut tables = self.tables.write().await;

        if !tables.users.rows.contains_key(&changes.teller_id) {
            return Err(AppError::validation("Parcel references a missing teller"));
        }
        if matches!(changes.quantity, Some(q) if q <= 0) {
            return Err(AppError::validation("Parcel quantity must be positive"));
        }

        let Some(parcel) = tables
            .parcels
            .rows
            .values_mut()
            .find(|p| p.parcel_no == parcel_no)
        else {
            return Ok(None);
        };
        parcel.apply(&changes);
        Ok(Some(parcel.clone()))
    }

    async fn delete_parcel_by_no(&self, parcel_no: &str) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        let id = tables
            .parcels
            .rows
            .values()
            .find(|p| p.parcel_no == parcel_no)
            .map(|p| p.id);
        Ok(match id {
            Some(id) => tables.parcels.rows.remove(&id).is_some(),
            None => false,
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
