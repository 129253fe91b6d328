//! Seeded stores shared by the service tests.

use std::sync::Arc;

use chrono::Utc;

use parcelhub_auth::policy::AccessPolicy;
use parcelhub_core::config::ParcelsConfig;
use parcelhub_database::MemoryEntityStore;
use parcelhub_entity::parcel::Parcel;
use parcelhub_entity::party::Party;
use parcelhub_entity::user::{User, UserRole};

use crate::context::RequestContext;
use crate::parcel::{ParcelQueryService, ParcelService};

pub const SENDER_ID: i64 = 1;
pub const RECEIVER_ID: i64 = 2;
pub const TELLER_ID: i64 = 7;
pub const EDITOR_ID: i64 = 9;

pub fn user(id: i64, first: &str, last: &str) -> User {
    User {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@parcelhub.test", first.to_lowercase()),
        role: UserRole::Teller,
        created_at: Utc::now(),
    }
}

pub fn party(id: i64, name: &str) -> Party {
    Party {
        id,
        full_name: name.to_string(),
        phone: Some(format!("07000000{id:02}")),
        email: None,
        center: Some("Central".to_string()),
    }
}

/// A stored parcel with the given number, owned by the seeded parties.
pub fn parcel(id: i64, parcel_no: &str, delivered: bool) -> Parcel {
    let now = Utc::now();
    Parcel {
        id,
        parcel_no: parcel_no.to_string(),
        item: "box".to_string(),
        sender_id: SENDER_ID,
        teller_id: TELLER_ID,
        receiver_id: RECEIVER_ID,
        dispatch_date: None,
        arrival_date: None,
        delivered_date: delivered.then(|| now.date_naive()),
        delivered,
        cost: 10,
        quantity: 2,
        sender_name: Some("Sam Sender".to_string()),
        sender_phone: Some("0700000001".to_string()),
        sender_address: Some("Central".to_string()),
        receiver_name: Some("Rae Receiver".to_string()),
        receiver_phone: Some("0700000002".to_string()),
        created_at: now,
        updated_at: now,
    }
}

/// Memory store with sender 1, receiver 2, tellers 7 and 9.
pub async fn seeded_store() -> MemoryEntityStore {
    let store = MemoryEntityStore::new();
    store.seed_sender(party(SENDER_ID, "Sam Sender")).await;
    store.seed_receiver(party(RECEIVER_ID, "Rae Receiver")).await;
    store.seed_user(user(TELLER_ID, "Tess", "Ng")).await;
    store.seed_user(user(EDITOR_ID, "Ede", "Okafor")).await;
    store
}

pub fn services(store: &MemoryEntityStore, policy: AccessPolicy) -> (ParcelService, ParcelQueryService) {
    let store = Arc::new(store.clone());
    let policy = Arc::new(policy);
    (
        ParcelService::new(store.clone(), policy.clone(), &ParcelsConfig::default()),
        ParcelQueryService::new(store, policy),
    )
}

pub fn caller(id: i64) -> RequestContext {
    RequestContext::new(id, UserRole::Teller)
}
