//! Parcel entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::changes::ParcelChanges;
use super::status::DeliveryStatus;

/// A parcel recorded at a service center.
///
/// Parcels are addressed two ways: by the numeric `id` (create and detail)
/// and by the human-facing `parcel_no` (update and delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Parcel {
    /// Numeric identifier.
    pub id: i64,
    /// Human-facing identifier, unique.
    pub parcel_no: String,
    /// Description of the contents.
    pub item: String,
    /// Sender reference.
    pub sender_id: i64,
    /// Teller who recorded or last edited the parcel.
    pub teller_id: i64,
    /// Receiver reference.
    pub receiver_id: i64,
    /// Date the parcel leaves the origin center.
    pub dispatch_date: Option<NaiveDate>,
    /// Expected arrival date at the destination center.
    pub arrival_date: Option<NaiveDate>,
    /// Date the receiver collected the parcel. Set iff `delivered`.
    pub delivered_date: Option<NaiveDate>,
    /// Whether the parcel has been collected.
    pub delivered: bool,
    /// Positive cost.
    pub cost: i64,
    /// Positive item count.
    pub quantity: i64,
    /// Sender name snapshot.
    pub sender_name: Option<String>,
    /// Sender phone snapshot.
    pub sender_phone: Option<String>,
    /// Sender address snapshot.
    pub sender_address: Option<String>,
    /// Receiver name snapshot.
    pub receiver_name: Option<String>,
    /// Receiver phone snapshot.
    pub receiver_phone: Option<String>,
    /// When the parcel was recorded.
    pub created_at: DateTime<Utc>,
    /// When the parcel was last changed.
    pub updated_at: DateTime<Utc>,
}

impl Parcel {
    /// Derived delivery state.
    pub fn status(&self) -> DeliveryStatus {
        DeliveryStatus::from_delivered(self.delivered)
    }

    /// Apply a patch in place. Absent fields are left untouched; the teller
    /// is always replaced.
    pub fn apply(&mut self, changes: &ParcelChanges) {
        self.teller_id = changes.teller_id;
        if let Some(v) = &changes.sender_name {
            self.sender_name = Some(v.clone());
        }
        if let Some(v) = &changes.sender_phone {
            self.sender_phone = Some(v.clone());
        }
        if let Some(v) = &changes.sender_address {
            self.sender_address = Some(v.clone());
        }
        if let Some(v) = &changes.receiver_name {
            self.receiver_name = Some(v.clone());
        }
        if let Some(v) = &changes.receiver_phone {
            self.receiver_phone = Some(v.clone());
        }
        if let Some(q) = changes.quantity {
            self.quantity = q;
        }
        self.updated_at = Utc::now();
    }
}

/// Data required to record a parcel. New parcels are never delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParcel {
    pub parcel_no: String,
    pub item: String,
    pub sender_id: i64,
    pub teller_id: i64,
    pub receiver_id: i64,
    pub dispatch_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub cost: i64,
    pub quantity: i64,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
}

/// Listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParcelFilter {
    /// Every parcel, newest first.
    #[default]
    All,
    /// Only collected parcels, unordered.
    Delivered,
}

impl ParcelFilter {
    /// Map the list endpoint's `category` value. Only `"received"` narrows
    /// the listing; anything else lists everything.
    pub fn from_category(category: Option<&str>) -> Self {
        match category {
            Some("received") => Self::Delivered,
            _ => Self::All,
        }
    }
}
