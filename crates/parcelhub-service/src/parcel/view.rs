//! Wire-facing views of parcels.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use parcelhub_entity::parcel::{DeliveryStatus, Parcel};
use parcelhub_entity::party::{Receiver, Sender};
use parcelhub_entity::user::{User, UserRole};

/// Identifiers of a freshly created parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedParcel {
    pub id: i64,
    pub parcel_no: String,
}

/// One row of the parcel listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelSummary {
    pub id: i64,
    pub parcel_no: String,
    pub item: String,
    pub sender_id: i64,
    pub teller_id: i64,
    pub receiver_id: i64,
    pub dispatch_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub delivered_date: Option<NaiveDate>,
    pub delivered: bool,
    pub cost: i64,
    pub quantity: i64,
}

impl From<Parcel> for ParcelSummary {
    fn from(p: Parcel) -> Self {
        Self {
            id: p.id,
            parcel_no: p.parcel_no,
            item: p.item,
            sender_id: p.sender_id,
            teller_id: p.teller_id,
            receiver_id: p.receiver_id,
            dispatch_date: p.dispatch_date,
            arrival_date: p.arrival_date,
            delivered_date: p.delivered_date,
            delivered: p.delivered,
            cost: p.cost,
            quantity: p.quantity,
        }
    }
}

/// The teller as shown in a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TellerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<User> for TellerView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            role: u.role,
        }
    }
}

/// A parcel joined with its sender, receiver and teller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelDetailView {
    pub id: i64,
    pub parcel_no: String,
    pub item: String,
    pub quantity: i64,
    pub dispatch_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub delivered_date: Option<NaiveDate>,
    pub delivered: bool,
    pub status: DeliveryStatus,
    pub cost: i64,
    pub sender: Sender,
    pub receiver: Receiver,
    pub teller: TellerView,
}

impl ParcelDetailView {
    pub(crate) fn assemble(parcel: Parcel, sender: Sender, receiver: Receiver, teller: User) -> Self {
        Self {
            status: parcel.status(),
            id: parcel.id,
            parcel_no: parcel.parcel_no,
            item: parcel.item,
            quantity: parcel.quantity,
            dispatch_date: parcel.dispatch_date,
            arrival_date: parcel.arrival_date,
            delivered_date: parcel.delivered_date,
            delivered: parcel.delivered,
            cost: parcel.cost,
            sender,
            receiver,
            teller: teller.into(),
        }
    }
}

/// Result of an update: the contact snapshot plus who booked the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedParcelView {
    pub id: i64,
    pub parcel_no: String,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub parcel_quantity: i64,
    /// `"<first_name> <last_name>"` of the editor.
    pub booked_by: String,
}

impl UpdatedParcelView {
    pub(crate) fn new(parcel: Parcel, editor: &User) -> Self {
        Self {
            id: parcel.id,
            parcel_no: parcel.parcel_no,
            sender_name: parcel.sender_name,
            sender_phone: parcel.sender_phone,
            sender_address: parcel.sender_address,
            receiver_name: parcel.receiver_name,
            receiver_phone: parcel.receiver_phone,
            parcel_quantity: parcel.quantity,
            booked_by: editor.full_name(),
        }
    }
}
