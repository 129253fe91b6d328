//! Loosely typed parcel inputs and their normalization.
//!
//! Ids and amounts arrive as JSON numbers or numeric strings, so they are
//! kept as raw [`Value`]s until the service coerces them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use parcelhub_core::error::AppError;
use parcelhub_core::result::AppResult;
use parcelhub_core::types::{optional_positive_int, required_positive_int};
use parcelhub_entity::parcel::ParcelChanges;

/// Body of a create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateParcelInput {
    /// Sender id.
    pub customer_id: Option<Value>,
    pub receiver_id: Option<Value>,
    pub parcel: Option<ParcelDetailsInput>,
}

/// The `parcel` member of a create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParcelDetailsInput {
    pub item: Option<String>,
    pub dispatch_date: Option<String>,
    pub arrival_date: Option<String>,
    pub cost: Option<Value>,
    pub quantity: Option<Value>,
}

/// Body of an update request. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateParcelInput {
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub parcel_quantity: Option<Value>,
}

/// A create request after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidatedCreate {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub item: String,
    pub dispatch_date: Option<NaiveDate>,
    pub arrival_date: Option<NaiveDate>,
    pub cost: i64,
    pub quantity: i64,
}

impl CreateParcelInput {
    pub(crate) fn validate(&self) -> AppResult<ValidatedCreate> {
        let sender_id = required_positive_int("customer_id", self.customer_id.as_ref())?;
        let receiver_id = required_positive_int("receiver_id", self.receiver_id.as_ref())?;
        let details = self
            .parcel
            .as_ref()
            .ok_or_else(|| AppError::validation("parcel is required"))?;

        let item = non_blank(details.item.as_deref())
            .ok_or_else(|| AppError::validation("item is required"))?;

        Ok(ValidatedCreate {
            sender_id,
            receiver_id,
            item,
            dispatch_date: parse_date("dispatch_date", details.dispatch_date.as_deref())?,
            arrival_date: parse_date("arrival_date", details.arrival_date.as_deref())?,
            cost: required_positive_int("cost", details.cost.as_ref())?,
            quantity: required_positive_int("quantity", details.quantity.as_ref())?,
        })
    }
}

impl UpdateParcelInput {
    /// Build the patch for `editor_id`. Blank text counts as absent.
    pub(crate) fn into_changes(self, editor_id: i64) -> AppResult<ParcelChanges> {
        Ok(ParcelChanges {
            teller_id: editor_id,
            quantity: optional_positive_int("parcel_quantity", self.parcel_quantity.as_ref())?,
            sender_name: non_blank(self.sender_name.as_deref()),
            sender_phone: non_blank(self.sender_phone.as_deref()),
            sender_address: non_blank(self.sender_address.as_deref()),
            receiver_name: non_blank(self.receiver_name.as_deref()),
            receiver_phone: non_blank(self.receiver_phone.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_date(field: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::validation(format!("{field} must be a date in YYYY-MM-DD format"))),
    }
}
