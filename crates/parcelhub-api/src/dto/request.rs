//! Request DTOs with validation.
//!
//! Numeric fields stay as raw JSON values: the lifecycle service accepts
//! both numbers and numeric strings for them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use parcelhub_service::parcel::{CreateParcelInput, ParcelDetailsInput, UpdateParcelInput};

/// Query string of the list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParcelsQuery {
    /// `received` narrows the listing to delivered parcels.
    pub category: Option<String>,
}

/// POST /api/parcels/create body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateParcelRequest {
    /// Sender id.
    pub customer_id: Option<Value>,
    /// Receiver id.
    pub receiver_id: Option<Value>,
    /// Parcel details.
    #[validate(nested)]
    pub parcel: Option<ParcelRequest>,
}

/// The `parcel` member of a create request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ParcelRequest {
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub item: Option<String>,
    pub dispatch_date: Option<String>,
    pub arrival_date: Option<String>,
    pub cost: Option<Value>,
    pub quantity: Option<Value>,
}

/// PUT /api/parcels/{parcel_no} body. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateParcelRequest {
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub sender_name: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub sender_phone: Option<String>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub sender_address: Option<String>,
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub receiver_name: Option<String>,
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub receiver_phone: Option<String>,
    pub parcel_quantity: Option<Value>,
}

impl From<CreateParcelRequest> for CreateParcelInput {
    fn from(req: CreateParcelRequest) -> Self {
        Self {
            customer_id: req.customer_id,
            receiver_id: req.receiver_id,
            parcel: req.parcel.map(|p| ParcelDetailsInput {
                item: p.item,
                dispatch_date: p.dispatch_date,
                arrival_date: p.arrival_date,
                cost: p.cost,
                quantity: p.quantity,
            }),
        }
    }
}

impl From<UpdateParcelRequest> for UpdateParcelInput {
    fn from(req: UpdateParcelRequest) -> Self {
        Self {
            sender_name: req.sender_name,
            sender_phone: req.sender_phone,
            sender_address: req.sender_address,
            receiver_name: req.receiver_name,
            receiver_phone: req.receiver_phone,
            parcel_quantity: req.parcel_quantity,
        }
    }
}
