//! Response DTOs.

use serde::{Deserialize, Serialize};

use parcelhub_service::parcel::CreatedParcel;

/// `{"status": "success", "message": ...}` acknowledgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

/// Acknowledgment of a create, carrying the identifiers callers need for
/// later update and delete calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParcelResponse {
    pub status: String,
    pub message: String,
    pub parcel: CreatedParcel,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Active store backend.
    pub store: String,
}
