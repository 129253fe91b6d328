//! Parcel lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Settings for the parcel lifecycle manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParcelsConfig {
    /// Check that sender, receiver and teller exist before creating a parcel.
    ///
    /// When disabled the ids supplied by the caller are stored as-is.
    #[serde(default = "default_enforce_references")]
    pub enforce_references: bool,
}

impl Default for ParcelsConfig {
    fn default() -> Self {
        Self {
            enforce_references: default_enforce_references(),
        }
    }
}

fn default_enforce_references() -> bool {
    true
}
