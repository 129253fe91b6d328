//! Derived delivery state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery state of a parcel, derived from its `delivered` flag.
///
/// Nothing in the lifecycle performs the `InTransit -> Delivered`
/// transition; the stored fields and their invariant are reserved for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    InTransit,
    Delivered,
}

impl DeliveryStatus {
    pub fn from_delivered(delivered: bool) -> Self {
        if delivered {
            Self::Delivered
        } else {
            Self::InTransit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
