//! Parcel operations subject to the access policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every operation the parcel API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParcelOperation {
    List,
    Create,
    Detail,
    Update,
    Delete,
}

impl ParcelOperation {
    pub const ALL: [ParcelOperation; 5] = [
        Self::List,
        Self::Create,
        Self::Detail,
        Self::Update,
        Self::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Detail => "detail",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ParcelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
