//! Partial update applied to a parcel.

use serde::{Deserialize, Serialize};

/// Fields an editing teller may change on an existing parcel.
///
/// Owning relationships (sender, receiver) are not part of the patch. The
/// editor always becomes the parcel's teller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelChanges {
    pub teller_id: i64,
    pub sender_name: Option<String>,
    pub sender_phone: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_name: Option<String>,
    pub receiver_phone: Option<String>,
    pub quantity: Option<i64>,
}

impl ParcelChanges {
    /// A patch that only records the editor.
    pub fn for_editor(teller_id: i64) -> Self {
        Self {
            teller_id,
            ..Self::default()
        }
    }
}
