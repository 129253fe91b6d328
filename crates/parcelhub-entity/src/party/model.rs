use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer on either end of a parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Party {
    /// Unique identifier within its table.
    pub id: i64,
    /// Full name.
    pub full_name: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Service center the party uses.
    pub center: Option<String>,
}

/// A customer dropping off a parcel.
pub type Sender = Party;

/// The party collecting a parcel.
pub type Receiver = Party;

/// Data required to register a sender or receiver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewParty {
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub center: Option<String>,
}
