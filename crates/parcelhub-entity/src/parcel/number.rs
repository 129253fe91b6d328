//! Parcel number generation.

use uuid::Uuid;

/// Prefix shared by every generated parcel number.
pub const PARCEL_NO_PREFIX: &str = "PCL";

/// Generate a fresh parcel number: `PCL` followed by eight uppercase hex
/// characters from a random UUID.
pub fn generate_parcel_no() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{PARCEL_NO_PREFIX}{}", hex[..8].to_uppercase())
}
