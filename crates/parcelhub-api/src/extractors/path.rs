//! Typed path parameter helpers.

use parcelhub_core::error::AppError;

/// Parse the detail route's segment as a positive parcel id.
pub fn parse_parcel_id(segment: &str) -> Result<i64, AppError> {
    match segment.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::validation(format!(
            "Invalid parcel id: '{segment}'. Expected a positive integer"
        ))),
    }
}
