//! Custom Axum extractors.

pub mod caller;
pub mod json;
pub mod path;

pub use caller::Caller;
pub use json::ValidatedJson;
pub use path::parse_parcel_id;
