//! Parcel domain entities.

pub mod changes;
pub mod model;
pub mod number;
pub mod status;

pub use changes::ParcelChanges;
pub use model::{NewParcel, Parcel, ParcelFilter};
pub use number::generate_parcel_no;
pub use status::DeliveryStatus;
