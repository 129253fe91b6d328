//! # parcelhub-entity
//!
//! Domain entity models for ParcelHub. Every struct in this crate represents
//! a database table row or a domain value object. Table rows additionally
//! derive `sqlx::FromRow`.

pub mod parcel;
pub mod party;
pub mod user;

pub use parcel::{DeliveryStatus, NewParcel, Parcel, ParcelChanges, ParcelFilter};
pub use party::{NewParty, Party, Receiver, Sender};
pub use user::{NewUser, User, UserRole};
