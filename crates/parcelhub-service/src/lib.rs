//! # parcelhub-service
//!
//! Business logic for ParcelHub. The lifecycle service creates, reads,
//! updates and deletes parcels; the query service lists them.
//!
//! Services follow constructor injection: the entity store and access
//! policy are provided at construction time via `Arc` references.

pub mod context;
pub mod parcel;

#[cfg(test)]
pub(crate) mod fixtures;

pub use context::RequestContext;
pub use parcel::{ParcelQueryService, ParcelService};
