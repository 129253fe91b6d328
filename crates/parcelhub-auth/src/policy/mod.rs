//! Per-operation access policy.

pub mod access;
pub mod operation;

pub use access::AccessPolicy;
pub use operation::ParcelOperation;
