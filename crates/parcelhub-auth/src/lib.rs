//! # parcelhub-auth
//!
//! The identity side of ParcelHub.
//!
//! ## Modules
//!
//! - `jwt`: bearer token claims, issuing and validation
//! - `policy`: which parcel operations require a caller identity

pub mod jwt;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use policy::{AccessPolicy, ParcelOperation};
