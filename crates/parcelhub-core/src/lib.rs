//! # parcelhub-core
//!
//! Core crate for ParcelHub. Contains configuration schemas, the unified
//! error system, and small value helpers shared by every layer.
//!
//! This crate has **no** internal dependencies on other ParcelHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
