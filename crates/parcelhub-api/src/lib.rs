//! # parcelhub-api
//!
//! HTTP API layer for ParcelHub built on Axum.
//!
//! Provides the parcel endpoints, the health check, middleware (request
//! logging, CORS, tracing), extractors, DTOs and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
