//! Request handlers.

pub mod health;
pub mod parcel;

use axum::Json;
use axum::http::StatusCode;

use parcelhub_core::error::AppError;

use crate::error::{ApiError, ApiErrorResponse};

/// Fallback for unknown routes, in the uniform error shape.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}

/// Fallback for a known path called with an unsupported method.
pub async fn method_not_allowed() -> (StatusCode, Json<ApiErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiErrorResponse::fail("Method not allowed")),
    )
}
