//! Convenience result type alias for ParcelHub.

use crate::error::AppError;

/// A specialized `Result` type for ParcelHub operations.
pub type AppResult<T> = Result<T, AppError>;
