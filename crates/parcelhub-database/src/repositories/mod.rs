//! Per-table PostgreSQL repositories.

pub mod parcel;
pub mod party;
pub mod user;

pub use parcel::ParcelRepository;
pub use party::PartyRepository;
pub use user::UserRepository;

use parcelhub_core::error::{AppError, ErrorKind};

/// Map a sqlx failure into an [`AppError`].
///
/// Unique violations become conflicts; foreign-key and check violations
/// become validation errors. Everything else is a database error.
pub(crate) fn map_sqlx_error(context: &str, err: sqlx::Error) -> AppError {
    let kind = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => ErrorKind::Conflict,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() || db.is_check_violation() => {
            ErrorKind::Validation
        }
        _ => ErrorKind::Database,
    };
    AppError::with_source(kind, context.to_string(), err)
}
