//! Parcel lifecycle and listing.

pub mod input;
pub mod query;
pub mod service;
pub mod view;

pub use input::{CreateParcelInput, ParcelDetailsInput, UpdateParcelInput};
pub use query::ParcelQueryService;
pub use service::ParcelService;
pub use view::{CreatedParcel, ParcelDetailView, ParcelSummary, TellerView, UpdatedParcelView};

use parcelhub_auth::policy::{AccessPolicy, ParcelOperation};
use parcelhub_core::error::{AppError, ErrorKind};
use parcelhub_core::result::AppResult;

use crate::context::RequestContext;

/// Apply the access policy, then demand a caller for operations that need
/// one to act on behalf of.
fn require_caller<'a>(
    policy: &AccessPolicy,
    operation: ParcelOperation,
    caller: Option<&'a RequestContext>,
) -> AppResult<&'a RequestContext> {
    policy.check(operation, caller.is_some())?;
    caller.ok_or_else(|| {
        AppError::unauthorized(format!("Authentication is required to {operation} parcels"))
    })
}

/// Replace the message of a store failure with a user-facing one, keeping
/// the underlying error as the source. Other kinds pass through.
fn store_failure(message: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| {
        if err.is(ErrorKind::Database) {
            AppError::with_source(ErrorKind::Database, message, err)
        } else {
            err
        }
    }
}
