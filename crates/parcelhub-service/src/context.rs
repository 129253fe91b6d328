//! Request context carrying the caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parcelhub_auth::jwt::Claims;
use parcelhub_entity::user::UserRole;

/// The authenticated caller of a request.
///
/// Built by the API layer from a validated bearer token and passed into
/// service methods. Services receive `Option<&RequestContext>`; `None` means
/// an anonymous caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The caller's user id, used as the teller id.
    pub user_id: i64,
    /// Role claimed by the token.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user_id: i64, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Build a context from validated claims. `None` if `sub` is not a
    /// user id.
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        claims.user_id().map(|id| Self::new(id, claims.role))
    }
}
