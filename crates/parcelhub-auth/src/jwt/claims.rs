//! JWT claims carried by bearer tokens.

use serde::{Deserialize, Serialize};

use parcelhub_entity::user::UserRole;

/// Claims payload of an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id, as a decimal string.
    pub sub: String,
    /// User role at the time of issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// The user id named by `sub`, if it is numeric.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
