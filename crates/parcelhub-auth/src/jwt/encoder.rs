//! JWT token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use parcelhub_core::config::AuthConfig;
use parcelhub_core::error::AppError;
use parcelhub_core::result::AppResult;
use parcelhub_entity::user::UserRole;

use super::claims::Claims;

/// Signs HS256 access tokens.
///
/// ParcelHub does not log users in itself; the encoder exists for the
/// identity collaborator and for tests that need a caller.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl JwtEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.jwt_access_ttl_minutes as i64),
        }
    }

    /// Issue an access token for a user with the configured lifetime.
    pub fn issue(&self, user_id: i64, role: UserRole) -> AppResult<String> {
        self.issue_with_ttl(user_id, role, self.access_ttl)
    }

    /// Issue an access token with an explicit lifetime. A negative `ttl`
    /// yields an already expired token.
    pub fn issue_with_ttl(&self, user_id: i64, role: UserRole, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}
