//! `Caller` extractor: the optional identity behind a request.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use std::convert::Infallible;
use tracing::debug;

use parcelhub_service::context::RequestContext;

use crate::state::AppState;

/// The caller identity, if the request carries a valid bearer token.
///
/// Never rejects: a missing, malformed, expired or badly signed token is an
/// anonymous caller, and the access policy decides per operation whether
/// that is acceptable.
#[derive(Debug, Clone, Default)]
pub struct Caller(pub Option<RequestContext>);

impl Caller {
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
        else {
            return Ok(Self(None));
        };

        match state.jwt_decoder.decode(token) {
            Ok(claims) => Ok(Self(RequestContext::from_claims(&claims))),
            Err(e) => {
                debug!(reason = %e.message, "Ignoring invalid bearer token");
                Ok(Self(None))
            }
        }
    }
}
