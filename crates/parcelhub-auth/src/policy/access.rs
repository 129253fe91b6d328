//! Access policy enforcement.

use std::collections::HashSet;

use tracing::debug;

use parcelhub_core::config::AuthConfig;
use parcelhub_core::error::AppError;
use parcelhub_core::result::AppResult;

use super::operation::ParcelOperation;

/// The set of operations that need an authenticated caller.
///
/// Writes are always protected. Reads are public unless configuration
/// tightens them.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    protected: HashSet<ParcelOperation>,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self {
            protected: HashSet::from([
                ParcelOperation::Create,
                ParcelOperation::Update,
                ParcelOperation::Delete,
            ]),
        }
    }
}

impl AccessPolicy {
    /// Build the policy from `auth.*_requires_auth` settings.
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut policy = Self::default();
        if config.list_requires_auth {
            policy.protected.insert(ParcelOperation::List);
        }
        if config.detail_requires_auth {
            policy.protected.insert(ParcelOperation::Detail);
        }
        policy
    }

    pub fn requires_identity(&self, operation: ParcelOperation) -> bool {
        self.protected.contains(&operation)
    }

    /// Fail with `Unauthorized` when a protected operation has no caller.
    pub fn check(&self, operation: ParcelOperation, has_identity: bool) -> AppResult<()> {
        if self.requires_identity(operation) && !has_identity {
            debug!(operation = %operation, "Rejected anonymous caller");
            return Err(AppError::unauthorized(format!(
                "Authentication is required to {operation} parcels"
            )));
        }
        Ok(())
    }
}
