//! # Static Identity Oracle
//!
//! Fixed-identity oracle for tests and local simulation. Production
//! deployments resolve the caller from the platform's authenticated
//! transaction context instead.

use crate::errors::IdentityError;
use crate::ports::outbound::IdentityOracle;
use async_trait::async_trait;
use std::sync::RwLock;

/// Identity oracle returning a configurable fixed identity.
#[derive(Debug, Default)]
pub struct StaticIdentity {
    identity: RwLock<Option<String>>,
}

impl StaticIdentity {
    /// Oracle that resolves every call to `identity`.
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: RwLock::new(Some(identity.into())),
        }
    }

    /// Oracle with no identity attached; every resolution fails.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Switches the caller for subsequent operations.
    pub fn set(&self, identity: impl Into<String>) {
        *self.identity.write().unwrap() = Some(identity.into());
    }
}

#[async_trait]
impl IdentityOracle for StaticIdentity {
    async fn caller_identity(&self) -> Result<String, IdentityError> {
        self.identity
            .read()
            .unwrap()
            .clone()
            .ok_or(IdentityError::Missing)
    }
}

// =============================================================================
// TESTS
// =============================================================================
