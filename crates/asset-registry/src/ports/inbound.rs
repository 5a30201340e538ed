//! # Driving Port (API - Inbound)
//!
//! The operations the host runtime invokes against the handler, one ledger
//! transaction per call. Each operation reads, validates ownership,
//! computes new state, stages writes, optionally queues an event, and
//! returns success or a typed failure. No background work, no retries.

use crate::errors::RegistryError;
use async_trait::async_trait;

/// The three state transitions of the asset registry.
#[async_trait]
pub trait AssetRegistry: Send + Sync {
    /// Creates the confidential record for a new asset.
    ///
    /// Overwrites any existing record at `id` unconditionally; supplying a
    /// fresh identifier is the caller's responsibility. Queues a
    /// `CarRegistered` event on success.
    #[allow(clippy::too_many_arguments)]
    async fn register_asset(
        &self,
        id: &str,
        company: &str,
        model: &str,
        chassis_no: &str,
        color: &str,
        owner: &str,
        year: i32,
    ) -> Result<(), RegistryError>;

    /// Publishes the public projection of an asset at the given price.
    ///
    /// Owner-only. The projection overwrites any prior one at `id`; the
    /// confidential record itself is left untouched on disk.
    async fn list_for_sale(&self, id: &str, price: i64) -> Result<(), RegistryError>;

    /// Hands the asset to `new_owner` and retracts its public projection.
    ///
    /// Owner-only. The confidential rewrite and the projection delete are
    /// committed as one batch.
    async fn transfer_ownership(&self, id: &str, new_owner: &str) -> Result<(), RegistryError>;
}
