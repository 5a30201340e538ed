//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the asset registry handler depends on. The host ledger
//! platform implements these traits to provide:
//! - Partitioned ledger access (confidential + public)
//! - Caller identity resolution
//! - Post-commit event delivery
//!
//! Every operation executes inside exactly ONE ledger transaction owned by
//! the platform. The handler stages its mutations in a [`WriteBatch`] and
//! hands them over in a single [`LedgerStore::commit`] call, so a conflicting
//! concurrent commit fails the whole transaction at the platform layer
//! instead of leaving mixed state.

use crate::errors::{EventSinkError, IdentityError, StoreError};
use async_trait::async_trait;

// =============================================================================
// WRITE BATCH (Unit of Work)
// =============================================================================

/// A single staged mutation against one of the two partitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOp {
    /// Overwrite a confidential record.
    ConfidentialPut {
        /// Private collection the record belongs to.
        collection: String,
        /// Record key.
        id: String,
        /// Encoded record.
        bytes: Vec<u8>,
    },
    /// Overwrite a public projection.
    PublicPut {
        /// Projection key.
        id: String,
        /// Encoded projection.
        bytes: Vec<u8>,
    },
    /// Remove a public projection. Deleting an absent key is not an error.
    PublicDelete {
        /// Projection key.
        id: String,
    },
}

/// All mutations of one operation, committed together or not at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a confidential-partition overwrite.
    pub fn confidential_put(
        &mut self,
        collection: impl Into<String>,
        id: impl Into<String>,
        bytes: Vec<u8>,
    ) -> &mut Self {
        self.ops.push(WriteOp::ConfidentialPut {
            collection: collection.into(),
            id: id.into(),
            bytes,
        });
        self
    }

    /// Stages a public-partition overwrite.
    pub fn public_put(&mut self, id: impl Into<String>, bytes: Vec<u8>) -> &mut Self {
        self.ops.push(WriteOp::PublicPut {
            id: id.into(),
            bytes,
        });
        self
    }

    /// Stages a public-partition delete.
    pub fn public_delete(&mut self, id: impl Into<String>) -> &mut Self {
        self.ops.push(WriteOp::PublicDelete { id: id.into() });
        self
    }

    /// Staged operations, in staging order.
    #[must_use]
    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    /// Number of staged operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Consumes the batch, yielding its operations.
    #[must_use]
    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }
}

// =============================================================================
// PARTITIONED LEDGER STORE
// =============================================================================

/// Access to the two ledger partitions.
///
/// Reads are versioned by the ledger's commit mechanism; the handler never
/// caches across invocations and re-reads every key it touches. Writes go
/// through [`LedgerStore::commit`] only.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Reads a confidential record.
    ///
    /// Returns `None` when no record exists at `id` in `collection`.
    async fn get_confidential(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Vec<u8>>, StoreError>;

    /// Reads a public projection. Returns `None` when absent.
    async fn get_public(&self, id: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Applies every staged operation of `batch`, or none of them.
    ///
    /// Atomicity across the batch is part of the enclosing ledger
    /// transaction; an implementation must not expose a state where only a
    /// prefix of the batch is visible.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}

// =============================================================================
// IDENTITY ORACLE
// =============================================================================

/// Resolves the authenticated caller of the current transaction.
///
/// The returned identity string is stable and unforgeable for the duration
/// of one transaction. Ownership checks compare it to the stored owner with
/// exact string equality; no normalization is applied anywhere.
#[async_trait]
pub trait IdentityOracle: Send + Sync {
    /// The caller's authenticated identity string.
    async fn caller_identity(&self) -> Result<String, IdentityError>;
}

// =============================================================================
// EVENT SINK
// =============================================================================

/// Accepts named events for delivery to external subscribers.
///
/// Delivery is best-effort and happens only if the surrounding transaction
/// ultimately commits; `emit` merely queues.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Queues `payload` under `name`.
    async fn emit(&self, name: &str, payload: Vec<u8>) -> Result<(), EventSinkError>;
}

// =============================================================================
// TESTS
// =============================================================================
