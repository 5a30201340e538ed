//! # In-Memory Ledger
//!
//! Two-partition ledger store for testing. Batches apply under one write
//! lock, all-or-nothing, mirroring the atomicity the real platform gives a
//! committed transaction.

use crate::errors::StoreError;
use crate::ports::outbound::{LedgerStore, WriteBatch, WriteOp};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// In-memory two-partition ledger for testing.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    /// Confidential partition, keyed by (collection, id).
    confidential: RwLock<HashMap<(String, String), Vec<u8>>>,
    /// Public partition, keyed by id.
    public: RwLock<HashMap<String, Vec<u8>>>,
    /// When set, the next commit is rejected without applying anything.
    fail_next_commit: AtomicBool,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `commit` call fail with a backend error.
    ///
    /// The rejected batch must leave both partitions untouched; tests use
    /// this to verify the handler's unit-of-work behavior.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Direct read of a confidential record (test inspection).
    #[must_use]
    pub fn confidential_record(&self, collection: &str, id: &str) -> Option<Vec<u8>> {
        self.confidential
            .read()
            .unwrap()
            .get(&(collection.to_string(), id.to_string()))
            .cloned()
    }

    /// Direct read of a public projection (test inspection).
    #[must_use]
    pub fn public_record(&self, id: &str) -> Option<Vec<u8>> {
        self.public.read().unwrap().get(id).cloned()
    }

    /// Number of records in the public partition.
    #[must_use]
    pub fn public_len(&self) -> usize {
        self.public.read().unwrap().len()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn get_confidential(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self
            .confidential
            .read()
            .unwrap()
            .get(&(collection.to_string(), id.to_string()))
            .cloned())
    }

    async fn get_public(&self, id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.public.read().unwrap().get(id).cloned())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(StoreError::CommitRejected(
                "injected commit failure".to_string(),
            ));
        }

        // Both locks held for the whole batch: no partial visibility.
        let mut confidential = self.confidential.write().unwrap();
        let mut public = self.public.write().unwrap();
        for op in batch.into_ops() {
            match op {
                WriteOp::ConfidentialPut {
                    collection,
                    id,
                    bytes,
                } => {
                    confidential.insert((collection, id), bytes);
                }
                WriteOp::PublicPut { id, bytes } => {
                    public.insert(id, bytes);
                }
                WriteOp::PublicDelete { id } => {
                    public.remove(&id);
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
