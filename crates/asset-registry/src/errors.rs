//! # Error Types
//!
//! All error types for the asset registry handler.
//!
//! Collaborator failures keep their own enums ([`StoreError`],
//! [`IdentityError`], [`EventSinkError`]); the operations surface a single
//! [`RegistryError`] to the invoking transaction layer. Nothing is retried
//! here: retry, if any, belongs to the transaction-submission layer.

use thiserror::Error;

// =============================================================================
// REGISTRY ERRORS
// =============================================================================

/// Errors returned by the three state-transition operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No confidential record at the given identifier.
    ///
    /// Also covers a failed confidential *read*: the handler cannot tell a
    /// missing record from one it is not permitted to see, so both collapse
    /// into not-found.
    #[error("asset not found in private collection: {id}")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },

    /// Caller identity does not satisfy the operation's ownership rule.
    #[error("unauthorized: {reason}")]
    Unauthorized {
        /// Which rule was violated (never echoes the stored owner).
        reason: String,
    },

    /// Record or payload could not be encoded/decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying ledger write/delete/commit failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Caller identity could not be resolved for this transaction.
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Event could not be queued for post-commit delivery.
    #[error("event sink error: {0}")]
    EventSink(#[from] EventSinkError),
}

impl RegistryError {
    /// Returns true if the failure was an ownership/authorization rejection.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Returns true if no confidential record was found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Errors from the partitioned ledger store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Store is unreachable.
    #[error("ledger store unavailable")]
    Unavailable,

    /// The ledger refused the staged write batch.
    #[error("commit rejected: {0}")]
    CommitRejected(String),

    /// Backend-specific failure.
    #[error("backend error: {0}")]
    Backend(String),
}

// =============================================================================
// IDENTITY ERRORS
// =============================================================================

/// Errors from the identity oracle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// No authenticated identity is attached to the current transaction.
    #[error("no caller identity attached to transaction")]
    Missing,

    /// The oracle failed while resolving the caller.
    #[error("caller identity could not be resolved: {0}")]
    Unresolved(String),
}

// =============================================================================
// EVENT SINK ERRORS
// =============================================================================

/// Errors from the post-commit event sink.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventSinkError {
    /// The sink refused the event.
    #[error("event rejected: {0}")]
    Rejected(String),

    /// The sink is no longer accepting events.
    #[error("event sink closed")]
    Closed,
}

// =============================================================================
// TESTS
// =============================================================================
