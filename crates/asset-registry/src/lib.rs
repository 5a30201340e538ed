//! # Asset Registry - Private Asset Transaction Handler
//!
//! Transaction logic for a vehicle asset registry running atop a
//! replicated, append-only ledger shared by mutually distrusting
//! organizations. Each asset has two visibility tiers: the full record in
//! an organization-scoped confidential partition, and a reduced listing
//! projection replicated to every peer once the asset is offered for sale.
//!
//! ## Operations
//!
//! | Operation | Authorization | Writes |
//! |-----------|---------------|--------|
//! | `register_asset` | registration policy | confidential record |
//! | `list_for_sale` | owner only | public projection |
//! | `transfer_ownership` | owner only | confidential record + public delete, one batch |
//!
//! ## Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | 1 | Owner identity never leaves the confidential partition | `domain/entities.rs` - `Asset::to_listing()`, `events.rs` - `CarRegisteredPayload` |
//! | 2 | Only the stored owner may list or transfer | `service.rs` - `ensure_owner()` |
//! | 3 | Bids are cleared whenever ownership changes | `domain/entities.rs` - `Asset::transfer_to()` |
//! | 4 | Multi-partition writes commit together or not at all | `ports/outbound.rs` - `WriteBatch`, `LedgerStore::commit()` |
//! | 5 | No state retained between invocations | `service.rs` - every operation re-reads the store |
//!
//! ## External Collaborators
//!
//! Consensus/ordering, private-data dissemination, certificate
//! infrastructure, transport, and bootstrap all belong to the host ledger
//! platform, consumed through the driven ports in [`ports::outbound`].
//!
//! ## Usage Example
//!
//! ```ignore
//! use asset_registry::prelude::*;
//!
//! let service = create_test_service("orgA.alice");
//! service
//!     .register_asset("CAR1", "Acme", "Roadster", "CH-0001", "blue", "orgA.alice", 2021)
//!     .await?;
//! service.list_for_sale("CAR1", 5000).await?;
//! service.transfer_ownership("CAR1", "orgB.carol").await?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{Asset, AssetListing, Bid, CONFIDENTIAL_COLLECTION};

    // Events
    pub use crate::events::{event_names, CarRegisteredPayload};

    // Errors
    pub use crate::errors::{EventSinkError, IdentityError, RegistryError, StoreError};

    // Ports
    pub use crate::ports::inbound::AssetRegistry;
    pub use crate::ports::outbound::{
        EventSink, IdentityOracle, LedgerStore, WriteBatch, WriteOp,
    };

    // Adapters
    pub use crate::adapters::{
        InMemoryLedger, RecordedEvent, RecordingEventSink, StaticIdentity,
    };

    // Service
    pub use crate::service::{
        create_test_service, AssetRegistryService, RegistrationPolicy, ServiceConfig,
        ServiceStats,
    };
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Component name.
pub const COMPONENT_NAME: &str = "Asset Registry Handler";

// =============================================================================
// TESTS
// =============================================================================
