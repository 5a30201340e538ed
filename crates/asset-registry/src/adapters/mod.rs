//! # Adapters Layer (Outer Hexagon)
//!
//! In-memory implementations of the driven ports, used by tests and local
//! simulation. Production adapters belong to the host ledger platform
//! integration: the store maps to the platform's private/public state APIs,
//! the oracle to its client-identity API, the sink to its event API.

pub mod event_recorder;
pub mod memory_ledger;
pub mod static_identity;

pub use event_recorder::*;
pub use memory_ledger::*;
pub use static_identity::*;
