//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions for the asset registry handler.
//! These are the interfaces between the handler and the ledger platform.
//!
//! - **Driving Port (Inbound)**: [`inbound::AssetRegistry`]
//! - **Driven Ports (Outbound)**: [`outbound::LedgerStore`],
//!   [`outbound::IdentityOracle`], [`outbound::EventSink`]
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
