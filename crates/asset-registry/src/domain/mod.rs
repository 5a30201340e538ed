//! # Domain Layer (Inner Hexagon)
//!
//! Pure record types for the asset registry.
//! NO I/O, NO async, NO external collaborators.
//!
//! All types here are plain data: the confidential vehicle record, the bid
//! entries attached to it, and the reduced listing projection that is safe
//! to replicate to every peer. Adapters and the service depend on this
//! module, never the other way around.

pub mod entities;

pub use entities::*;
