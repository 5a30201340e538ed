//! # Event Schema
//!
//! Typed payloads for the events the handler queues on the ledger's event
//! sink. Delivery to external subscribers is best-effort and happens only
//! if the surrounding transaction commits; the handler's responsibility
//! ends at queueing.
//!
//! Payloads are explicit structs per event name, encoded as field-tagged
//! JSON. The registration payload deliberately omits the owner identity:
//! events are visible outside the confidential partition.

use crate::domain::entities::Asset;
use serde::{Deserialize, Serialize};

// =============================================================================
// EVENT NAMES
// =============================================================================

/// Event names as seen by external subscribers.
pub mod event_names {
    /// Emitted after a successful asset registration.
    pub const CAR_REGISTERED: &str = "CarRegistered";
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Payload of the [`event_names::CAR_REGISTERED`] event.
///
/// Carries exactly the non-confidential registration fields. NO `owner`
/// field: owner identity never leaves the confidential partition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRegisteredPayload {
    /// Asset identifier.
    pub id: String,
    /// Manufacturer.
    pub company: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Chassis / serial number.
    pub chassis_no: String,
    /// Color.
    pub color: String,
}

impl CarRegisteredPayload {
    /// Derives the payload from a freshly registered record.
    #[must_use]
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            company: asset.company.clone(),
            model: asset.model.clone(),
            year: asset.year,
            chassis_no: asset.chassis_no.clone(),
            color: asset.color.clone(),
        }
    }

    /// Encodes the payload as field-tagged JSON.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes a payload from field-tagged JSON.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

// =============================================================================
// TESTS
// =============================================================================
