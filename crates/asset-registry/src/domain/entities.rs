//! # Core Domain Entities
//!
//! The confidential vehicle record, its bids, and the public listing
//! projection. These are the only representations the handler ever writes
//! to the ledger.
//!
//! ## Visibility Tiers
//!
//! | Type | Partition | Contains owner/bids |
//! |------|-----------|---------------------|
//! | [`Asset`] | confidential (org-scoped) | yes |
//! | [`AssetListing`] | public (replicated to all peers) | no |
//!
//! Records are encoded as field-tagged JSON. `price` and `bids` are elided
//! when zero/empty and decode back to their zero values when absent.

use serde::{Deserialize, Serialize};

/// Name of the organization-scoped collection holding confidential records.
pub const CONFIDENTIAL_COLLECTION: &str = "CarCollection";

fn price_is_zero(price: &i64) -> bool {
    *price == 0
}

// =============================================================================
// CONFIDENTIAL RECORD
// =============================================================================

/// The full vehicle record.
///
/// Stored ONLY in the confidential partition, keyed by `id`. The `owner`
/// and `bids` fields never leave that partition: the public projection and
/// every event payload are derived without them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Caller-assigned identifier, stable for the asset's lifetime.
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
    /// Authenticated identity string of the current owner.
    pub owner: String,
    /// Whether the asset is offered for sale.
    pub for_sale: bool,
    /// Asking price. Meaningful only while `for_sale` is set; zero is
    /// elided on encode and restored on decode.
    #[serde(default, skip_serializing_if = "price_is_zero")]
    pub price: i64,
    /// Bids received while listed. Empty is elided on encode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bids: Vec<Bid>,
}

/// A single bid against a listed asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    /// Authenticated identity of the bidder.
    pub bidder: String,
    /// Offered amount.
    pub amount: i64,
}

impl Asset {
    /// Builds a freshly registered record: not for sale, no price, no bids.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn registered(
        id: impl Into<String>,
        company: impl Into<String>,
        model: impl Into<String>,
        chassis_no: impl Into<String>,
        color: impl Into<String>,
        owner: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            company: company.into(),
            model: model.into(),
            year,
            chassis_no: chassis_no.into(),
            color: color.into(),
            owner: owner.into(),
            for_sale: false,
            price: 0,
            bids: Vec::new(),
        }
    }

    /// Marks the record as listed at the given price.
    ///
    /// Mutates only the in-memory copy; whether the change is persisted
    /// (and to which partition) is the caller's decision.
    pub fn mark_for_sale(&mut self, price: i64) {
        self.for_sale = true;
        self.price = price;
    }

    /// Hands the record to a new owner: sale state reset, bids cleared.
    pub fn transfer_to(&mut self, new_owner: impl Into<String>) {
        self.owner = new_owner.into();
        self.for_sale = false;
        self.price = 0;
        self.bids.clear();
    }

    /// Derives the public projection: every field except `owner` and `bids`.
    #[must_use]
    pub fn to_listing(&self) -> AssetListing {
        AssetListing {
            id: self.id.clone(),
            company: self.company.clone(),
            model: self.model.clone(),
            year: self.year,
            chassis_no: self.chassis_no.clone(),
            color: self.color.clone(),
            for_sale: self.for_sale,
            price: self.price,
        }
    }

    /// Encodes the record as field-tagged JSON.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes a record from field-tagged JSON.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

// =============================================================================
// PUBLIC PROJECTION
// =============================================================================

/// The reduced, globally visible view of a listed asset.
///
/// Written to the public partition when an owner lists the asset for sale,
/// deleted again when ownership transfers. Deliberately excludes `owner`
/// and `bids`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetListing {
    /// Asset identifier (same key as the confidential record).
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
    /// Always `true` for a projection written by a listing.
    pub for_sale: bool,
    /// Asking price. Zero is elided on encode.
    #[serde(default, skip_serializing_if = "price_is_zero")]
    pub price: i64,
}

impl AssetListing {
    /// Encodes the projection as field-tagged JSON.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Decodes a projection from field-tagged JSON.
    pub fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

// =============================================================================
// TESTS
// =============================================================================
