//! Cross-layer integration flows for the asset registry handler.

pub mod marketplace_flow;
pub mod registration_policy;
