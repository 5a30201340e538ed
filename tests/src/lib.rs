//! # Asset Registry Test Suite
//!
//! Unified test crate for flows that cross the handler's layers.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── marketplace_flow.rs    # register → list → transfer lifecycles
//!     └── registration_policy.rs # configurable registration authorization
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p registry-tests
//!
//! # By category
//! cargo test -p registry-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
