//! # RosterDB Testkit
//!
//! Test utilities for RosterDB.
//!
//! This crate provides:
//! - Fixture stores for common scenarios
//! - Property-based test generators using proptest
//! - A model-checking harness that mirrors every store operation
//!
//! ## Usage
//!
//! ```rust
//! use rosterdb_testkit::prelude::*;
//!
//! let mut harness = StoreHarness::new();
//! harness.add("Alice", 20, "A");
//! harness.verify_all();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod integration;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::integration::*;
}

pub use fixtures::*;
pub use generators::*;
pub use integration::*;
