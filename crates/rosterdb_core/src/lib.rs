//! # RosterDB Core
//!
//! Indexed in-memory record store for student records.
//!
//! This crate provides:
//! - [`StudentStore`]: primary id map, ordered id set and name index kept in lockstep
//! - [`HashIndex`]: the secondary name index
//! - Ordered views over any record field ([`SortField`], [`SortDirection`])
//! - [`SharedStudentStore`]: a locked handle for callers that need to share a store
//!
//! Nothing is persisted; a store lives exactly as long as its owner.
//!
//! ## Example
//!
//! ```rust
//! use rosterdb_core::{SortDirection, SortField, StudentStore};
//!
//! let mut store = StudentStore::new();
//! let alice = store.add("Alice", 20, "A");
//! store.add("Bob", 21, "B");
//!
//! assert_eq!(store.search_by_name("Alice").len(), 1);
//! assert!(store.remove(alice));
//!
//! let by_age = store.ordered(SortField::Age, SortDirection::Desc);
//! assert_eq!(by_age[0].name, "Bob");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
pub mod index;
pub mod query;
pub mod shared;
mod student;
mod types;

pub use config::{Config, MAX_FIRST_ID};
pub use error::{CoreError, CoreResult};
pub use index::{HashIndex, Index, IndexKey};
pub use query::{SortDirection, SortField};
pub use shared::SharedStudentStore;
pub use student::{Student, StudentStore};
pub use types::StudentId;

/// Crate version, as recorded in the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
