//! Secondary indexes over student records.
//!
//! Indexes are internal access paths kept in lockstep with the primary
//! record map by [`StudentStore`](crate::StudentStore). They are:
//! - Maintained on every mutation, never lazily
//! - Fully derivable from the primary map (see [`HashIndex::rebuild`])
//!
//! # Index Types
//!
//! - [`HashIndex`]: O(1) equality lookup, used for the name index

mod hash;
mod traits;

pub use hash::HashIndex;
pub use traits::{Index, IndexKey};
