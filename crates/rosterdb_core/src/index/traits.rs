//! Index traits and key types.

use crate::types::StudentId;
use std::hash::Hash;

/// A key that can be indexed.
///
/// Index keys must be hashable for bucket lookup and orderable so that
/// listings of indexed keys are deterministic.
pub trait IndexKey: Clone + Eq + Hash + Ord + Send + Sync + 'static {}

impl<T> IndexKey for T where T: Clone + Eq + Hash + Ord + Send + Sync + 'static {}

/// Core index trait.
///
/// An index maps a key to the set of student IDs currently carrying it.
/// Keys with no IDs left are never retained.
pub trait Index<K: IndexKey>: Send + Sync {
    /// Returns the index name used in diagnostics.
    fn name(&self) -> &str;

    /// Inserts a key-student mapping.
    ///
    /// Returns `false` if the mapping was already present.
    fn insert(&mut self, key: K, id: StudentId) -> bool;

    /// Removes a key-student mapping, dropping the key once its set is empty.
    ///
    /// Returns `false` if the mapping was not present.
    fn remove(&mut self, key: &K, id: StudentId) -> bool;

    /// Looks up students by exact key, in ascending ID order.
    fn lookup(&self, key: &K) -> Vec<StudentId>;

    /// Checks if the index contains a key.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of key-student mappings in the index.
    fn len(&self) -> usize;

    /// Returns true if the index is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the index.
    fn clear(&mut self);
}
