//! Hash index implementation.

use crate::index::traits::{Index, IndexKey};
use crate::types::StudentId;
use std::collections::{BTreeSet, HashMap};
use tracing::trace;

/// Hash-based index for O(1) equality lookups.
///
/// `HashIndex` stores a mapping from key to the set of student IDs that
/// share it (non-unique index). Each bucket keeps its IDs ordered, so a
/// lookup always comes back in ascending ID order.
///
/// Empty buckets are pruned on removal: a key is present in the index
/// exactly when at least one student carries it.
///
/// # Example
///
/// ```rust
/// use rosterdb_core::{HashIndex, Index, StudentId};
///
/// let mut index: HashIndex<String> = HashIndex::new("name");
/// index.insert("alice".to_string(), StudentId::new(1));
///
/// assert_eq!(index.lookup(&"alice".to_string()), vec![StudentId::new(1)]);
///
/// index.remove(&"alice".to_string(), StudentId::new(1));
/// assert!(!index.contains(&"alice".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct HashIndex<K: IndexKey> {
    /// Index name.
    name: &'static str,
    /// Key to student IDs mapping.
    entries: HashMap<K, BTreeSet<StudentId>>,
    /// Total mapping count.
    count: usize,
}

impl<K: IndexKey> HashIndex<K> {
    /// Creates a new hash index.
    pub fn new(name: &'static str) -> Self {
        Self::with_capacity(name, 0)
    }

    /// Creates a hash index pre-sized for `capacity` distinct keys.
    pub fn with_capacity(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            entries: HashMap::with_capacity(capacity),
            count: 0,
        }
    }

    /// Rebuilds the index from a set of key-student pairs.
    pub fn rebuild<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, StudentId)>,
    {
        self.clear();
        for (key, id) in entries {
            self.insert(key, id);
        }
    }

    /// Returns the indexed keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.entries.keys().collect();
        keys.sort();
        keys
    }

    /// Returns the number of distinct keys.
    pub fn bucket_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over every bucket.
    pub(crate) fn buckets(&self) -> impl Iterator<Item = (&K, &BTreeSet<StudentId>)> {
        self.entries.iter()
    }
}

impl<K: IndexKey> Index<K> for HashIndex<K> {
    fn name(&self) -> &str {
        self.name
    }

    fn insert(&mut self, key: K, id: StudentId) -> bool {
        let inserted = self.entries.entry(key).or_default().insert(id);
        if inserted {
            self.count += 1;
        }
        inserted
    }

    fn remove(&mut self, key: &K, id: StudentId) -> bool {
        let Some(set) = self.entries.get_mut(key) else {
            return false;
        };
        if !set.remove(&id) {
            return false;
        }
        self.count -= 1;
        if set.is_empty() {
            self.entries.remove(key);
            trace!(index = self.name, %id, "pruned empty bucket");
        }
        true
    }

    fn lookup(&self, key: &K) -> Vec<StudentId> {
        match self.entries.get(key) {
            Some(set) => set.iter().copied().collect(),
            None => Vec::new(),
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    fn len(&self) -> usize {
        self.count
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.count = 0;
    }
}
