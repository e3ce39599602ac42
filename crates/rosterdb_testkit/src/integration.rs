//! Model-checking harness.
//!
//! [`StoreHarness`] drives a [`StudentStore`] and a plain `BTreeMap` model
//! side by side, asserting after each call that the store answered the
//! way the model says it should.

use crate::generators::StoreOperation;
use rosterdb_core::{SortDirection, SortField, Student, StudentId, StudentStore};
use std::collections::BTreeMap;

/// A test harness pairing a store with a reference model.
pub struct StoreHarness {
    /// The store under test.
    pub store: StudentStore,
    /// Expected live records.
    model: BTreeMap<StudentId, Student>,
    /// Highest ID returned by `add` so far.
    last_issued: Option<StudentId>,
}

impl StoreHarness {
    /// Creates a harness over an empty store.
    pub fn new() -> Self {
        Self {
            store: StudentStore::new(),
            model: BTreeMap::new(),
            last_issued: None,
        }
    }

    /// Adds a student, checking the new ID is fresh and increasing.
    pub fn add(&mut self, name: &str, age: u8, class_name: &str) -> StudentId {
        let id = self.store.add(name, age, class_name);
        if let Some(last) = self.last_issued {
            assert!(id > last, "id {id} not above previous {last}");
        }
        assert!(!self.model.contains_key(&id), "id {id} reused");
        self.last_issued = Some(id);
        self.model.insert(id, Student::new(id, name, age, class_name));
        id
    }

    /// Removes a student and checks the index no longer references it.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let old = self.model.remove(&id);
        let removed = self.store.remove(id);
        assert_eq!(removed, old.is_some(), "remove({id}) disagrees with model");

        if let Some(old) = old {
            assert!(self.store.get(id).is_none());
            assert!(
                self.store.search_by_name(&old.name).iter().all(|s| s.id != id),
                "id {id} still in bucket {:?}",
                old.name
            );
        }
        removed
    }

    /// Modifies a student and checks it moved between name buckets.
    pub fn modify(&mut self, id: StudentId, name: &str, age: u8, class_name: &str) -> bool {
        let modified = self.store.modify(id, name, age, class_name);
        let Some(entry) = self.model.get_mut(&id) else {
            assert!(!modified, "modify({id}) succeeded on unknown id");
            return false;
        };
        assert!(modified, "modify({id}) failed on live id");

        let old_name = std::mem::replace(&mut entry.name, name.to_owned());
        entry.age = age;
        entry.class_name = class_name.to_owned();

        let hits = self
            .store
            .search_by_name(name)
            .iter()
            .filter(|s| s.id == id)
            .count();
        assert_eq!(hits, 1, "id {id} not exactly once under {name:?}");
        if old_name != name {
            assert!(
                self.store
                    .search_by_name(&old_name)
                    .iter()
                    .all(|s| s.id != id),
                "id {id} left behind under {old_name:?}"
            );
        }
        true
    }

    /// Gets a student and checks it matches the model.
    pub fn get_and_verify(&self, id: StudentId) -> Option<&Student> {
        let actual = self.store.get(id);
        assert_eq!(actual, self.model.get(&id), "get({id}) disagrees with model");
        actual
    }

    /// Applies a generated operation.
    pub fn apply(&mut self, op: &StoreOperation) {
        match op {
            StoreOperation::Add {
                name,
                age,
                class_name,
            } => {
                self.add(name, *age, class_name);
            }
            StoreOperation::Remove { id } => {
                self.remove(*id);
            }
            StoreOperation::Modify {
                id,
                name,
                age,
                class_name,
            } => {
                self.modify(*id, name, *age, class_name);
            }
            StoreOperation::Get { id } => {
                self.get_and_verify(*id);
            }
        }
    }

    /// Verifies the whole store against the model.
    pub fn verify_all(&self) {
        if let Err(err) = self.store.verify_integrity() {
            panic!("integrity check failed: {err}");
        }

        let listed: Vec<&Student> = self.store.list();
        let expected: Vec<&Student> = self.model.values().collect();
        assert_eq!(listed, expected, "list() disagrees with model");

        let mut names: Vec<&str> = self.model.values().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(self.store.names(), names, "name index keys disagree with model");

        for name in names {
            let found: Vec<StudentId> =
                self.store.search_by_name(name).iter().map(|s| s.id).collect();
            let expected: Vec<StudentId> = self
                .model
                .values()
                .filter(|s| s.name == name)
                .map(|s| s.id)
                .collect();
            assert_eq!(found, expected, "search_by_name({name:?}) disagrees with model");
        }

        for field in SortField::ALL {
            let asc = self.store.ordered(field, SortDirection::Asc);
            let mut desc = self.store.ordered(field, SortDirection::Desc);
            assert_eq!(asc.len(), self.model.len());
            desc.reverse();
            assert_eq!(asc, desc, "desc is not reversed asc for {field}");
        }
    }

    /// Returns the count of tracked students.
    pub fn tracked_count(&self) -> usize {
        self.model.len()
    }
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}
