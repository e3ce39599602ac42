//! Indexed student store.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::index::{HashIndex, Index};
use crate::query::{self, SortDirection, SortField};
use crate::student::Student;
use crate::types::StudentId;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// In-memory student store with a primary map and two indexes.
///
/// Records live only in `by_id`. The other structures hold IDs:
/// - `ids`: every live ID, ordered, for stable listings
/// - `name_index`: name to the IDs currently carrying that name
///
/// Every mutation updates all three before returning, so between calls the
/// indexes always describe exactly the records in `by_id`.
#[derive(Debug, Clone)]
pub struct StudentStore {
    /// Primary map.
    by_id: HashMap<StudentId, Student>,
    /// Ordered set of live IDs.
    ids: BTreeSet<StudentId>,
    /// Exact-match name index.
    name_index: HashIndex<String>,
    /// ID handed out by the next `add`.
    next_id: StudentId,
}

impl StudentStore {
    /// Creates an empty store whose first record gets ID 1.
    pub fn new() -> Self {
        Self::from_valid_config(&Config::default())
    }

    /// Creates an empty store from `config`.
    pub fn with_config(config: Config) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(&config))
    }

    fn from_valid_config(config: &Config) -> Self {
        Self {
            by_id: HashMap::new(),
            ids: BTreeSet::new(),
            name_index: HashIndex::with_capacity("name", config.name_index_capacity),
            next_id: config.first_student_id(),
        }
    }

    /// Adds a student and returns its newly assigned ID.
    pub fn add(&mut self, name: &str, age: u8, class_name: &str) -> StudentId {
        let id = self.next_id;
        self.next_id = id.next();

        self.by_id.insert(id, Student::new(id, name, age, class_name));
        self.ids.insert(id);
        self.name_index.insert(name.to_owned(), id);

        debug!(%id, name, age, class = class_name, "student added");
        id
    }

    /// Gets a student by ID.
    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.by_id.get(&id)
    }

    /// Checks if a student exists.
    pub fn contains(&self, id: StudentId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Returns all students in ascending ID order.
    pub fn list(&self) -> Vec<&Student> {
        self.ids
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }

    /// Returns every student whose name is exactly `name`, in ascending ID order.
    pub fn search_by_name(&self, name: &str) -> Vec<&Student> {
        self.name_index
            .lookup(&name.to_owned())
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .collect()
    }

    /// Removes a student.
    ///
    /// Returns `false` if no student has this ID.
    pub fn remove(&mut self, id: StudentId) -> bool {
        let Some(removed) = self.by_id.remove(&id) else {
            return false;
        };

        self.ids.remove(&id);
        self.name_index.remove(&removed.name, id);

        debug!(%id, name = %removed.name, "student removed");
        true
    }

    /// Replaces every mutable field of a student.
    ///
    /// A name change moves the ID out of the old name bucket (dropping the
    /// bucket if it empties) and into the new one before the stored name is
    /// overwritten. Returns `false` if no student has this ID.
    pub fn modify(&mut self, id: StudentId, name: &str, age: u8, class_name: &str) -> bool {
        let Some(student) = self.by_id.get_mut(&id) else {
            return false;
        };

        if student.name != name {
            self.name_index.remove(&student.name, id);
            self.name_index.insert(name.to_owned(), id);
            debug!(%id, from = %student.name, to = name, "student renamed");
            student.name = name.to_owned();
        }
        student.age = age;
        student.class_name = class_name.to_owned();

        debug!(%id, age, class = class_name, "student modified");
        true
    }

    /// Returns all students sorted by `field`, ties broken by ID.
    ///
    /// [`SortDirection::Desc`] is exactly the reverse of [`SortDirection::Asc`].
    pub fn ordered(&self, field: SortField, direction: SortDirection) -> Vec<&Student> {
        let mut rows: Vec<&Student> = self.by_id.values().collect();
        query::sort_students(&mut rows, field, direction);
        rows
    }

    /// Returns the number of live students.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if the store holds no students.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Returns the ID the next `add` will assign.
    pub fn next_id(&self) -> StudentId {
        self.next_id
    }

    /// Returns the distinct names of live students in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.name_index
            .keys()
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    /// Cross-checks the primary map against both indexes.
    ///
    /// Returns the first inconsistency found as [`CoreError::IndexCorruption`].
    pub fn verify_integrity(&self) -> CoreResult<()> {
        if self.ids.len() != self.by_id.len() {
            return Err(CoreError::index_corruption(format!(
                "id set holds {} ids but primary map holds {} students",
                self.ids.len(),
                self.by_id.len()
            )));
        }

        for id in &self.ids {
            let student = self.by_id.get(id).ok_or_else(|| {
                CoreError::index_corruption(format!("id {id} is listed but has no record"))
            })?;
            if student.id != *id {
                return Err(CoreError::index_corruption(format!(
                    "record stored under {id} carries id {}",
                    student.id
                )));
            }
            if *id >= self.next_id {
                return Err(CoreError::index_corruption(format!(
                    "id {id} is not below next id {}",
                    self.next_id
                )));
            }
            if !self.name_index.lookup(&student.name).contains(id) {
                return Err(CoreError::index_corruption(format!(
                    "id {id} missing from name bucket {:?}",
                    student.name
                )));
            }
        }

        for (name, bucket) in self.name_index.buckets() {
            if bucket.is_empty() {
                return Err(CoreError::index_corruption(format!(
                    "empty name bucket {name:?}"
                )));
            }
            for id in bucket {
                match self.by_id.get(id) {
                    Some(student) if student.name == *name => {}
                    Some(student) => {
                        return Err(CoreError::index_corruption(format!(
                            "id {id} indexed under {name:?} but named {:?}",
                            student.name
                        )));
                    }
                    None => {
                        return Err(CoreError::index_corruption(format!(
                            "name bucket {name:?} holds dead id {id}"
                        )));
                    }
                }
            }
        }

        if self.name_index.len() != self.by_id.len() {
            return Err(CoreError::index_corruption(format!(
                "name index holds {} ids but primary map holds {} students",
                self.name_index.len(),
                self.by_id.len()
            )));
        }

        Ok(())
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> StudentId {
        StudentId::new(n)
    }

    fn ids(rows: &[&Student]) -> Vec<u64> {
        rows.iter().map(|s| s.id.as_u64()).collect()
    }

    fn scenario() -> StudentStore {
        let mut store = StudentStore::new();
        store.add("Alice", 20, "A");
        store.add("Bob", 21, "B");
        store.add("Alice", 22, "C");
        store
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut store = StudentStore::new();
        assert_eq!(store.add("Alice", 20, "A"), id(1));
        assert_eq!(store.add("Bob", 21, "B"), id(2));
        assert_eq!(store.next_id(), id(3));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn ids_never_reused() {
        let mut store = StudentStore::new();
        let first = store.add("Alice", 20, "A");
        assert!(store.remove(first));

        let second = store.add("Alice", 20, "A");
        assert_eq!(second, id(2));
        assert!(store.get(first).is_none());
    }

    #[test]
    fn config_seeds_first_id() {
        let mut store = StudentStore::with_config(Config::new().first_id(100)).unwrap();
        assert_eq!(store.add("Zoe", 19, "Z"), id(100));

        assert!(StudentStore::with_config(Config::new().first_id(0)).is_err());
    }

    #[test]
    fn get_existing_and_missing() {
        let store = scenario();

        let bob = store.get(id(2)).unwrap();
        assert_eq!(bob, &Student::new(id(2), "Bob", 21, "B"));
        assert!(store.get(id(99)).is_none());
        assert!(store.contains(id(1)));
        assert!(!store.contains(id(99)));
    }

    #[test]
    fn search_by_name_exact() {
        let store = scenario();

        assert_eq!(ids(&store.search_by_name("Alice")), vec![1, 3]);
        assert_eq!(ids(&store.search_by_name("Bob")), vec![2]);
        assert!(store.search_by_name("alice").is_empty());
        assert!(store.search_by_name("Ali").is_empty());
    }

    #[test]
    fn remove_clears_every_structure() {
        let mut store = scenario();

        assert!(store.remove(id(2)));
        assert!(store.get(id(2)).is_none());
        assert!(store.search_by_name("Bob").is_empty());
        assert_eq!(store.names(), vec!["Alice"]);
        assert_eq!(ids(&store.list()), vec![1, 3]);
        store.verify_integrity().unwrap();
    }

    #[test]
    fn remove_missing_is_false() {
        let mut store = scenario();
        assert!(!store.remove(id(42)));
        assert!(store.remove(id(1)));
        assert!(!store.remove(id(1)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_keeps_shared_bucket() {
        let mut store = scenario();

        assert!(store.remove(id(1)));
        assert_eq!(ids(&store.search_by_name("Alice")), vec![3]);
        store.verify_integrity().unwrap();
    }

    #[test]
    fn modify_moves_between_buckets() {
        let mut store = scenario();

        assert!(store.modify(id(2), "Alice", 30, "D"));

        assert!(store.search_by_name("Bob").is_empty());
        assert_eq!(ids(&store.search_by_name("Alice")), vec![1, 2, 3]);
        assert_eq!(store.names(), vec!["Alice"]);
        assert_eq!(store.get(id(2)), Some(&Student::new(id(2), "Alice", 30, "D")));
        store.verify_integrity().unwrap();
    }

    #[test]
    fn modify_same_name_updates_fields() {
        let mut store = scenario();

        assert!(store.modify(id(1), "Alice", 25, "Z"));

        let alice = store.get(id(1)).unwrap();
        assert_eq!(alice.age, 25);
        assert_eq!(alice.class_name, "Z");
        assert_eq!(ids(&store.search_by_name("Alice")), vec![1, 3]);
        store.verify_integrity().unwrap();
    }

    #[test]
    fn modify_missing_is_false() {
        let mut store = scenario();
        let before = store.clone();

        assert!(!store.modify(id(9), "Eve", 30, "E"));
        assert_eq!(store.list(), before.list());
        assert!(store.search_by_name("Eve").is_empty());
    }

    #[test]
    fn list_is_ascending() {
        let mut store = StudentStore::new();
        for name in ["d", "c", "b", "a"] {
            store.add(name, 20, "A");
        }
        store.remove(id(2));
        assert_eq!(ids(&store.list()), vec![1, 3, 4]);
    }

    #[test]
    fn ordered_by_each_field() {
        let mut store = StudentStore::new();
        store.add("Carol", 22, "B");
        store.add("Alice", 22, "A");
        store.add("Bob", 19, "B");

        let by_name = store.ordered(SortField::Name, SortDirection::Asc);
        assert_eq!(ids(&by_name), vec![2, 3, 1]);

        let by_age = store.ordered(SortField::Age, SortDirection::Asc);
        assert_eq!(ids(&by_age), vec![3, 1, 2]);

        let by_class = store.ordered(SortField::Class, SortDirection::Desc);
        assert_eq!(ids(&by_class), vec![3, 1, 2]);

        let by_id = store.ordered(SortField::Id, SortDirection::Desc);
        assert_eq!(ids(&by_id), vec![3, 2, 1]);
    }

    #[test]
    fn scenario_end_to_end() {
        let mut store = scenario();

        assert_eq!(ids(&store.search_by_name("Alice")), vec![1, 3]);
        assert!(store.remove(id(2)));
        assert_eq!(
            store.list(),
            vec![
                &Student::new(id(1), "Alice", 20, "A"),
                &Student::new(id(3), "Alice", 22, "C"),
            ]
        );
        let by_age = store.ordered(SortField::Age, SortDirection::Desc);
        assert_eq!(ids(&by_age), vec![3, 1]);
    }

    #[test]
    fn empty_store() {
        let store = StudentStore::default();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(store.ordered(SortField::Name, SortDirection::Asc).is_empty());
        assert!(store.names().is_empty());
        store.verify_integrity().unwrap();
    }

    #[test]
    fn verify_detects_stale_name_bucket() {
        let mut store = scenario();
        store.name_index.insert("Ghost".to_string(), id(2));

        let err = store.verify_integrity().unwrap_err();
        assert!(matches!(err, CoreError::IndexCorruption { .. }));
    }

    #[test]
    fn verify_detects_missing_id() {
        let mut store = scenario();
        store.ids.remove(&id(3));

        assert!(store.verify_integrity().is_err());
    }
}
