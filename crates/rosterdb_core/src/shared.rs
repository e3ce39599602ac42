//! Shared handle over a single store.
//!
//! [`StudentStore`] itself does no locking. When a store has to be reached
//! from more than one place at once, wrap it in a [`SharedStudentStore`]:
//! one exclusive lock guards the primary map and both indexes for the whole
//! of each operation, so no caller ever sees a rename half applied.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::query::{SortDirection, SortField};
use crate::student::{Student, StudentStore};
use crate::types::StudentId;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-guarded handle to a [`StudentStore`].
///
/// Reads return owned records since borrows cannot outlive the lock.
#[derive(Debug, Clone, Default)]
pub struct SharedStudentStore {
    inner: Arc<Mutex<StudentStore>>,
}

impl SharedStudentStore {
    /// Wraps an existing store.
    pub fn new(store: StudentStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Creates a shared empty store from `config`.
    pub fn with_config(config: Config) -> CoreResult<Self> {
        Ok(Self::new(StudentStore::with_config(config)?))
    }

    /// Runs `f` with the lock held.
    ///
    /// Useful for compound reads that must observe one consistent state.
    pub fn with<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut StudentStore) -> T,
    {
        f(&mut *self.inner.lock())
    }

    /// Adds a student. See [`StudentStore::add`].
    pub fn add(&self, name: &str, age: u8, class_name: &str) -> StudentId {
        self.inner.lock().add(name, age, class_name)
    }

    /// Gets a copy of a student.
    pub fn get(&self, id: StudentId) -> Option<Student> {
        self.inner.lock().get(id).cloned()
    }

    /// Gets a copy of a student, or [`CoreError::StudentNotFound`].
    pub fn require(&self, id: StudentId) -> CoreResult<Student> {
        self.get(id).ok_or_else(|| CoreError::not_found(id))
    }

    /// Lists copies of all students in ascending ID order.
    pub fn list(&self) -> Vec<Student> {
        self.inner.lock().list().into_iter().cloned().collect()
    }

    /// Returns copies of all students named exactly `name`.
    pub fn search_by_name(&self, name: &str) -> Vec<Student> {
        self.inner
            .lock()
            .search_by_name(name)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Removes a student. See [`StudentStore::remove`].
    pub fn remove(&self, id: StudentId) -> bool {
        self.inner.lock().remove(id)
    }

    /// Modifies a student. See [`StudentStore::modify`].
    pub fn modify(&self, id: StudentId, name: &str, age: u8, class_name: &str) -> bool {
        self.inner.lock().modify(id, name, age, class_name)
    }

    /// Returns copies of all students in the requested order.
    pub fn ordered(&self, field: SortField, direction: SortDirection) -> Vec<Student> {
        self.inner
            .lock()
            .ordered(field, direction)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns the number of live students.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the store holds no students.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs [`StudentStore::verify_integrity`] under the lock.
    pub fn verify_integrity(&self) -> CoreResult<()> {
        self.inner.lock().verify_integrity()
    }
}
