//! Student record.

use crate::types::StudentId;

/// A single student record.
///
/// The `id` is fixed when the record is added; every other field can be
/// replaced through [`StudentStore::modify`](crate::StudentStore::modify).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student {
    /// Store-assigned identifier.
    pub id: StudentId,
    /// Student name, indexed for exact-match search.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Class label.
    pub class_name: String,
}

impl Student {
    /// Creates a student record.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        age: u8,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            class_name: class_name.into(),
        }
    }
}
