//! Property-based test generators using proptest.
//!
//! Names and classes are drawn from small alphabets so that generated
//! operation sequences collide on names often enough to exercise bucket
//! sharing and pruning.

use proptest::prelude::*;
use rosterdb_core::{SortDirection, SortField, StudentId};

/// Strategy for student names, including case-only variants.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Alice", "alice", "Bob", "Carol", "Dave", "Zoë"])
        .prop_map(str::to_owned)
}

/// Strategy for arbitrary short names.
pub fn free_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z]{1,8}").expect("Invalid regex")
}

/// Strategy for ages across the full `u8` range.
pub fn age_strategy() -> impl Strategy<Value = u8> {
    any::<u8>()
}

/// Strategy for class labels.
pub fn class_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-D][0-9]?").expect("Invalid regex")
}

/// Strategy for IDs that are likely, but not certain, to be live.
pub fn student_id_strategy(max: u64) -> impl Strategy<Value = StudentId> {
    (1..=max).prop_map(StudentId::new)
}

/// Strategy for sort fields.
pub fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

/// Strategy for sort directions.
pub fn sort_direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

/// A single store operation.
#[derive(Debug, Clone)]
pub enum StoreOperation {
    /// Add a student
    Add {
        /// Name
        name: String,
        /// Age
        age: u8,
        /// Class label
        class_name: String,
    },
    /// Remove a student
    Remove {
        /// Student ID
        id: StudentId,
    },
    /// Modify a student
    Modify {
        /// Student ID
        id: StudentId,
        /// New name
        name: String,
        /// New age
        age: u8,
        /// New class label
        class_name: String,
    },
    /// Get a student
    Get {
        /// Student ID
        id: StudentId,
    },
}

/// Strategy for generating store operations against IDs up to `max_id`.
pub fn store_operation_strategy(max_id: u64) -> impl Strategy<Value = StoreOperation> {
    prop_oneof![
        4 => (name_strategy(), age_strategy(), class_strategy())
            .prop_map(|(name, age, class_name)| StoreOperation::Add { name, age, class_name }),
        2 => student_id_strategy(max_id).prop_map(|id| StoreOperation::Remove { id }),
        3 => (student_id_strategy(max_id), name_strategy(), age_strategy(), class_strategy())
            .prop_map(|(id, name, age, class_name)| StoreOperation::Modify {
                id,
                name,
                age,
                class_name,
            }),
        1 => student_id_strategy(max_id).prop_map(|id| StoreOperation::Get { id }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<StoreOperation>> {
    prop::collection::vec(store_operation_strategy(max_ops as u64 + 1), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
