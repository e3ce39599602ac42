//! Store configuration.

use crate::error::{CoreError, CoreResult};
use crate::types::StudentId;

/// Largest accepted `first_id`; half the id space stays free for allocation.
pub const MAX_FIRST_ID: u64 = u64::MAX / 2;

/// Configuration for creating a store.
#[derive(Debug, Clone)]
pub struct Config {
    /// ID assigned to the first record added.
    pub first_id: u64,

    /// Number of distinct names to pre-size the name index for.
    pub name_index_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_id: 1,
            name_index_capacity: 0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ID assigned to the first record.
    #[must_use]
    pub const fn first_id(mut self, id: u64) -> Self {
        self.first_id = id;
        self
    }

    /// Sets the initial name index capacity.
    #[must_use]
    pub const fn name_index_capacity(mut self, capacity: usize) -> Self {
        self.name_index_capacity = capacity;
        self
    }

    /// Checks that the configuration can seed a store.
    pub fn validate(&self) -> CoreResult<()> {
        if self.first_id == 0 {
            return Err(CoreError::invalid_config("first_id must be at least 1"));
        }
        if self.first_id > MAX_FIRST_ID {
            return Err(CoreError::invalid_config(format!(
                "first_id must be at most {MAX_FIRST_ID}"
            )));
        }
        Ok(())
    }

    pub(crate) const fn first_student_id(&self) -> StudentId {
        StudentId::new(self.first_id)
    }
}
