//! Error types for RosterDB core.

use crate::types::StudentId;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in RosterDB core operations.
///
/// Store operations themselves report absence through `bool` / `Option`;
/// these variants cover the typed boundaries around the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Student not found.
    #[error("id={id} not found")]
    StudentNotFound {
        /// The id that was looked up.
        id: StudentId,
    },

    /// Unknown sort field.
    #[error("invalid field `{field}`")]
    InvalidSortField {
        /// The rejected field name.
        field: String,
    },

    /// Unknown sort direction.
    #[error("invalid direction `{direction}`")]
    InvalidSortDirection {
        /// The rejected direction.
        direction: String,
    },

    /// Configuration rejected by [`Config::validate`](crate::Config::validate).
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },

    /// The primary map and its indexes disagree.
    #[error("index corruption: {message}")]
    IndexCorruption {
        /// Description of the inconsistency.
        message: String,
    },
}

impl CoreError {
    /// Creates a student not found error.
    pub fn not_found(id: StudentId) -> Self {
        Self::StudentNotFound { id }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates an index corruption error.
    pub fn index_corruption(message: impl Into<String>) -> Self {
        Self::IndexCorruption {
            message: message.into(),
        }
    }
}
