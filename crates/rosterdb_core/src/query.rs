//! Ordered views over student records.

use crate::error::CoreError;
use crate::student::Student;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Student ID.
    Id,
    /// Student name (byte-wise, case-sensitive).
    Name,
    /// Student age.
    Age,
    /// Class label (byte-wise, case-sensitive).
    Class,
}

impl SortField {
    /// Every sortable field.
    pub const ALL: [SortField; 4] = [Self::Id, Self::Name, Self::Age, Self::Class];

    /// Returns the token used to name this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Age => "age",
            Self::Class => "class",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "class" => Ok(Self::Class),
            _ => Err(CoreError::InvalidSortField { field: s.into() }),
        }
    }
}

/// Direction of an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Returns the token used to name this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(CoreError::InvalidSortDirection {
                direction: s.into(),
            }),
        }
    }
}

/// Compares two students by `field`, breaking ties by ID.
///
/// IDs are unique, so this is a total order over live records.
pub fn compare(a: &Student, b: &Student, field: SortField) -> Ordering {
    let primary = match field {
        SortField::Id => Ordering::Equal,
        SortField::Name => a.name.cmp(&b.name),
        SortField::Age => a.age.cmp(&b.age),
        SortField::Class => a.class_name.cmp(&b.class_name),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}

/// Sorts `rows` in place by `field`, then reverses them for [`SortDirection::Desc`].
pub fn sort_students(rows: &mut [&Student], field: SortField, direction: SortDirection) {
    rows.sort_by(|a, b| compare(a, b, field));
    if direction == SortDirection::Desc {
        rows.reverse();
    }
}
