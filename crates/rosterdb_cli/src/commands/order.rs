//! `order` command.

use super::Outcome;
use rosterdb_core::{SortDirection, SortField, StudentStore};

/// Lists every student ordered by `field`.
pub fn run(store: &StudentStore, field: SortField, direction: SortDirection) -> Outcome<'_> {
    Outcome::Rows(store.ordered(field, direction))
}
