//! `list` command.

use super::Outcome;
use rosterdb_core::StudentStore;

/// Lists every student by ascending id.
pub fn run(store: &StudentStore) -> Outcome<'_> {
    Outcome::Rows(store.list())
}
