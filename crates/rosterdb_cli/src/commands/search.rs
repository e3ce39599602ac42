//! `search` command.

use super::Outcome;
use rosterdb_core::{StudentId, StudentStore};

/// Looks up one student by id. A missing id yields no rows.
pub fn by_id(store: &StudentStore, id: StudentId) -> Outcome<'_> {
    Outcome::Rows(store.get(id).into_iter().collect())
}

/// Finds every student with exactly this name.
pub fn by_name<'a>(store: &'a StudentStore, name: &str) -> Outcome<'a> {
    Outcome::Rows(store.search_by_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_is_empty() {
        let store = StudentStore::new();
        assert_eq!(by_id(&store, StudentId::new(1)), Outcome::Rows(Vec::new()));
    }

    #[test]
    fn name_matches_exactly() {
        let mut store = StudentStore::new();
        store.add("Alice", 20, "A");
        store.add("alice", 20, "A");

        let Outcome::Rows(rows) = by_name(&store, "Alice") else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, StudentId::new(1));
    }
}
