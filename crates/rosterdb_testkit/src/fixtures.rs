//! Fixture stores for tests.

use rosterdb_core::StudentStore;

/// Names cycled through by [`populated_store`].
pub const SAMPLE_NAMES: [&str; 5] = ["Alice", "Bob", "Carol", "Dave", "Eve"];

/// Class labels cycled through by [`populated_store`].
pub const SAMPLE_CLASSES: [&str; 3] = ["A", "B", "C"];

/// Returns the three-record reference scenario.
///
/// | id | name  | age | class |
/// |----|-------|-----|-------|
/// | 1  | Alice | 20  | A     |
/// | 2  | Bob   | 21  | B     |
/// | 3  | Alice | 22  | C     |
pub fn scenario_store() -> StudentStore {
    let mut store = StudentStore::new();
    store.add("Alice", 20, "A");
    store.add("Bob", 21, "B");
    store.add("Alice", 22, "C");
    store
}

/// Returns a store with `count` students whose names, ages and classes
/// repeat, so every ordering has ties to break.
pub fn populated_store(count: usize) -> StudentStore {
    let mut store = StudentStore::new();
    for i in 0..count {
        store.add(
            SAMPLE_NAMES[i % SAMPLE_NAMES.len()],
            18 + (i % 7) as u8,
            SAMPLE_CLASSES[i % SAMPLE_CLASSES.len()],
        );
    }
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_shape() {
        let store = scenario_store();
        assert_eq!(store.len(), 3);
        assert_eq!(store.search_by_name("Alice").len(), 2);
    }

    #[test]
    fn populated_has_duplicates() {
        let store = populated_store(20);
        assert_eq!(store.len(), 20);
        assert_eq!(store.names().len(), SAMPLE_NAMES.len());
        store.verify_integrity().unwrap();
    }
}
