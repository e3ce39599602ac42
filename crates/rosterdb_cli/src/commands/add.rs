//! `add` command.

use super::Outcome;
use rosterdb_core::StudentStore;

/// Adds a student.
pub fn run<'a>(store: &'a mut StudentStore, name: &str, age: u8, class_name: &str) -> Outcome<'a> {
    Outcome::Added(store.add(name, age, class_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterdb_core::StudentId;

    #[test]
    fn reports_new_id() {
        let mut store = StudentStore::new();
        assert_eq!(run(&mut store, "Alice", 20, "A"), Outcome::Added(StudentId::new(1)));
        assert_eq!(run(&mut store, "Bob", 21, "B"), Outcome::Added(StudentId::new(2)));
    }
}
