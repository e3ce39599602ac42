//! `mod` command.

use super::Outcome;
use crate::error::CliResult;
use rosterdb_core::{CoreError, StudentId, StudentStore};
use tracing::debug;

/// Replaces name, age and class of a student.
pub fn run<'a>(
    store: &'a mut StudentStore,
    id: StudentId,
    name: &str,
    age: u8,
    class_name: &str,
) -> CliResult<Outcome<'a>> {
    if store.modify(id, name, age, class_name) {
        Ok(Outcome::Modified(id))
    } else {
        debug!(%id, "modify of unknown id");
        Err(CoreError::not_found(id).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifies_existing_only() {
        let mut store = StudentStore::new();
        let id = store.add("Alice", 20, "A");

        assert_eq!(
            run(&mut store, id, "Alicia", 21, "B").unwrap(),
            Outcome::Modified(id)
        );
        assert_eq!(store.get(id).unwrap().name, "Alicia");
        assert!(run(&mut store, StudentId::new(99), "X", 1, "X").is_err());
    }
}
