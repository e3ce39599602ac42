//! `remove` command.

use super::Outcome;
use crate::error::CliResult;
use rosterdb_core::{CoreError, StudentId, StudentStore};
use tracing::debug;

/// Removes a student by id.
pub fn run(store: &mut StudentStore, id: StudentId) -> CliResult<Outcome<'_>> {
    if store.remove(id) {
        Ok(Outcome::Removed(id))
    } else {
        debug!(%id, "remove of unknown id");
        Err(CoreError::not_found(id).into())
    }
}
