//! Command implementations.
//!
//! Each command runs against the session's store and yields an [`Outcome`]
//! for the renderer. Missing ids surface as
//! [`CoreError::StudentNotFound`](rosterdb_core::CoreError::StudentNotFound).

pub mod add;
pub mod list;
pub mod modify;
pub mod order;
pub mod remove;
pub mod search;

use crate::error::CliResult;
use crate::parse::Command;
use rosterdb_core::{Student, StudentId, StudentStore};

/// What a command produced.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// A student was added under this id.
    Added(StudentId),
    /// The student with this id was removed.
    Removed(StudentId),
    /// The student with this id was modified.
    Modified(StudentId),
    /// Rows to print, in display order.
    Rows(Vec<&'a Student>),
    /// The help text was requested.
    Help,
    /// The session should end.
    Quit,
}

/// Runs a parsed command against `store`.
pub fn execute(store: &mut StudentStore, command: Command) -> CliResult<Outcome<'_>> {
    match command {
        Command::Add {
            name,
            age,
            class_name,
        } => Ok(add::run(store, &name, age, &class_name)),
        Command::List => Ok(list::run(store)),
        Command::Remove { id } => remove::run(store, id),
        Command::Modify {
            id,
            name,
            age,
            class_name,
        } => modify::run(store, id, &name, age, &class_name),
        Command::SearchId { id } => Ok(search::by_id(store, id)),
        Command::SearchName { name } => Ok(search::by_name(store, &name)),
        Command::Order { field, direction } => Ok(order::run(store, field, direction)),
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
    }
}
