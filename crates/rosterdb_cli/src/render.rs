//! Outcome → text/json string rendering.
//!
//! Two modes:
//! - **Text** (default): fixed-width table, `ok: ...` acknowledgements
//! - **JSON** (`--format json`): `serde_json::to_string_pretty`

use crate::commands::Outcome;
use crate::error::CliError;
use clap::ValueEnum;
use rosterdb_core::{Student, StudentId};
use serde::Serialize;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Human-readable table.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

const HELP: &str = "\
commands:
  add <name> <age> <class>              add a student
  list                                  list all students by id
  remove <id>                           remove by id
  mod <id> <name> <age> <class>         modify by id
  search id <id>                        search by id
  search name <name>                    search by exact name
  order <id|name|age|class> <asc|desc>  ordered view
  help                                  show help
  quit | exit                           leave repl";

const EMPTY: &str = "(empty)";

/// One student as it appears in JSON output.
#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    id: u64,
    name: &'a str,
    age: u8,
    class: &'a str,
}

impl<'a> From<&'a Student> for StudentRow<'a> {
    fn from(s: &'a Student) -> Self {
        Self {
            id: s.id.as_u64(),
            name: &s.name,
            age: s.age,
            class: &s.class_name,
        }
    }
}

/// Acknowledgement of a mutation in JSON output.
#[derive(Debug, Serialize)]
struct Ack {
    ok: &'static str,
    id: u64,
}

/// Returns the help text.
pub fn help() -> &'static str {
    HELP
}

/// Renders a command outcome. `Quit` renders to nothing.
pub fn render_outcome(outcome: &Outcome<'_>, mode: OutputMode) -> Option<String> {
    let text = match (outcome, mode) {
        (Outcome::Quit, _) => return None,
        (Outcome::Help, _) => help().to_owned(),
        (Outcome::Added(id), OutputMode::Text) => format!("ok: added id={id}"),
        (Outcome::Removed(id), OutputMode::Text) => format!("ok: removed id={id}"),
        (Outcome::Modified(id), OutputMode::Text) => format!("ok: modified id={id}"),
        (Outcome::Added(id), OutputMode::Json) => ack("added", *id),
        (Outcome::Removed(id), OutputMode::Json) => ack("removed", *id),
        (Outcome::Modified(id), OutputMode::Json) => ack("modified", *id),
        (Outcome::Rows(rows), OutputMode::Text) => table(rows),
        (Outcome::Rows(rows), OutputMode::Json) => {
            let rows: Vec<StudentRow<'_>> = rows.iter().map(|s| StudentRow::from(*s)).collect();
            to_json(&rows)
        }
    };
    Some(text)
}

/// Renders an error.
pub fn render_error(err: &CliError, mode: OutputMode) -> String {
    match mode {
        OutputMode::Text => err.to_string(),
        OutputMode::Json => to_json(&serde_json::json!({ "error": err.to_string() })),
    }
}

/// Formats rows as a fixed-width table, or `(empty)`.
pub fn table(rows: &[&Student]) -> String {
    if rows.is_empty() {
        return EMPTY.to_owned();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:<4} {:<12} {:<4} {:<12}",
        "id", "name", "age", "class"
    ));
    for s in rows {
        lines.push(format!(
            "{:<4} {:<12} {:<4} {:<12}",
            s.id, s.name, s.age, s.class_name
        ));
    }
    lines.join("\n")
}

fn ack(ok: &'static str, id: StudentId) -> String {
    to_json(&Ack {
        ok,
        id: id.as_u64(),
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
