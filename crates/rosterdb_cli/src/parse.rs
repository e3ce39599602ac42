//! Shell line → [`Command`] parsing.
//!
//! Lines are split on whitespace, so names and class labels are single
//! tokens. Argument counts are checked before any argument is parsed.

use crate::error::{CliError, CliResult};
use rosterdb_core::{SortDirection, SortField, StudentId};

pub const ADD_USAGE: &str = "usage: add <name> <age> <class>";
pub const LIST_USAGE: &str = "usage: list";
pub const REMOVE_USAGE: &str = "usage: remove <id>";
pub const MOD_USAGE: &str = "usage: mod <id> <name> <age> <class>";
pub const SEARCH_USAGE: &str = "usage: search id <id> | search name <name>";
pub const SEARCH_ID_USAGE: &str = "usage: search id <id>";
pub const SEARCH_NAME_USAGE: &str = "usage: search name <name>";
pub const ORDER_USAGE: &str = "usage: order <id|name|age|class> <asc|desc>";

/// A fully parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> <age> <class>`
    Add {
        name: String,
        age: u8,
        class_name: String,
    },
    /// `list`
    List,
    /// `remove <id>`
    Remove { id: StudentId },
    /// `mod <id> <name> <age> <class>`
    Modify {
        id: StudentId,
        name: String,
        age: u8,
        class_name: String,
    },
    /// `search id <id>`
    SearchId { id: StudentId },
    /// `search name <name>`
    SearchName { name: String },
    /// `order <field> <asc|desc>`
    Order {
        field: SortField,
        direction: SortDirection,
    },
    /// `help`
    Help,
    /// `quit` or `exit`
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> CliResult<Option<Command>> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = parts.split_first() else {
        return Ok(None);
    };

    let command = match head {
        "add" => {
            let [name, age, class_name] = args else {
                return Err(CliError::Usage(ADD_USAGE));
            };
            Command::Add {
                name: (*name).to_owned(),
                age: parse_age(age)?,
                class_name: (*class_name).to_owned(),
            }
        }
        "list" => {
            if !args.is_empty() {
                return Err(CliError::Usage(LIST_USAGE));
            }
            Command::List
        }
        "remove" => {
            let [id] = args else {
                return Err(CliError::Usage(REMOVE_USAGE));
            };
            Command::Remove { id: parse_id(id)? }
        }
        "mod" => {
            let [id, name, age, class_name] = args else {
                return Err(CliError::Usage(MOD_USAGE));
            };
            let id = parse_id(id)?;
            Command::Modify {
                id,
                name: (*name).to_owned(),
                age: parse_age(age)?,
                class_name: (*class_name).to_owned(),
            }
        }
        "search" => parse_search(args)?,
        "order" => {
            let [field, direction] = args else {
                return Err(CliError::Usage(ORDER_USAGE));
            };
            let field: SortField = field.parse()?;
            Command::Order {
                field,
                direction: direction.parse()?,
            }
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CliError::UnknownCommand(other.to_owned())),
    };

    Ok(Some(command))
}

fn parse_search(args: &[&str]) -> CliResult<Command> {
    if args.len() < 2 {
        return Err(CliError::Usage(SEARCH_USAGE));
    }
    match args[0] {
        "id" => {
            let [_, id] = args else {
                return Err(CliError::Usage(SEARCH_ID_USAGE));
            };
            Ok(Command::SearchId { id: parse_id(id)? })
        }
        "name" => {
            let [_, name] = args else {
                return Err(CliError::Usage(SEARCH_NAME_USAGE));
            };
            Ok(Command::SearchName {
                name: (*name).to_owned(),
            })
        }
        _ => Err(CliError::Usage(SEARCH_USAGE)),
    }
}

fn parse_id(raw: &str) -> CliResult<StudentId> {
    raw.parse()
        .map_err(|_| CliError::InvalidId(raw.to_owned()))
}

fn parse_age(raw: &str) -> CliResult<u8> {
    raw.parse()
        .map_err(|_| CliError::InvalidAge(raw.to_owned()))
}
