//! RosterDB CLI
//!
//! Interactive shell over an in-memory student store.
//!
//! # Commands
//!
//! - `add <name> <age> <class>` - Add a student
//! - `list` - List all students by id
//! - `remove <id>` - Remove a student
//! - `mod <id> <name> <age> <class>` - Modify a student
//! - `search id <id>` / `search name <name>` - Look students up
//! - `order <id|name|age|class> <asc|desc>` - Ordered view
//! - `help`, `quit` / `exit`
//!
//! Nothing is persisted; the store is dropped when the shell exits.

mod commands;
mod error;
mod parse;
mod render;
mod repl;

use clap::Parser;
use rosterdb_core::{Config, StudentStore};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::OutputMode;
use crate::repl::Session;

/// RosterDB interactive student records shell.
#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,

    /// Id assigned to the first student added
    #[arg(long, default_value_t = 1)]
    first_id: u64,

    /// Skip the greeting
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = StudentStore::with_config(Config::new().first_id(cli.first_id))?;
    info!(
        version = rosterdb_core::VERSION,
        first_id = cli.first_id,
        "starting shell"
    );

    let mut session = Session::new(store, cli.format).banner(!cli.no_banner);
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut session, stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
