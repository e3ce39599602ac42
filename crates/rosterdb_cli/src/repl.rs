//! Read-eval-print loop.
//!
//! Reads one command per line until `quit`/`exit` or end of input. Command
//! errors are printed and the loop carries on; only I/O errors end it early.

use std::io::{self, BufRead, Write};

use rosterdb_core::StudentStore;
use tracing::debug;

use crate::commands::{self, Outcome};
use crate::parse::parse_line;
use crate::render::{render_error, render_outcome, OutputMode};

const PROMPT: &str = "sms> ";

/// Result of handling one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep reading; print the output if any.
    Continue(Option<String>),
    /// Leave the loop.
    Quit,
}

/// Interactive session state: the store plus presentation settings.
#[derive(Debug)]
pub struct Session {
    store: StudentStore,
    mode: OutputMode,
    banner: bool,
}

impl Session {
    /// Creates a session over `store`.
    pub fn new(store: StudentStore, mode: OutputMode) -> Self {
        Self {
            store,
            mode,
            banner: true,
        }
    }

    /// Sets whether the greeting is printed on start.
    #[must_use]
    pub fn banner(mut self, value: bool) -> Self {
        self.banner = value;
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &StudentStore {
        &self.store
    }

    /// Parses, executes and renders one input line.
    pub fn handle_line(&mut self, line: &str) -> Step {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Step::Continue(None),
            Err(err) => {
                debug!(error = %err, line, "rejected input");
                return Step::Continue(Some(render_error(&err, self.mode)));
            }
        };

        debug!(?command, "executing");
        match commands::execute(&mut self.store, command) {
            Ok(Outcome::Quit) => Step::Quit,
            Ok(outcome) => Step::Continue(render_outcome(&outcome, self.mode)),
            Err(err) => Step::Continue(Some(render_error(&err, self.mode))),
        }
    }
}

/// Runs the loop, reading from `input` and writing to `out`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    if session.banner {
        writeln!(out, "student-cli demo")?;
        writeln!(out, "type `help` to see commands")?;
    }

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: finish the prompt line.
            writeln!(out)?;
            break;
        }

        match session.handle_line(line.trim()) {
            Step::Continue(Some(text)) => writeln!(out, "{text}")?,
            Step::Continue(None) => {}
            Step::Quit => break,
        }
    }

    writeln!(out, "bye")?;
    debug!(students = session.store().len(), "session closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, mode: OutputMode) -> String {
        let mut session = Session::new(StudentStore::new(), mode).banner(false);
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Output with prompts stripped and trailing padding removed.
    fn lines(output: &str) -> Vec<String> {
        output
            .split(PROMPT)
            .flat_map(str::lines)
            .map(|l| l.trim_end().to_owned())
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn scenario_session() {
        let out = run_script(
            "add Alice 20 A\nadd Bob 21 B\nadd Alice 22 C\nsearch name Alice\nremove 2\nlist\norder age desc\nquit\n",
            OutputMode::Text,
        );

        assert_eq!(
            lines(&out),
            vec![
                "ok: added id=1",
                "ok: added id=2",
                "ok: added id=3",
                "id   name         age  class",
                "1    Alice        20   A",
                "3    Alice        22   C",
                "ok: removed id=2",
                "id   name         age  class",
                "1    Alice        20   A",
                "3    Alice        22   C",
                "id   name         age  class",
                "3    Alice        22   C",
                "1    Alice        20   A",
                "bye",
            ]
        );
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let out = run_script(
            "remove 9\nadd Bob x B\nmod 1 Bob 20\nfly\norder height asc\nsearch id 5\nlist\n",
            OutputMode::Text,
        );

        assert_eq!(
            lines(&out),
            vec![
                "error: id=9 not found",
                "error: invalid age `x`",
                "usage: mod <id> <name> <age> <class>",
                "unknown command `fly`. type `help`",
                "error: invalid field `height`",
                "(empty)",
                "(empty)",
                "bye",
            ]
        );
    }

    #[test]
    fn eof_ends_session() {
        let out = run_script("add Zoe 19 Z", OutputMode::Text);
        assert!(out.ends_with("sms> \nbye\n"));
        assert!(out.contains("ok: added id=1"));
    }

    #[test]
    fn exit_is_quit() {
        let out = run_script("exit\nadd Never 1 X\n", OutputMode::Text);
        assert_eq!(lines(&out), vec!["bye"]);
    }

    #[test]
    fn banner_and_prompt() {
        let mut session = Session::new(StudentStore::new(), OutputMode::Text);
        let mut out = Vec::new();
        run(&mut session, Cursor::new(""), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "student-cli demo\ntype `help` to see commands\nsms> \nbye\n"
        );
    }

    #[test]
    fn modify_updates_store() {
        let mut session = Session::new(StudentStore::new(), OutputMode::Text);
        session.handle_line("add Bob 21 B");

        assert_eq!(
            session.handle_line("mod 1 Robert 22 C"),
            Step::Continue(Some("ok: modified id=1".into()))
        );
        assert!(session.store().search_by_name("Bob").is_empty());
        assert_eq!(session.store().search_by_name("Robert").len(), 1);
        session.store().verify_integrity().unwrap();
    }

    #[test]
    fn blank_line_prints_nothing() {
        let mut session = Session::new(StudentStore::new(), OutputMode::Text);
        assert_eq!(session.handle_line(""), Step::Continue(None));
    }

    #[test]
    fn json_mode() {
        let mut session = Session::new(StudentStore::new(), OutputMode::Json);
        session.handle_line("add Alice 20 A");

        let Step::Continue(Some(out)) = session.handle_line("list") else {
            panic!("expected output");
        };
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[0]["class"], "A");

        let Step::Continue(Some(out)) = session.handle_line("remove 7") else {
            panic!("expected output");
        };
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["error"], "error: id=7 not found");
    }
}
