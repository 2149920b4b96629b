//! Session loop: one store, many commands.
//!
//! A [`Session`] owns the only [`MenuStore`] of the process and hands it by
//! reference to each command. Errors from a single line are reported on the
//! error stream and the loop carries on; only I/O failures end it early.

use std::io::{BufRead, Write};
use std::path::Path;

use menu_store::{Dish, DishDraft, MenuError, MenuStore, SeedMenu, aggregate};
use tracing::debug;

use crate::command::{Command, parse_line};
use crate::error::ShellError;
use crate::render;

/// Whether the loop should read another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// Stop the session.
    Quit,
}

/// Build the starting store, from a seed menu when a path is given.
///
/// # Errors
///
/// Returns [`ShellError::Seed`] when the seed menu cannot be read or holds an
/// invalid dish.
pub fn load_store(seed_path: Option<&Path>) -> Result<MenuStore, ShellError> {
    let Some(path) = seed_path else {
        return Ok(MenuStore::new());
    };
    let seed = SeedMenu::from_file(path)?;
    Ok(MenuStore::from_seed(&seed))
}

/// An interactive session over a single store.
#[derive(Debug, Default)]
pub struct Session {
    store: MenuStore,
}

impl Session {
    /// Start a session that owns `store`.
    #[must_use]
    pub const fn new(store: MenuStore) -> Self {
        Self { store }
    }

    /// The session's store.
    #[must_use]
    pub const fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Run one command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Menu`] when the store rejects the command and
    /// [`ShellError::Io`] or [`ShellError::Json`] when output fails.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, ShellError> {
        match command {
            Command::List { course, json } => {
                let dishes = self.store.filter_by_course(course);
                if json {
                    serde_json::to_writer_pretty(&mut *out, &dishes)?;
                    writeln!(out)?;
                } else {
                    render::write_dishes(out, &dishes)?;
                }
            }
            Command::Add(args) => {
                let dish = self.store.add(&DishDraft::from(args))?;
                report(out, "Added", &dish)?;
            }
            Command::Edit { id, changes } => {
                let current = self.store.get(id).ok_or(MenuError::NotFound { id })?;
                let draft = changes.apply_to(current);
                let dish = self.store.update(id, &draft)?;
                report(out, "Updated", &dish)?;
            }
            Command::Remove { id } => {
                let dish = self.store.remove(id)?;
                report(out, "Removed", &dish)?;
            }
            Command::Groups => render::write_groups(out, &self.store.group_by_course())?,
            Command::Summary { course, json } => {
                let summary = aggregate(self.store.filter_by_course(course));
                if json {
                    serde_json::to_writer_pretty(&mut *out, &summary)?;
                    writeln!(out)?;
                } else {
                    render::write_summary(out, &summary)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and run one input line. Blank lines do nothing.
    ///
    /// # Errors
    ///
    /// Returns any parse or command error; see [`parse_line`] and
    /// [`Session::execute`].
    pub fn execute_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, ShellError> {
        match parse_line(line)? {
            Some(command) => self.execute(command, out),
            None => Ok(Flow::Continue),
        }
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    ///
    /// `prompt` is written to `out` before each line when non-empty. Help
    /// goes to `out`; rejected commands are reported on `err`.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Io`] when reading input or writing output fails.
    pub fn run(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
        prompt: &str,
    ) -> Result<(), ShellError> {
        write_prompt(out, prompt)?;
        for read in input.lines() {
            let line = read?;
            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => {
                    debug!("session ended by quit");
                    return Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(ShellError::Io(source)) => return Err(ShellError::Io(source)),
                Err(error) if error.is_help() => write!(out, "{error}")?,
                Err(error @ ShellError::Usage(_)) => {
                    writeln!(err, "{}", error.to_string().trim_end())?;
                }
                Err(error) => {
                    debug!(%error, "command rejected");
                    writeln!(err, "error: {error}")?;
                }
            }
            write_prompt(out, prompt)?;
        }
        debug!("session ended at end of input");
        Ok(())
    }
}

fn report(out: &mut impl Write, action: &str, dish: &Dish) -> Result<(), ShellError> {
    writeln!(out, "{action} {} ({})", dish.name(), dish.id())?;
    Ok(())
}

fn write_prompt(out: &mut impl Write, prompt: &str) -> Result<(), ShellError> {
    if !prompt.is_empty() {
        write!(out, "{prompt}")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Unit coverage for command execution and the read loop.

    use std::io::Cursor;

    use menu_store::{Course, Price};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn session() -> Session {
        Session::new(MenuStore::new())
    }

    fn run_script(session: &mut Session, script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session
            .run(Cursor::new(script), &mut out, &mut err, "")
            .expect("in-memory streams do not fail");
        (
            String::from_utf8(out).expect("stdout is UTF-8"),
            String::from_utf8(err).expect("stderr is UTF-8"),
        )
    }

    #[rstest]
    fn add_then_list(mut session: Session) {
        let (out, err) = run_script(
            &mut session,
            "add --name 'Tomato Soup' --price 45 --course starters\nlist\n",
        );

        assert!(err.is_empty(), "unexpected errors: {err}");
        assert!(out.starts_with("Added Tomato Soup ("), "{out}");
        assert!(out.contains("starters      45.00  Tomato Soup"), "{out}");
        assert_eq!(session.store().len(), 1);
    }

    #[rstest]
    fn validation_errors_do_not_stop_the_session(mut session: Session) {
        let (out, err) = run_script(
            &mut session,
            "add --name '' --price 10 --course mains\nadd --name X --price 5 --course mains\n",
        );

        assert_eq!(err, "error: invalid dish: dish name must not be empty\n");
        assert!(out.contains("Added X"), "{out}");
        assert_eq!(session.store().len(), 1);
    }

    #[rstest]
    fn quit_stops_reading(mut session: Session) {
        let (_, err) = run_script(
            &mut session,
            "quit\nadd --name X --price 5 --course mains\n",
        );

        assert!(err.is_empty());
        assert!(session.store().is_empty());
    }

    #[rstest]
    fn usage_errors_are_reported_without_prefix(mut session: Session) {
        let (_, err) = run_script(&mut session, "list --course lunch\n");
        assert!(err.starts_with("error: invalid value 'lunch'"), "{err}");
        assert!(!err.starts_with("error: error:"), "{err}");
    }

    #[rstest]
    fn edit_keeps_unspecified_fields(mut session: Session) {
        let mut sink = Vec::new();
        let dish = session
            .store
            .add(&DishDraft::new("Bobotie", "85", "mains").with_description("Spiced"))
            .expect("valid dish");
        let flow = session
            .execute_line(&format!("edit {} --price 92.50", dish.id()), &mut sink)
            .expect("edit succeeds");

        assert_eq!(flow, Flow::Continue);
        let edited = session.store().get(dish.id()).expect("dish still stored");
        assert_eq!(edited.price(), Price::from_cents(9250));
        assert_eq!(edited.description(), Some("Spiced"));
        assert_eq!(edited.course(), Course::Mains);
    }

    #[rstest]
    fn edit_of_unknown_dish_is_not_found(mut session: Session) {
        let mut sink = Vec::new();
        let result = session.execute_line(
            "edit 3fa85f64-5717-4562-b3fc-2c963f66afa6 --price 1",
            &mut sink,
        );
        assert!(
            matches!(&result, Err(ShellError::Menu(err)) if err.is_not_found()),
            "{result:?}"
        );
    }

    #[rstest]
    fn summary_json_uses_decimal_strings(mut session: Session) {
        let (out, _) = run_script(
            &mut session,
            "add --name Bobotie --price 85 --course mains\nsummary --json\n",
        );
        let (_, json) = out.split_once('\n').expect("summary JSON follows the add report");
        let value: serde_json::Value = serde_json::from_str(json).expect("summary is valid JSON");
        assert_eq!(value["totalValue"], "85.00");
        assert_eq!(value["averageByCourse"]["starters"], "0.00");
    }

    #[rstest]
    fn prompt_is_written_before_each_line(mut session: Session) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session
            .run(Cursor::new("\n\n"), &mut out, &mut err, "> ")
            .expect("in-memory streams do not fail");
        assert_eq!(String::from_utf8(out).expect("UTF-8"), "> > > ");
    }

    #[test]
    fn load_store_without_seed_is_empty() {
        let store = load_store(None).expect("no seed to load");
        assert!(store.is_empty());
    }
}
