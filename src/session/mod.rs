//! Interactive lending desk.
//!
//! The session is the only place that reads input or prints results. It
//! turns raw lines into validated values (via [`Prompter`]) and hands them
//! to the [`Library`]; refused operations are reported and the menu loop
//! carries on, while a broken availability invariant ends the session.
//!
//! # Submodules
//!
//! - [`admin`] - Admin login and menu (add, remove, view issued books)
//! - [`patron`] - Patron menu (issue, return)
//! - [`clock`] - Where "today" comes from
//! - [`prompt`] - Prompt helpers

mod admin;
pub mod clock;
mod patron;
pub mod prompt;

use std::io::{BufRead, Write};

use booklend_lib::{LendingError, Library, SearchField};
use serde::Serialize;
use tracing::{debug, error};

use crate::error::{AppError, Result};
use crate::format::{ErrorOutput, format_book_line};

pub use clock::{Clock, FixedClock, SystemClock};
pub use prompt::Prompter;

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    /// One JSON document per result line.
    Json,
}

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub admin_password: String,
    pub mode: OutputMode,
}

/// One run of the menu loop over a library.
pub struct Session<R, W, C> {
    library: Library,
    prompter: Prompter<R, W>,
    clock: C,
    settings: SessionSettings,
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub fn new(library: Library, input: R, output: W, clock: C, settings: SessionSettings) -> Self {
        Self {
            library,
            prompter: Prompter::new(input, output),
            clock,
            settings,
        }
    }

    #[must_use]
    pub const fn library(&self) -> &Library {
        &self.library
    }

    /// Give back the output sink, for inspecting a finished session.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns `Io` on terminal failure, or `Lending` when the library
    /// reports a broken invariant.
    pub fn run(&mut self) -> Result<()> {
        self.prompter
            .say("=== Welcome to the Library Lending Desk ===")?;

        match self.main_menu() {
            Ok(()) => {}
            Err(AppError::InputClosed) => {
                debug!("Input closed; leaving session");
                self.prompter.say("")?;
            }
            Err(e) => return Err(e),
        }

        self.prompter.say("Goodbye!")
    }

    fn main_menu(&mut self) -> Result<()> {
        loop {
            self.prompter.say("\nMain Menu:")?;
            self.prompter.say("1) Admin Login")?;
            self.prompter.say("2) Patron Menu")?;
            self.prompter.say("3) Search Books")?;
            self.prompter.say("4) List All Books")?;
            self.prompter.say("0) Exit")?;

            let choice = self.prompter.read_int("Choose: ")?;
            debug!(choice, "Main menu");
            match choice {
                1 => {
                    if self.admin_login()? {
                        self.admin_menu()?;
                    } else {
                        self.prompter.say("Admin login failed.")?;
                    }
                }
                2 => self.patron_menu()?,
                3 => self.search_books()?,
                4 => self.list_books()?,
                0 => return Ok(()),
                _ => self.prompter.say("Invalid option. Try again.")?,
            }
        }
    }

    // ========================================================================
    // Shared views
    // ========================================================================

    fn list_books(&mut self) -> Result<()> {
        self.prompter.say("\n-- Books in Library --")?;
        if self.settings.mode == OutputMode::Json {
            let books: Vec<_> = self.library.list_books().cloned().collect();
            return self.emit(&books);
        }
        if self.library.catalog().is_empty() {
            return self.prompter.say("No books in library.");
        }
        let lines: Vec<String> = self.library.list_books().map(format_book_line).collect();
        for line in lines {
            self.prompter.say(&format!("  {line}"))?;
        }
        Ok(())
    }

    fn search_books(&mut self) -> Result<()> {
        self.prompter.say("\n-- Search Books --")?;
        if self.library.catalog().is_empty() {
            return self.prompter.say("Library has no books.");
        }

        let field: SearchField = self.prompter.read_parsed(
            "Search by (1) Title or (2) Author? Enter 1 or 2: ",
            "Please enter 1 or 2.",
        )?;
        let text = self.prompter.read_non_empty("Enter search text: ")?;
        debug!(%field, text = %text, "Searching catalog");

        let results: Vec<_> = self.library.search_books(field, &text).cloned().collect();
        if self.settings.mode == OutputMode::Json {
            return self.emit(&results);
        }
        if results.is_empty() {
            return self.prompter.say("No results found.");
        }
        self.prompter.say("Search results:")?;
        for book in &results {
            self.prompter.say(&format!("  {}", format_book_line(book)))?;
        }
        Ok(())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn emit<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.prompter.say_own_line(&json)
    }

    /// Report a refused operation, or abort on a broken invariant.
    fn report(&mut self, err: LendingError) -> Result<()> {
        if err.is_fatal() {
            error!(%err, "Lending invariant violated");
            return Err(err.into());
        }
        debug!(%err, "Operation refused");

        if self.settings.mode == OutputMode::Json {
            return self.emit(&ErrorOutput::from(&err));
        }
        let message = match &err {
            LendingError::BookNotFound { .. } => "No book with that ID.".to_string(),
            LendingError::NoCopiesAvailable { .. } => "No copies available right now.".to_string(),
            LendingError::InUse { active_loans, .. } => format!(
                "Cannot remove. There are currently {active_loans} issued copy(ies)."
            ),
            LendingError::LoanNotFound { .. } => {
                "No matching issue record found for you and that book ID.".to_string()
            }
            other => other.to_string(),
        };
        self.prompter.say(&message)
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Hands out queued dates, then keeps repeating the last one.
    pub struct ScriptedClock(RefCell<VecDeque<NaiveDate>>);

    impl ScriptedClock {
        /// `days` are offsets from 2024-01-01.
        pub fn new(days: &[u64]) -> Self {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            Self(RefCell::new(
                days.iter()
                    .map(|&d| start + chrono::Duration::days(i64::try_from(d).unwrap()))
                    .collect(),
            ))
        }
    }

    impl Clock for ScriptedClock {
        fn today(&self) -> NaiveDate {
            let mut days = self.0.borrow_mut();
            if days.len() > 1 {
                days.pop_front().unwrap()
            } else {
                *days.front().unwrap()
            }
        }
    }

    pub fn run_with_mode(
        library: Library,
        script: &str,
        days: &[u64],
        mode: OutputMode,
    ) -> (Library, String) {
        crate::logging::init_test_logging();
        let settings = SessionSettings {
            admin_password: "admin123".to_string(),
            mode,
        };
        let mut session = Session::new(
            library,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            ScriptedClock::new(days),
            settings,
        );
        session.run().unwrap();
        let library = session.library().clone();
        let out = String::from_utf8(session.into_output()).unwrap();
        (library, out)
    }

    /// Run `script` in text mode; returns the final library and the transcript.
    pub fn run(library: Library, script: &str, days: &[u64]) -> (Library, String) {
        run_with_mode(library, script, days, OutputMode::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::tests_support::{ScriptedClock, run, run_with_mode};
    use super::*;
    use booklend_lib::{BookId, LendingPolicy};
    use std::io::Cursor;

    fn sample() -> Library {
        Library::with_sample_data(LendingPolicy::default())
    }

    #[test]
    fn test_exit_immediately() {
        let (_, out) = run(sample(), "0\n", &[0]);
        assert!(out.starts_with("=== Welcome"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_eof_ends_cleanly() {
        let (_, out) = run(sample(), "2\n1\n", &[0]);
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_list_all_books() {
        let (_, out) = run(sample(), "4\n0\n", &[0]);
        assert!(out.contains(r#"ID:1 | "Introduction to Algorithms" by Cormen | available: 2/2"#));
        assert!(out.contains(r#"ID:4 | "Head First Java" by Kathy Sierra | available: 2/2"#));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let (_, out) = run(sample(), "9\nx\n0\n", &[0]);
        assert!(out.contains("Invalid option. Try again."));
        assert!(out.contains("Invalid number. Try again."));
    }

    #[test]
    fn test_search_by_title() {
        let (_, out) = run(sample(), "3\n7\n1\njava\n0\n", &[0]);
        assert!(out.contains("Please enter 1 or 2."));
        assert!(out.contains("Effective Java"));
        assert!(out.contains("Head First Java"));
        assert!(!out.contains(r#""Clean Code" by"#));
    }

    #[test]
    fn test_search_no_results() {
        let (_, out) = run(sample(), "3\n2\nknuth\n0\n", &[0]);
        assert!(out.contains("No results found."));
    }

    #[test]
    fn test_search_json() {
        let (_, out) = run_with_mode(sample(), "3\n2\nbloch\n0\n", &[0], OutputMode::Json);
        let line = out
            .lines()
            .find(|l| l.starts_with("[{"))
            .expect("json array");
        let books: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(books.as_array().unwrap().len(), 1);
        assert_eq!(books[0]["id"], 2);
        assert_eq!(books[0]["available_copies"], 1);
    }

    #[test]
    fn test_json_error_for_unknown_book() {
        // Patron menu, issue book #42, then back out.
        let script = "2\n1\nAlice\n42\n0\n0\n";
        let (library, out) = run_with_mode(sample(), script, &[0], OutputMode::Json);

        let line = out
            .lines()
            .find(|l| l.starts_with('{'))
            .expect("json error document");
        let doc: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(doc["kind"], "not_found");
        assert_eq!(doc["error"], "Book not found: #42");
        assert_eq!(library.list_active_loans().count(), 0);
    }

    #[test]
    fn test_fatal_error_aborts() {
        let mut session = Session::new(
            sample(),
            Cursor::new(Vec::new()),
            Vec::new(),
            ScriptedClock::new(&[0]),
            SessionSettings {
                admin_password: "x".into(),
                mode: OutputMode::Text,
            },
        );
        let err = LendingError::AvailabilityInvariant {
            id: BookId(1),
            available: 0,
            total: 1,
            delta: -1,
        };
        assert!(matches!(session.report(err), Err(AppError::Lending(_))));
        assert!(session.report(LendingError::BookNotFound { id: BookId(9) }).is_ok());
    }

    #[test]
    fn test_late_return_through_patron_menu() {
        let mut library = Library::new(LendingPolicy::default());
        library.add_book("Introduction to Algorithms", "Cormen", 1);

        // Issue on day 0, return on day 20.
        let script = "2\n1\nAlice\n1\n2\nalice\n1\n0\n0\n";
        let (library, out) = run(library, script, &[0, 20]);

        assert!(out.contains("Book issued successfully. Due date: 2024-01-15"));
        assert!(out.contains("Book returned on: 2024-01-21"));
        assert!(out.contains("Late by 6 day(s). Fine = 30.00"));
        assert_eq!(library.get_book(BookId(1)).unwrap().available_copies, 1);
        assert_eq!(library.list_active_loans().count(), 0);
    }
}
