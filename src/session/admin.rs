//! Admin login and menu.

use std::io::{BufRead, Write};

use booklend_lib::BookId;
use tracing::{info, warn};

use super::{Clock, OutputMode, Session};
use crate::error::Result;
use crate::format::{LoanWithStatus, RemovalOutcome, format_loan_line};

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    /// Plain equality check against the configured secret.
    pub(super) fn admin_login(&mut self) -> Result<bool> {
        let password = self.prompter.read_line("Enter admin password: ")?;
        let ok = password == self.settings.admin_password;
        if ok {
            info!("Admin logged in");
        } else {
            warn!("Admin login rejected");
        }
        Ok(ok)
    }

    pub(super) fn admin_menu(&mut self) -> Result<()> {
        self.prompter.say("Admin logged in.")?;
        loop {
            self.prompter.say("\nAdmin Menu:")?;
            self.prompter.say("1) Add Book")?;
            self.prompter.say("2) Remove Book")?;
            self.prompter.say("3) View Issued Books")?;
            self.prompter.say("4) List All Books")?;
            self.prompter.say("0) Logout")?;

            match self.prompter.read_int("Choose: ")? {
                1 => self.add_book()?,
                2 => self.remove_book()?,
                3 => self.view_issued_books()?,
                4 => self.list_books()?,
                0 => {
                    info!("Admin logged out");
                    return self.prompter.say("Admin logged out.");
                }
                _ => self.prompter.say("Invalid choice. Try again.")?,
            }
        }
    }

    fn add_book(&mut self) -> Result<()> {
        self.prompter.say("\n-- Add New Book --")?;
        let title = self.prompter.read_non_empty("Enter title: ")?;
        let author = self.prompter.read_non_empty("Enter author: ")?;
        let copies = self.prompter.read_positive("Enter number of copies: ")?;

        let book = self.library.add_book(&title, &author, copies).clone();
        info!(id = %book.id, title = %book.title, copies, "Book added");

        if self.settings.mode == OutputMode::Json {
            return self.emit(&book);
        }
        self.prompter
            .say(&format!("Book added successfully (ID:{}).", book.id.0))
    }

    fn remove_book(&mut self) -> Result<()> {
        self.prompter.say("\n-- Remove Book --")?;
        self.list_books()?;
        if self.library.catalog().is_empty() {
            return Ok(());
        }

        let id: BookId = self
            .prompter
            .read_parsed("Enter book ID to remove: ", "Invalid book ID. Try again.")?;
        match self.library.remove_book(id) {
            Ok(book) => {
                if self.settings.mode == OutputMode::Json {
                    return self.emit(&RemovalOutcome {
                        book_id: book.id,
                        title: book.title,
                    });
                }
                self.prompter.say(&format!("Removed book: {}", book.title))
            }
            Err(err) => self.report(err),
        }
    }

    fn view_issued_books(&mut self) -> Result<()> {
        self.prompter.say("\n-- Issued Books --")?;
        let today = self.clock.today();

        if self.settings.mode == OutputMode::Json {
            let loans: Vec<LoanWithStatus> = self
                .library
                .list_active_loans()
                .map(|loan| LoanWithStatus::new(loan, today))
                .collect();
            return self.emit(&loans);
        }

        let lines: Vec<String> = self
            .library
            .list_active_loans()
            .map(|loan| format_loan_line(loan, today))
            .collect();
        if lines.is_empty() {
            return self.prompter.say("No books are currently issued.");
        }
        for line in lines {
            self.prompter.say(&format!("  {line}"))?;
        }
        Ok(())
    }
}
