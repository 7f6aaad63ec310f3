//! Patron menu: borrowing and returning.

use std::io::{BufRead, Write};

use booklend_lib::BookId;

use super::{Clock, OutputMode, Session};
use crate::error::Result;
use crate::format::{IssueOutcome, format_return};

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {
    pub(super) fn patron_menu(&mut self) -> Result<()> {
        loop {
            self.prompter.say("\nPatron Menu:")?;
            self.prompter.say("1) Issue Book")?;
            self.prompter.say("2) Return Book")?;
            self.prompter.say("3) Search Books")?;
            self.prompter.say("4) List All Books")?;
            self.prompter.say("0) Back to Main Menu")?;

            match self.prompter.read_int("Choose: ")? {
                1 => self.issue_book()?,
                2 => self.return_book()?,
                3 => self.search_books()?,
                4 => self.list_books()?,
                0 => return Ok(()),
                _ => self.prompter.say("Invalid choice. Try again.")?,
            }
        }
    }

    fn issue_book(&mut self) -> Result<()> {
        self.prompter.say("\n-- Issue Book --")?;
        if self.library.catalog().is_empty() {
            return self.prompter.say("Library has no books.");
        }

        let borrower = self.prompter.read_non_empty("Enter your name: ")?;
        self.list_books()?;
        let id: BookId = self
            .prompter
            .read_parsed("Enter book ID to issue: ", "Invalid book ID. Try again.")?;

        let today = self.clock.today();
        match self.library.issue_book(id, &borrower, today) {
            Ok(due_date) => {
                if self.settings.mode == OutputMode::Json {
                    return self.emit(&IssueOutcome {
                        book_id: id,
                        borrower_name: borrower,
                        due_date,
                    });
                }
                self.prompter
                    .say(&format!("Book issued successfully. Due date: {due_date}"))
            }
            Err(err) => self.report(err),
        }
    }

    fn return_book(&mut self) -> Result<()> {
        self.prompter.say("\n-- Return Book --")?;
        if self.library.ledger().is_empty() {
            return self.prompter.say("No issued books exist.");
        }

        let borrower = self.prompter.read_non_empty("Enter your name: ")?;
        let id: BookId = self
            .prompter
            .read_parsed("Enter book ID to return: ", "Invalid book ID. Try again.")?;

        let today = self.clock.today();
        match self.library.return_book(id, &borrower, today) {
            Ok(receipt) => {
                if self.settings.mode == OutputMode::Json {
                    return self.emit(&receipt);
                }
                for line in format_return(&receipt) {
                    self.prompter.say(&line)?;
                }
                Ok(())
            }
            Err(err) => self.report(err),
        }
    }
}
