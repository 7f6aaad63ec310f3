//! Core data types for booklend-lib.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog identifier of a book (1-based, never reused within a run).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(transparent)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for BookId {
    type Err = crate::error::LendingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let val = s.strip_prefix('#').unwrap_or(s);

        match val.parse::<u32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(crate::error::LendingError::validation(
                "id",
                format!("'{s}' is not a positive book ID"),
            )),
        }
    }
}

/// A titled book and its copy counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl BookRecord {
    /// Copies currently held by borrowers.
    #[must_use]
    pub const fn copies_on_loan(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// One copy held by one borrower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecord {
    pub book_id: BookId,
    pub borrower_name: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

impl LoanRecord {
    /// Borrower names match regardless of case, compared one char at a time.
    #[must_use]
    pub fn is_held_by(&self, borrower: &str) -> bool {
        self.borrower_name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(borrower.chars().flat_map(char::to_lowercase))
    }

    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        today > self.due_date
    }
}

/// Outcome of a successful return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnReceipt {
    pub book_id: BookId,
    pub return_date: NaiveDate,
    pub days_late: i64,
    pub fine: f64,
}

impl ReturnReceipt {
    #[must_use]
    pub fn is_late(&self) -> bool {
        self.days_late > 0
    }
}
