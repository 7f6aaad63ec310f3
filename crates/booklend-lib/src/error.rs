//! Error types for `booklend-lib`.

use thiserror::Error;

use crate::model::BookId;

/// Primary error type for catalog and lending operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LendingError {
    // === Lookup Errors ===
    /// No book with the specified ID exists in the catalog.
    #[error("Book not found: {id}")]
    BookNotFound { id: BookId },

    /// No active loan matches the book and borrower.
    #[error("No active loan of book {book_id} for '{borrower}'")]
    LoanNotFound { book_id: BookId, borrower: String },

    // === Lending Errors ===
    /// Every copy of the book is currently on loan.
    #[error("No copies of {id} ('{title}') are available")]
    NoCopiesAvailable { id: BookId, title: String },

    /// Cannot remove a book while copies are still on loan.
    #[error("Cannot remove {id}: {active_loans} copy(ies) currently issued")]
    InUse { id: BookId, active_loans: usize },

    /// Due date falls outside the supported calendar range.
    #[error("Due date out of range: {issued} + {days} day(s)")]
    DateOutOfRange { issued: chrono::NaiveDate, days: u32 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Invariant Errors ===
    /// An availability adjustment would leave `[0, total]`.
    ///
    /// Only reachable through a caller bug; treat as fatal.
    #[error(
        "Availability invariant violated for {id}: {available}/{total} adjusted by {delta}"
    )]
    AvailabilityInvariant {
        id: BookId,
        available: u32,
        total: u32,
        delta: i32,
    },
}

impl LendingError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Unknown book or no matching loan.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound { .. } | Self::LoanNotFound { .. })
    }

    /// Errors that signal a broken invariant rather than a caller-recoverable outcome.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::AvailabilityInvariant { .. })
    }
}

/// Result type using `LendingError`.
pub type Result<T> = std::result::Result<T, LendingError>;
