//! Output formatting for `booklend`.
//!
//! Supports human-readable text output and one-document-per-result JSON.
//!
//! # JSON Output Types
//!
//! Books and return receipts serialize directly from the core types; the
//! rest are wrappers defined here:
//! - [`LoanWithStatus`] - Active loan with overdue flag (issued-books view)
//! - [`IssueOutcome`] - Due date of a new loan
//! - [`RemovalOutcome`] - Book taken out of the catalog
//! - [`ErrorOutput`] - Refused operation

mod output;
mod text;

pub use output::{ErrorOutput, IssueOutcome, LoanWithStatus, RemovalOutcome};
pub use text::{OVERDUE_MARKER, format_book_line, format_fine, format_loan_line, format_return};
