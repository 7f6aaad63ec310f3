use booklend_lib::{BookId, LendingError, LoanRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Active loan for the issued-books view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanWithStatus {
    #[serde(flatten)]
    pub loan: LoanRecord,
    pub overdue: bool,
}

impl LoanWithStatus {
    #[must_use]
    pub fn new(loan: &LoanRecord, today: NaiveDate) -> Self {
        Self {
            loan: loan.clone(),
            overdue: loan.is_overdue(today),
        }
    }
}

/// Result of a successful issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueOutcome {
    pub book_id: BookId,
    pub borrower_name: String,
    pub due_date: NaiveDate,
}

/// Result of a successful removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemovalOutcome {
    pub book_id: BookId,
    pub title: String,
}

/// Refused operation, as reported in JSON mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    pub error: String,
    pub kind: String,
}

impl From<&LendingError> for ErrorOutput {
    fn from(err: &LendingError) -> Self {
        let kind = match err {
            LendingError::BookNotFound { .. } | LendingError::LoanNotFound { .. } => "not_found",
            LendingError::NoCopiesAvailable { .. } => "no_copies_available",
            LendingError::InUse { .. } => "in_use",
            LendingError::DateOutOfRange { .. } => "date_out_of_range",
            LendingError::Validation { .. } => "validation",
            LendingError::AvailabilityInvariant { .. } => "invariant",
        };
        Self {
            error: err.to_string(),
            kind: kind.to_string(),
        }
    }
}
