//! Active loans, issue/return transitions and fine computation.

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{LendingError, Result};
use crate::model::{BookId, LoanRecord, ReturnReceipt};
use crate::policy::LendingPolicy;

/// Owns the active loans, kept in issue order.
///
/// Holds book IDs only; the `Catalog` passed into each call owns the books.
#[derive(Debug, Clone, Default)]
pub struct LendingLedger {
    loans: Vec<LoanRecord>,
    policy: LendingPolicy,
}

impl LendingLedger {
    #[must_use]
    pub fn new(policy: LendingPolicy) -> Self {
        Self {
            loans: Vec::new(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &LendingPolicy {
        &self.policy
    }

    /// Lend one copy of `book_id` to `borrower`, due after the loan period.
    ///
    /// Nothing changes on failure.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` if the book is not in `catalog`,
    /// `NoCopiesAvailable` if every copy is out,
    /// or `DateOutOfRange` if the due date cannot be represented.
    pub fn issue_book(
        &mut self,
        catalog: &mut Catalog,
        book_id: BookId,
        borrower: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate> {
        let book = catalog.get(book_id)?;
        if book.available_copies == 0 {
            return Err(LendingError::NoCopiesAvailable {
                id: book_id,
                title: book.title.clone(),
            });
        }

        let days = self.policy.loan_period_days;
        let due_date = today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or(LendingError::DateOutOfRange { issued: today, days })?;

        catalog.adjust_availability(book_id, -1)?;
        self.loans.push(LoanRecord {
            book_id,
            borrower_name: borrower.to_string(),
            issue_date: today,
            due_date,
        });

        info!(%book_id, borrower, %due_date, "Issued book");
        Ok(due_date)
    }

    /// Take back the first active loan of `book_id` held by `borrower`.
    ///
    /// Loans are searched in issue order, so a borrower holding several
    /// copies of a title returns the earliest-issued one first.
    ///
    /// # Errors
    ///
    /// Returns `LoanNotFound` if no active loan matches both book and
    /// borrower, or `AvailabilityInvariant` if the catalog is out of step.
    pub fn return_book(
        &mut self,
        catalog: &mut Catalog,
        book_id: BookId,
        borrower: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt> {
        let index = self
            .loans
            .iter()
            .position(|loan| loan.book_id == book_id && loan.is_held_by(borrower))
            .ok_or_else(|| LendingError::LoanNotFound {
                book_id,
                borrower: borrower.to_string(),
            })?;

        let due_date = self.loans[index].due_date;
        let days_late = days_between(due_date, today).max(0);
        let fine = self.policy.fine_for(days_late);

        catalog.adjust_availability(book_id, 1)?;
        let loan = self.loans.remove(index);

        info!(
            %book_id,
            borrower = %loan.borrower_name,
            days_late,
            fine,
            "Returned book"
        );
        Ok(ReturnReceipt {
            book_id,
            return_date: today,
            days_late,
            fine,
        })
    }

    /// Number of active loans referencing `book_id`.
    #[must_use]
    pub fn active_loans_for(&self, book_id: BookId) -> usize {
        self.loans.iter().filter(|l| l.book_id == book_id).count()
    }

    /// All active loans in issue order.
    pub fn list_active(&self) -> impl Iterator<Item = &LoanRecord> + '_ {
        self.loans.iter()
    }

    /// Active loans past their due date on `today`.
    pub fn overdue(&self, today: NaiveDate) -> impl Iterator<Item = &LoanRecord> + '_ {
        self.loans.iter().filter(move |l| l.is_overdue(today))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.loans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

/// Signed whole days from `from` to `to`.
fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let days = to.signed_duration_since(from).num_days();
    debug!(%from, %to, days, "days_between");
    days
}
