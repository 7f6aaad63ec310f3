//! `Library` ties the catalog and the ledger together.

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ledger::LendingLedger;
use crate::model::{BookId, BookRecord, LoanRecord, ReturnReceipt};
use crate::policy::LendingPolicy;
use crate::query::SearchField;

/// Books the demo library opens with: (title, author, copies).
pub const SAMPLE_BOOKS: [(&str, &str, u32); 4] = [
    ("Introduction to Algorithms", "Cormen", 2),
    ("Effective Java", "Joshua Bloch", 1),
    ("Clean Code", "Robert C. Martin", 3),
    ("Head First Java", "Kathy Sierra", 2),
];

/// In-memory library: one catalog plus one lending ledger.
///
/// All operations run to completion on `&mut self`; share across threads
/// only behind a lock that covers each call.
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalog: Catalog,
    ledger: LendingLedger,
}

impl Library {
    /// Create an empty library lending under `policy`.
    #[must_use]
    pub fn new(policy: LendingPolicy) -> Self {
        Self {
            catalog: Catalog::new(),
            ledger: LendingLedger::new(policy),
        }
    }

    /// Create a library stocked with [`SAMPLE_BOOKS`].
    #[must_use]
    pub fn with_sample_data(policy: LendingPolicy) -> Self {
        let mut library = Self::new(policy);
        for (title, author, copies) in SAMPLE_BOOKS {
            library.add_book(title, author, copies);
        }
        library
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn ledger(&self) -> &LendingLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn policy(&self) -> &LendingPolicy {
        self.ledger.policy()
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    pub fn add_book(&mut self, title: &str, author: &str, copies: u32) -> &BookRecord {
        self.catalog.add_book(title, author, copies)
    }

    /// Remove a book nobody is borrowing.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` or `InUse`.
    pub fn remove_book(&mut self, id: BookId) -> Result<BookRecord> {
        let ledger = &self.ledger;
        self.catalog
            .remove_book(id, |book_id| ledger.active_loans_for(book_id))
    }

    /// # Errors
    ///
    /// Returns `BookNotFound` if the book doesn't exist.
    pub fn get_book(&self, id: BookId) -> Result<&BookRecord> {
        self.catalog.get(id)
    }

    pub fn list_books(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.catalog.list()
    }

    pub fn search_books<'a>(
        &'a self,
        field: SearchField,
        text: &str,
    ) -> impl Iterator<Item = &'a BookRecord> + use<'a> {
        self.catalog.search(field, text)
    }

    // ========================================================================
    // Lending
    // ========================================================================

    /// Lend a copy; returns the due date.
    ///
    /// # Errors
    ///
    /// See [`LendingLedger::issue_book`].
    pub fn issue_book(
        &mut self,
        book_id: BookId,
        borrower: &str,
        today: NaiveDate,
    ) -> Result<NaiveDate> {
        self.ledger
            .issue_book(&mut self.catalog, book_id, borrower, today)
    }

    /// # Errors
    ///
    /// See [`LendingLedger::return_book`].
    pub fn return_book(
        &mut self,
        book_id: BookId,
        borrower: &str,
        today: NaiveDate,
    ) -> Result<ReturnReceipt> {
        self.ledger
            .return_book(&mut self.catalog, book_id, borrower, today)
    }

    #[must_use]
    pub fn active_loans_for(&self, book_id: BookId) -> usize {
        self.ledger.active_loans_for(book_id)
    }

    pub fn list_active_loans(&self) -> impl Iterator<Item = &LoanRecord> + '_ {
        self.ledger.list_active()
    }
}
