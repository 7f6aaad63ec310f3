//! Book catalog keyed by `BookId`.
//!
//! IDs are handed out sequentially and never reused, so iterating the
//! `BTreeMap` in key order is the same as insertion order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{debug, info};

use crate::error::{LendingError, Result};
use crate::model::{BookId, BookRecord};
use crate::query::{BookQuery, SearchField};

/// Owns every `BookRecord` and its copy counts.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: BTreeMap<BookId, BookRecord>,
    next_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            next_id: 1,
        }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Add a book with `copies` copies, all available.
    ///
    /// Callers pass non-empty `title`/`author` and `copies > 0`.
    pub fn add_book(&mut self, title: &str, author: &str, copies: u32) -> &BookRecord {
        let id = BookId(self.next_id);
        self.next_id += 1;

        debug!(%id, title, author, copies, "Adding book");

        self.books.entry(id).or_insert(BookRecord {
            id,
            title: title.to_string(),
            author: author.to_string(),
            total_copies: copies,
            available_copies: copies,
        })
    }

    /// Remove a book that has no active loans.
    ///
    /// `active_loans` reports how many loans still reference an ID.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` if the ID is unknown,
    /// or `InUse` if any loan still references it.
    pub fn remove_book<F>(&mut self, id: BookId, active_loans: F) -> Result<BookRecord>
    where
        F: Fn(BookId) -> usize,
    {
        let Entry::Occupied(entry) = self.books.entry(id) else {
            return Err(LendingError::BookNotFound { id });
        };

        let count = active_loans(id);
        if count > 0 {
            return Err(LendingError::InUse {
                id,
                active_loans: count,
            });
        }

        let removed = entry.remove();
        info!(%id, title = %removed.title, "Removed book");
        Ok(removed)
    }

    /// Get a single book by ID.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` if the book doesn't exist.
    pub fn get(&self, id: BookId) -> Result<&BookRecord> {
        self.books.get(&id).ok_or(LendingError::BookNotFound { id })
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// All books in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.books.values()
    }

    /// Books whose `field` contains `text`, ignoring case.
    pub fn search<'a>(
        &'a self,
        field: SearchField,
        text: &str,
    ) -> impl Iterator<Item = &'a BookRecord> + use<'a> {
        let query = BookQuery::new(field, text);
        self.books.values().filter(move |book| query.matches(book))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // ========================================================================
    // Availability
    // ========================================================================

    /// Shift `available_copies` by `delta`, keeping it within `[0, total]`.
    ///
    /// # Errors
    ///
    /// Returns `BookNotFound` for an unknown ID, or `AvailabilityInvariant`
    /// when the result would leave the valid range. The latter means a
    /// caller is out of step with the ledger.
    pub(crate) fn adjust_availability(&mut self, id: BookId, delta: i32) -> Result<&BookRecord> {
        let book = self
            .books
            .get_mut(&id)
            .ok_or(LendingError::BookNotFound { id })?;

        let adjusted = book
            .available_copies
            .checked_add_signed(delta)
            .filter(|&n| n <= book.total_copies)
            .ok_or(LendingError::AvailabilityInvariant {
                id,
                available: book.available_copies,
                total: book.total_copies,
                delta,
            })?;

        book.available_copies = adjusted;
        Ok(&*book)
    }
}
