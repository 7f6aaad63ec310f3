//! `booklend-lib` - In-process library catalog and lending ledger.
//!
//! Tracks books, their copy counts, and who currently holds which copy.
//! Everything lives in memory; the caller supplies the current date so
//! every operation is deterministic.
//!
//! # Quick Start
//!
//! ```
//! use booklend_lib::{Library, LendingPolicy, SearchField};
//! use chrono::NaiveDate;
//!
//! let mut library = Library::new(LendingPolicy::default());
//! let id = library.add_book("Clean Code", "Robert C. Martin", 1).id;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let due = library.issue_book(id, "Alice", today).unwrap();
//! assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//!
//! let late = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
//! let receipt = library.return_book(id, "alice", late).unwrap();
//! assert_eq!(receipt.days_late, 6);
//!
//! assert_eq!(library.search_books(SearchField::Title, "clean").count(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod library;
pub mod model;
pub mod policy;
pub mod query;

pub use catalog::Catalog;
pub use error::{LendingError, Result};
pub use ledger::LendingLedger;
pub use library::{Library, SAMPLE_BOOKS};
pub use model::{BookId, BookRecord, LoanRecord, ReturnReceipt};
pub use policy::LendingPolicy;
pub use query::{BookQuery, SearchField};
