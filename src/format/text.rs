//! Text formatting functions for `booklend`.
//!
//! Plain, single-line renderings of books, loans and return receipts:
//! - Book lines with availability counts
//! - Loan lines with an overdue marker
//! - Fine amounts to two decimals

use booklend_lib::{BookRecord, LoanRecord, ReturnReceipt};
use chrono::NaiveDate;

/// Marker appended to loans past their due date.
pub const OVERDUE_MARKER: &str = "[overdue]";

/// Format a fine as a two-decimal amount.
#[must_use]
pub fn format_fine(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Format a single-line book summary.
///
/// Format: `ID:{id} | "{title}" by {author} | available: {available}/{total}`
#[must_use]
pub fn format_book_line(book: &BookRecord) -> String {
    format!(
        "ID:{} | \"{}\" by {} | available: {}/{}",
        book.id.0, book.title, book.author, book.available_copies, book.total_copies,
    )
}

/// Format a single-line loan summary, flagging it when overdue on `today`.
#[must_use]
pub fn format_loan_line(loan: &LoanRecord, today: NaiveDate) -> String {
    let mut line = format!(
        "BookID:{} | Borrower:{} | Issued:{} | Due:{}",
        loan.book_id.0, loan.borrower_name, loan.issue_date, loan.due_date,
    );
    if loan.is_overdue(today) {
        line.push(' ');
        line.push_str(OVERDUE_MARKER);
    }
    line
}

/// Format the lines shown after a return.
#[must_use]
pub fn format_return(receipt: &ReturnReceipt) -> Vec<String> {
    let mut lines = vec![format!("Book returned on: {}", receipt.return_date)];
    if receipt.is_late() {
        lines.push(format!(
            "Late by {} day(s). Fine = {}",
            receipt.days_late,
            format_fine(receipt.fine)
        ));
    } else {
        lines.push("Returned on time. No fine.".to_string());
    }
    lines
}
