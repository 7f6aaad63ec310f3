//! `booklend` (bl) - Library catalog and lending desk
//!
//! Tracks a small library's books and loans for an administrator and patrons.
//! Everything is kept in memory for the length of one session.

use booklend::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
