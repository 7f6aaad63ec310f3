//! Search types for catalog lookups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::BookRecord;

/// Book field a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
        }
    }

    /// The field's value on `book`.
    #[must_use]
    pub fn value_of<'a>(&self, book: &'a BookRecord) -> &'a str {
        match self {
            Self::Title => &book.title,
            Self::Author => &book.author,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = crate::error::LendingError;

    /// Accepts the field name or its menu number (1 = title, 2 = author).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(Self::Title),
            "2" | "author" => Ok(Self::Author),
            other => Err(crate::error::LendingError::validation(
                "field",
                format!("unknown search field '{other}'"),
            )),
        }
    }
}

/// Case-insensitive substring query against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookQuery {
    pub field: SearchField,
    needle: String,
}

impl BookQuery {
    #[must_use]
    pub fn new(field: SearchField, text: &str) -> Self {
        Self {
            field,
            needle: fold_case(text),
        }
    }

    #[must_use]
    pub fn matches(&self, book: &BookRecord) -> bool {
        fold_case(self.field.value_of(book)).contains(&self.needle)
    }
}

/// Lowercase one char at a time, so a word-final capital sigma folds to `σ`.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
