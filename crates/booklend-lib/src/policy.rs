//! Loan period and fine rate.

use serde::{Deserialize, Serialize};

use crate::error::{LendingError, Result};

pub const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
pub const DEFAULT_FINE_PER_DAY: f64 = 5.0;

/// Fixed lending rules for the lifetime of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingPolicy {
    pub loan_period_days: u32,
    pub fine_per_day: f64,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            fine_per_day: DEFAULT_FINE_PER_DAY,
        }
    }
}

impl LendingPolicy {
    /// Check the policy before handing it to a ledger.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for a zero loan period or a negative/non-finite rate.
    pub fn validate(&self) -> Result<()> {
        if self.loan_period_days == 0 {
            return Err(LendingError::validation(
                "loan_period_days",
                "must be at least 1",
            ));
        }
        if !self.fine_per_day.is_finite() || self.fine_per_day < 0.0 {
            return Err(LendingError::validation(
                "fine_per_day",
                "must be a non-negative amount",
            ));
        }
        Ok(())
    }

    /// Fine owed for `days_late` whole days; zero when not late.
    #[must_use]
    pub fn fine_for(&self, days_late: i64) -> f64 {
        if days_late <= 0 {
            0.0
        } else {
            days_late as f64 * self.fine_per_day
        }
    }
}
