//! Ledger entry model
//!
//! A ledger entry is one projected day: the transactions applied on that date
//! and the running balance after applying them. Entries are ephemeral and
//! recomputed on every projection; they are never persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A transaction as applied on a specific projected date, sign resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedTransaction {
    pub label: String,
    /// Signed amount: positive = income, negative = expense
    pub amount: Money,
    pub color: String,
}

/// One projected day: applied transactions plus the resulting running balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    /// Transactions applied on this date, in application order; may be empty
    pub transactions: Vec<AppliedTransaction>,
    /// Running balance after applying all of this date's transactions
    pub balance: Money,
}

impl LedgerEntry {
    /// Sum of income magnitudes applied on this date
    pub fn income_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.amount.is_positive())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of expense magnitudes applied on this date (returned positive)
    pub fn expense_total(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.amount.is_negative())
            .map(|t| t.amount.abs())
            .sum()
    }

    /// Net signed change applied on this date
    pub fn net_change(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}
