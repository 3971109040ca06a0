//! One-time transaction model
//!
//! A one-time transaction is tied to a single calendar date and carries a
//! pre-signed amount: positive for income, negative for expense.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CashcastError, CashcastResult};

use super::money::Money;

/// An income or expense on a single calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeTransaction {
    pub date: NaiveDate,
    /// Signed amount: positive = income, negative = expense
    pub amount: Money,
    pub label: String,
    pub color: String,
}

impl OneTimeTransaction {
    /// Create a one-time income from a positive magnitude
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the magnitude is not strictly positive.
    pub fn income(
        date: NaiveDate,
        amount: Money,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> CashcastResult<Self> {
        if !amount.is_positive() {
            return Err(CashcastError::invalid_amount(amount));
        }

        Ok(Self {
            date,
            amount,
            label: label.into(),
            color: color.into(),
        })
    }

    /// Create a one-time expense from a positive magnitude
    ///
    /// The stored amount is negated so projection can apply it directly.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the magnitude is not strictly positive.
    pub fn expense(
        date: NaiveDate,
        amount: Money,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> CashcastResult<Self> {
        if !amount.is_positive() {
            return Err(CashcastError::invalid_amount(amount));
        }

        Ok(Self {
            date,
            amount: -amount,
            label: label.into(),
            color: color.into(),
        })
    }

    /// Whether this transaction is an income
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }
}
