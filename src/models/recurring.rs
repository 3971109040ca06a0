//! Recurring monthly transaction model
//!
//! A recurring transaction fires on a fixed day of the month, indefinitely.
//! The amount is always stored positive; the sign is resolved at projection
//! time from the transaction kind.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CashcastError, CashcastResult};

use super::money::Money;

/// Whether a recurring transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// An income or expense repeating on a fixed day of the month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringTransaction {
    /// Day of month in [1, 31]. Months with fewer days never match
    /// (no end-of-month clamping).
    pub day: u32,
    /// Magnitude, always positive; sign applied via `kind`
    pub amount: Money,
    pub label: String,
    pub color: String,
    pub kind: TransactionKind,
}

impl RecurringTransaction {
    /// Create a validated recurring transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidDay` if `day` is outside [1, 31], or `InvalidAmount`
    /// if `amount` is not strictly positive.
    pub fn new(
        kind: TransactionKind,
        day: u32,
        amount: Money,
        label: impl Into<String>,
        color: impl Into<String>,
    ) -> CashcastResult<Self> {
        if !(1..=31).contains(&day) {
            return Err(CashcastError::InvalidDay(day));
        }
        if !amount.is_positive() {
            return Err(CashcastError::invalid_amount(amount));
        }

        Ok(Self {
            day,
            amount,
            label: label.into(),
            color: color.into(),
            kind,
        })
    }

    /// Whether this transaction fires on the given calendar date
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.day() == self.day
    }

    /// The amount with the sign resolved from the kind
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let txn = RecurringTransaction::new(
            TransactionKind::Income,
            21,
            Money::from_major(13000),
            "Pension",
            "green",
        )
        .unwrap();

        assert_eq!(txn.day, 21);
        assert_eq!(txn.signed_amount(), Money::from_major(13000));
    }

    #[test]
    fn test_day_out_of_range() {
        for day in [0, 32, 100] {
            let result = RecurringTransaction::new(
                TransactionKind::Expense,
                day,
                Money::from_major(100),
                "Rent",
                "red",
            );
            assert!(matches!(result, Err(CashcastError::InvalidDay(d)) if d == day));
        }
    }

    #[test]
    fn test_non_positive_amount() {
        for cents in [0, -500] {
            let result = RecurringTransaction::new(
                TransactionKind::Income,
                10,
                Money::from_cents(cents),
                "Bad",
                "green",
            );
            assert!(matches!(result, Err(CashcastError::InvalidAmount(_))));
        }
    }

    #[test]
    fn test_expense_sign_resolution() {
        let txn = RecurringTransaction::new(
            TransactionKind::Expense,
            14,
            Money::from_major(35000),
            "Rent",
            "red",
        )
        .unwrap();

        assert_eq!(txn.signed_amount(), -Money::from_major(35000));
    }

    #[test]
    fn test_matches_day_of_month() {
        let txn = RecurringTransaction::new(
            TransactionKind::Expense,
            31,
            Money::from_major(100),
            "Gym",
            "red",
        )
        .unwrap();

        assert!(txn.matches(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()));
        // April has 30 days, so a day=31 transaction never fires there
        assert!(!txn.matches(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()));
    }

    #[test]
    fn test_serde_round_trip() {
        let txn = RecurringTransaction::new(
            TransactionKind::Income,
            1,
            Money::from_cents(12345),
            "Salary",
            "green",
        )
        .unwrap();

        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"income\""));
        let back: RecurringTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
