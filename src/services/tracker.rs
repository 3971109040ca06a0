//! Tracker service
//!
//! Business logic for the cash-flow forecaster: validated add operations
//! with write-through persistence, and projection over a snapshot of the
//! stored state.

use chrono::{Local, NaiveDate};

use crate::error::{CashcastError, CashcastResult};
use crate::models::{LedgerEntry, Money, OneTimeTransaction, RecurringTransaction, TransactionKind};
use crate::storage::Storage;

use super::forecast::project;

/// Service for tracker operations
pub struct TrackerService<'a> {
    storage: &'a Storage,
}

impl<'a> TrackerService<'a> {
    /// Create a new tracker service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a recurring monthly income
    ///
    /// # Errors
    ///
    /// `InvalidDay` for a day outside [1, 31], `InvalidAmount` for a
    /// non-positive amount. Nothing is appended on failure.
    pub fn add_monthly_income(
        &self,
        day: u32,
        amount: Money,
        label: &str,
        color: &str,
    ) -> CashcastResult<()> {
        let txn = RecurringTransaction::new(TransactionKind::Income, day, amount, label, color)?;
        self.storage.tracker.append_recurring(txn)
    }

    /// Add a recurring monthly expense
    pub fn add_monthly_expense(
        &self,
        day: u32,
        amount: Money,
        label: &str,
        color: &str,
    ) -> CashcastResult<()> {
        let txn = RecurringTransaction::new(TransactionKind::Expense, day, amount, label, color)?;
        self.storage.tracker.append_recurring(txn)
    }

    /// Add a one-time income on the given date
    pub fn add_income(
        &self,
        amount: Money,
        date: NaiveDate,
        label: &str,
        color: &str,
    ) -> CashcastResult<()> {
        let txn = OneTimeTransaction::income(date, amount, label, color)?;
        self.storage.tracker.append_one_time(txn)
    }

    /// Add a one-time expense on the given date
    ///
    /// The magnitude must be positive; it is stored negated.
    pub fn add_expense(
        &self,
        amount: Money,
        date: NaiveDate,
        label: &str,
        color: &str,
    ) -> CashcastResult<()> {
        let txn = OneTimeTransaction::expense(date, amount, label, color)?;
        self.storage.tracker.append_one_time(txn)
    }

    /// Update the initial balance (resets the current balance too)
    ///
    /// # Errors
    ///
    /// `InvalidAmount` for a negative balance.
    pub fn update_initial_balance(&self, balance: Money) -> CashcastResult<()> {
        if balance.is_negative() {
            return Err(CashcastError::invalid_amount(balance));
        }
        self.storage.tracker.set_initial_balance(balance)
    }

    /// Project the balance forward from today
    pub fn forecast(&self, horizon_days: u32) -> CashcastResult<Vec<LedgerEntry>> {
        self.forecast_from(horizon_days, Local::now().date_naive())
    }

    /// Project the balance forward from an explicit start date
    ///
    /// Reads one snapshot of the store, so the projection never observes a
    /// partial write.
    pub fn forecast_from(
        &self,
        horizon_days: u32,
        start_date: NaiveDate,
    ) -> CashcastResult<Vec<LedgerEntry>> {
        let state = self.storage.tracker.snapshot()?;
        Ok(project(
            state.initial_balance,
            &state.recurring(),
            &state.one_time_transactions,
            horizon_days,
            start_date,
        ))
    }
}
