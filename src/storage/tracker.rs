//! Tracker repository for JSON storage
//!
//! Persists the cash-flow tracker state (balances plus transaction lists)
//! to tracker.json with last-write-wins semantics. A missing, unreadable,
//! or malformed store is recovered locally by substituting the built-in
//! default recurring set and persisting it immediately.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{CashcastError, CashcastResult};
use crate::models::{Money, OneTimeTransaction, RecurringTransaction, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// The persisted tracker document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    pub initial_balance: Money,
    pub current_balance: Money,
    pub recurring_incomes: Vec<RecurringTransaction>,
    pub recurring_expenses: Vec<RecurringTransaction>,
    pub one_time_transactions: Vec<OneTimeTransaction>,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            initial_balance: Money::zero(),
            current_balance: Money::zero(),
            recurring_incomes: Vec::new(),
            recurring_expenses: Vec::new(),
            one_time_transactions: Vec::new(),
        }
    }
}

impl TrackerState {
    /// The built-in recurring set used when no usable store exists
    pub fn default_set() -> Self {
        // Construction can't fail: days and amounts are in range
        let pension = RecurringTransaction::new(
            TransactionKind::Income,
            21,
            Money::from_major(13000),
            "Pension",
            "green",
        )
        .expect("default income is valid");
        let rent = RecurringTransaction::new(
            TransactionKind::Expense,
            14,
            Money::from_major(35000),
            "Rent",
            "red",
        )
        .expect("default expense is valid");
        let internet = RecurringTransaction::new(
            TransactionKind::Expense,
            22,
            Money::from_major(900),
            "Internet",
            "darkred",
        )
        .expect("default expense is valid");

        Self {
            recurring_incomes: vec![pension],
            recurring_expenses: vec![rent, internet],
            ..Self::default()
        }
    }

    /// Whether the state carries any recurring transactions
    pub fn has_recurring(&self) -> bool {
        !self.recurring_incomes.is_empty() || !self.recurring_expenses.is_empty()
    }

    /// All recurring transactions, incomes first, each list in insertion order
    pub fn recurring(&self) -> Vec<RecurringTransaction> {
        self.recurring_incomes
            .iter()
            .chain(self.recurring_expenses.iter())
            .cloned()
            .collect()
    }
}

/// Outcome of loading the tracker store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The persisted document was read successfully
    Loaded,
    /// The store was missing or malformed; defaults were substituted
    /// and persisted
    Defaulted,
}

/// Repository guarding the tracker state behind an RwLock
///
/// Appends are serialized through the write lock (single-writer discipline)
/// and every mutation writes through to disk. Reads hand out a full
/// snapshot so a projection never observes a partial write.
pub struct TrackerRepository {
    path: PathBuf,
    data: RwLock<TrackerState>,
}

impl TrackerRepository {
    /// Create a new tracker repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(TrackerState::default()),
        }
    }

    /// Load state from disk, falling back to the default recurring set
    ///
    /// A missing file, unreadable file, or malformed content all degrade to
    /// the built-in defaults, which are persisted immediately. An empty
    /// recurring set in a valid file also receives the defaults, matching
    /// first-run behavior.
    pub fn load(&self) -> CashcastResult<LoadOutcome> {
        let (state, outcome) = match read_json::<TrackerState, _>(&self.path) {
            Ok(Some(state)) if state.has_recurring() => (state, LoadOutcome::Loaded),
            Ok(_) => (TrackerState::default_set(), LoadOutcome::Defaulted),
            Err(e) if e.is_store_unavailable() => {
                (TrackerState::default_set(), LoadOutcome::Defaulted)
            }
            Err(e) => return Err(e),
        };

        {
            let mut data = self.write_guard()?;
            *data = state;
        }

        if outcome == LoadOutcome::Defaulted {
            self.save()?;
        }

        Ok(outcome)
    }

    /// Save the current state to disk atomically
    pub fn save(&self) -> CashcastResult<()> {
        let data = self.read_guard()?;
        write_json_atomic(&self.path, &*data)
    }

    /// A consistent snapshot of the full state
    pub fn snapshot(&self) -> CashcastResult<TrackerState> {
        Ok(self.read_guard()?.clone())
    }

    /// Append a recurring transaction and persist
    pub fn append_recurring(&self, txn: RecurringTransaction) -> CashcastResult<()> {
        {
            let mut data = self.write_guard()?;
            match txn.kind {
                TransactionKind::Income => data.recurring_incomes.push(txn),
                TransactionKind::Expense => data.recurring_expenses.push(txn),
            }
        }
        self.save()
    }

    /// Append a one-time transaction and persist
    pub fn append_one_time(&self, txn: OneTimeTransaction) -> CashcastResult<()> {
        {
            let mut data = self.write_guard()?;
            data.one_time_transactions.push(txn);
        }
        self.save()
    }

    /// Update the initial balance (also resetting the current balance) and persist
    pub fn set_initial_balance(&self, balance: Money) -> CashcastResult<()> {
        {
            let mut data = self.write_guard()?;
            data.initial_balance = balance;
            data.current_balance = balance;
        }
        self.save()
    }

    fn read_guard(&self) -> CashcastResult<std::sync::RwLockReadGuard<'_, TrackerState>> {
        self.data
            .read()
            .map_err(|e| CashcastError::StoreUnavailable(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> CashcastResult<std::sync::RwLockWriteGuard<'_, TrackerState>> {
        self.data
            .write()
            .map_err(|e| CashcastError::StoreUnavailable(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn repo_in(temp_dir: &TempDir) -> TrackerRepository {
        TrackerRepository::new(temp_dir.path().join("tracker.json"))
    }

    #[test]
    fn test_missing_store_gets_defaults_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);

        let outcome = repo.load().unwrap();
        assert_eq!(outcome, LoadOutcome::Defaulted);
        assert!(temp_dir.path().join("tracker.json").exists());

        let state = repo.snapshot().unwrap();
        assert_eq!(state.recurring_incomes.len(), 1);
        assert_eq!(state.recurring_expenses.len(), 2);
        assert_eq!(state.recurring_incomes[0].label, "Pension");
    }

    #[test]
    fn test_malformed_store_recovers_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("tracker.json"), "{{not json").unwrap();

        let repo = repo_in(&temp_dir);
        let outcome = repo.load().unwrap();
        assert_eq!(outcome, LoadOutcome::Defaulted);

        // The recovered defaults overwrote the corrupt file
        let repo2 = repo_in(&temp_dir);
        assert_eq!(repo2.load().unwrap(), LoadOutcome::Loaded);
    }

    #[test]
    fn test_append_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        repo.load().unwrap();

        let txn = RecurringTransaction::new(
            TransactionKind::Income,
            1,
            Money::from_major(50),
            "Dividends",
            "green",
        )
        .unwrap();
        repo.append_recurring(txn.clone()).unwrap();

        let one_time = OneTimeTransaction::expense(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Money::from_major(200),
            "Car repair",
            "red",
        )
        .unwrap();
        repo.append_one_time(one_time.clone()).unwrap();

        // A fresh repository sees the write-through data
        let repo2 = repo_in(&temp_dir);
        assert_eq!(repo2.load().unwrap(), LoadOutcome::Loaded);
        let state = repo2.snapshot().unwrap();
        assert_eq!(state.recurring_incomes.last(), Some(&txn));
        assert_eq!(state.one_time_transactions.last(), Some(&one_time));
    }

    #[test]
    fn test_set_initial_balance_resets_current() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo_in(&temp_dir);
        repo.load().unwrap();

        repo.set_initial_balance(Money::from_major(2500)).unwrap();

        let state = repo.snapshot().unwrap();
        assert_eq!(state.initial_balance, Money::from_major(2500));
        assert_eq!(state.current_balance, Money::from_major(2500));
    }

    #[test]
    fn test_recurring_order_incomes_first() {
        let state = TrackerState::default_set();
        let all = state.recurring();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].kind, TransactionKind::Income);
        assert_eq!(all[1].label, "Rent");
        assert_eq!(all[2].label, "Internet");
    }
}
