//! Core data models for cashcast
//!
//! This module contains the data structures for both dashboards: money,
//! recurring and one-time transactions, projected ledger entries, and
//! sales records.

pub mod ledger;
pub mod money;
pub mod one_time;
pub mod recurring;
pub mod sales;

pub use ledger::{AppliedTransaction, LedgerEntry};
pub use money::Money;
pub use one_time::OneTimeTransaction;
pub use recurring::{RecurringTransaction, TransactionKind};
pub use sales::SaleRecord;
