//! cashcast - Terminal cash-flow forecasting and sales analytics
//!
//! This library powers the cashcast application: a day-by-day personal
//! cash-flow forecaster (recurring monthly income and expenses plus one-off
//! transactions projected into a balance curve) paired with a sales
//! analytics dashboard fed from CSV exports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, ledger entries, sales)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (projection engine, tracker, sales analytics)
//! - `display`: Table formatting for CLI output
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//!
//! # Example
//!
//! ```rust,ignore
//! use cashcast::config::{paths::CashcastPaths, settings::Settings};
//!
//! let paths = CashcastPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{CashcastError, CashcastResult};
