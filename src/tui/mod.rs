//! Terminal user interface
//!
//! An interactive dashboard built on ratatui with two tabs: the cash-flow
//! forecast (balance chart plus day-by-day ledger) and sales analytics.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

pub mod views;

pub mod widgets;

pub mod dialogs;

pub mod layout;

pub use app::App;
pub use terminal::run_tui;
