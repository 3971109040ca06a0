//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::path::Path;

use crate::config::Settings;
use crate::models::{LedgerEntry, SaleRecord};
use crate::services::{load_sales_csv, TrackerService};
use crate::storage::Storage;

use super::dialogs::balance::BalanceFormState;
use super::dialogs::transaction::TransactionFormState;

/// Which dashboard tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Forecast,
    Sales,
}

impl ActiveTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Forecast => "Forecast",
            Self::Sales => "Sales",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    SetBalance,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The storage layer
    pub storage: &'a Storage,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Scroll offset for the forecast table
    pub scroll_offset: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Cached projection, refreshed after every mutation
    pub entries: Vec<LedgerEntry>,

    /// Loaded sales records (empty when no CSV was given)
    pub sales: Vec<SaleRecord>,

    /// Number of CSV rows skipped during import
    pub sales_skipped: usize,

    /// Add-transaction form state
    pub transaction_form: TransactionFormState,

    /// Set-balance form state
    pub balance_form: BalanceFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            scroll_offset: 0,
            status_message: None,
            entries: Vec::new(),
            sales: Vec::new(),
            sales_skipped: 0,
            transaction_form: TransactionFormState::new(),
            balance_form: BalanceFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether a dialog is currently open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddTransaction => {
                self.transaction_form = TransactionFormState::new();
            }
            ActiveDialog::SetBalance => {
                self.balance_form = BalanceFormState::new();
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the active dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Switch to the next tab
    pub fn next_tab(&mut self) {
        self.active_tab = match self.active_tab {
            ActiveTab::Forecast => ActiveTab::Sales,
            ActiveTab::Sales => ActiveTab::Forecast,
        };
        self.scroll_offset = 0;
    }

    /// Recompute the cached projection from stored state
    pub fn refresh_forecast(&mut self) {
        let service = TrackerService::new(self.storage);
        match service.forecast(self.settings.horizon_days) {
            Ok(entries) => {
                self.entries = entries;
                if self.scroll_offset >= self.entries.len() {
                    self.scroll_offset = self.entries.len().saturating_sub(1);
                }
            }
            Err(e) => self.set_status(format!("Forecast failed: {}", e)),
        }
    }

    /// Load sales records from a CSV file
    pub fn load_sales(&mut self, path: &Path) {
        match load_sales_csv(path) {
            Ok(result) => {
                self.sales_skipped = result.errors.len();
                self.sales = result.records;
                if self.sales_skipped > 0 {
                    self.set_status(format!("Skipped {} malformed rows", self.sales_skipped));
                }
            }
            Err(e) => self.set_status(format!("Could not load sales file: {}", e)),
        }
    }

    /// Scroll the forecast table down
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.entries.len() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll the forecast table up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
