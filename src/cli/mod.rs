//! Command-line interface handlers

pub mod forecast;
pub mod sales;
pub mod tracker;

pub use forecast::handle_forecast_command;
pub use sales::{handle_sales_command, SalesCommands};
pub use tracker::{
    handle_balance_command, handle_onetime_command, handle_recurring_command, BalanceCommands,
    OneTimeCommands, RecurringCommands,
};
