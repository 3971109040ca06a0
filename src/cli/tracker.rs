//! Tracker CLI commands
//!
//! Implements balance updates and the validated add operations for
//! recurring and one-time transactions.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::Settings;
use crate::error::{CashcastError, CashcastResult};
use crate::models::Money;
use crate::services::TrackerService;
use crate::storage::Storage;

/// Balance subcommands
#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Set the initial balance (also resets the current balance)
    Set {
        /// New balance (e.g. "1000.00" or "1000")
        amount: String,
    },
    /// Show the stored balances
    Show,
}

/// Recurring transaction subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a recurring monthly income
    AddIncome {
        /// Day of month (1-31)
        day: u32,
        /// Amount (e.g. "1000.00")
        amount: String,
        /// Description
        label: String,
        /// Display color
        #[arg(short, long, default_value = "green")]
        color: String,
    },
    /// Add a recurring monthly expense
    AddExpense {
        /// Day of month (1-31)
        day: u32,
        /// Amount (e.g. "1000.00")
        amount: String,
        /// Description
        label: String,
        /// Display color
        #[arg(short, long, default_value = "red")]
        color: String,
    },
    /// List recurring transactions
    List,
}

/// One-time transaction subcommands
#[derive(Subcommand)]
pub enum OneTimeCommands {
    /// Add a one-time income
    AddIncome {
        /// Amount (e.g. "500.00")
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short, long, default_value = "One-time Income")]
        label: String,
        /// Display color
        #[arg(short, long, default_value = "green")]
        color: String,
    },
    /// Add a one-time expense
    AddExpense {
        /// Amount (e.g. "500.00")
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short, long, default_value = "One-time Expense")]
        label: String,
        /// Display color
        #[arg(short, long, default_value = "red")]
        color: String,
    },
    /// List one-time transactions
    List,
}

fn parse_money(s: &str) -> CashcastResult<Money> {
    Money::parse(s)
        .map_err(|e| CashcastError::Config(format!("Invalid amount format: '{}'. {}", s, e)))
}

fn parse_date(s: Option<&str>) -> CashcastResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| CashcastError::Config(format!("Invalid date '{}': {}", s, e))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Handle a balance command
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BalanceCommands,
) -> CashcastResult<()> {
    let service = TrackerService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        BalanceCommands::Set { amount } => {
            let balance = parse_money(&amount)?;
            service.update_initial_balance(balance)?;
            println!("Balance set to {}", balance.format_with_symbol(symbol));
        }
        BalanceCommands::Show => {
            let state = storage.tracker.snapshot()?;
            println!(
                "Initial balance: {}",
                state.initial_balance.format_with_symbol(symbol)
            );
            println!(
                "Current balance: {}",
                state.current_balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Handle a recurring transaction command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> CashcastResult<()> {
    let service = TrackerService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        RecurringCommands::AddIncome {
            day,
            amount,
            label,
            color,
        } => {
            let amount = parse_money(&amount)?;
            service.add_monthly_income(day, amount, &label, &color)?;
            println!(
                "Added monthly income '{}' ({} on day {})",
                label,
                amount.format_with_symbol(symbol),
                day
            );
        }
        RecurringCommands::AddExpense {
            day,
            amount,
            label,
            color,
        } => {
            let amount = parse_money(&amount)?;
            service.add_monthly_expense(day, amount, &label, &color)?;
            println!(
                "Added monthly expense '{}' ({} on day {})",
                label,
                amount.format_with_symbol(symbol),
                day
            );
        }
        RecurringCommands::List => {
            let state = storage.tracker.snapshot()?;
            if !state.has_recurring() {
                println!("No recurring transactions.");
                return Ok(());
            }
            for txn in state.recurring() {
                println!(
                    "  day {:2}  {:>12}  {}  ({})",
                    txn.day,
                    txn.signed_amount().format_with_symbol(symbol),
                    txn.label,
                    txn.kind
                );
            }
        }
    }

    Ok(())
}

/// Handle a one-time transaction command
pub fn handle_onetime_command(
    storage: &Storage,
    settings: &Settings,
    cmd: OneTimeCommands,
) -> CashcastResult<()> {
    let service = TrackerService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        OneTimeCommands::AddIncome {
            amount,
            date,
            label,
            color,
        } => {
            let amount = parse_money(&amount)?;
            let date = parse_date(date.as_deref())?;
            service.add_income(amount, date, &label, &color)?;
            println!(
                "Added income '{}' ({} on {})",
                label,
                amount.format_with_symbol(symbol),
                date
            );
        }
        OneTimeCommands::AddExpense {
            amount,
            date,
            label,
            color,
        } => {
            let amount = parse_money(&amount)?;
            let date = parse_date(date.as_deref())?;
            service.add_expense(amount, date, &label, &color)?;
            println!(
                "Added expense '{}' ({} on {})",
                label,
                amount.format_with_symbol(symbol),
                date
            );
        }
        OneTimeCommands::List => {
            let state = storage.tracker.snapshot()?;
            if state.one_time_transactions.is_empty() {
                println!("No one-time transactions.");
                return Ok(());
            }
            for txn in &state.one_time_transactions {
                println!(
                    "  {}  {:>12}  {}",
                    txn.date,
                    txn.amount.format_with_symbol(symbol),
                    txn.label
                );
            }
        }
    }

    Ok(())
}
