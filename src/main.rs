use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashcast::cli::{
    handle_balance_command, handle_forecast_command, handle_onetime_command,
    handle_recurring_command, handle_sales_command, BalanceCommands, OneTimeCommands,
    RecurringCommands, SalesCommands,
};
use cashcast::config::{paths::CashcastPaths, settings::Settings};
use cashcast::storage::Storage;

#[derive(Parser)]
#[command(
    name = "cashcast",
    version,
    about = "Terminal cash-flow forecasting and sales analytics",
    long_about = "cashcast projects your balance day by day from recurring monthly \
                  income and expenses plus one-off transactions, and doubles as a \
                  sales analytics dashboard for CSV exports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard
    #[command(alias = "ui")]
    Tui {
        /// Sales CSV to load into the sales tab
        #[arg(long)]
        sales: Option<PathBuf>,
    },

    /// Balance management commands
    #[command(subcommand)]
    Balance(BalanceCommands),

    /// Recurring monthly transaction commands
    #[command(subcommand, alias = "monthly")]
    Recurring(RecurringCommands),

    /// One-time transaction commands
    #[command(subcommand)]
    Onetime(OneTimeCommands),

    /// Project the balance curve and print it
    Forecast {
        /// Days to project (defaults to the configured horizon)
        #[arg(short = 'n', long = "days")]
        horizon: Option<u32>,
        /// Start date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        from: Option<String>,
    },

    /// Sales analytics commands
    #[command(subcommand)]
    Sales(SalesCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CashcastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Tui { sales }) => {
            cashcast::tui::run_tui(&storage, &settings, sales.as_deref())?;
        }
        Some(Commands::Balance(cmd)) => {
            handle_balance_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Onetime(cmd)) => {
            handle_onetime_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Forecast { horizon, from }) => {
            handle_forecast_command(&storage, &settings, horizon, from)?;
        }
        Some(Commands::Sales(cmd)) => {
            handle_sales_command(&settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("cashcast Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Horizon (days):  {}", settings.horizon_days);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("cashcast - Terminal cash-flow forecasting");
            println!();
            println!("Run 'cashcast --help' for usage information.");
            println!("Run 'cashcast tui' to launch the interactive dashboard.");
        }
    }

    Ok(())
}
