//! Sales analytics CLI commands

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display;
use crate::error::{CashcastError, CashcastResult};
use crate::services::sales::{
    month_category_matrix, monthly_revenue, revenue_by_category, revenue_by_region, summarize,
    SalesFilter,
};
use crate::services::{load_sales_csv, SalesImportResult};

/// Filter flags shared by every sales subcommand
#[derive(Args, Clone)]
pub struct SalesFilterArgs {
    /// Only include these categories (repeatable)
    #[arg(long)]
    pub category: Vec<String>,
    /// Only include these regions (repeatable)
    #[arg(long)]
    pub region: Vec<String>,
    /// Earliest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Latest date to include (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

impl SalesFilterArgs {
    fn into_filter(self) -> CashcastResult<SalesFilter> {
        Ok(SalesFilter {
            categories: self.category,
            regions: self.region,
            from: parse_opt_date(self.from.as_deref())?,
            to: parse_opt_date(self.to.as_deref())?,
        })
    }
}

fn parse_opt_date(s: Option<&str>) -> CashcastResult<Option<NaiveDate>> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| CashcastError::Config(format!("Invalid date '{}': {}", s, e))),
        None => Ok(None),
    }
}

/// Sales subcommands
#[derive(Subcommand)]
pub enum SalesCommands {
    /// Headline metrics: revenue, quantity, average unit price
    Summary {
        /// Path to the sales CSV file
        file: PathBuf,
        #[command(flatten)]
        filter: SalesFilterArgs,
    },
    /// Monthly revenue series
    Monthly {
        /// Path to the sales CSV file
        file: PathBuf,
        #[command(flatten)]
        filter: SalesFilterArgs,
    },
    /// Revenue per category, highest first
    Categories {
        /// Path to the sales CSV file
        file: PathBuf,
        #[command(flatten)]
        filter: SalesFilterArgs,
    },
    /// Revenue and share per region
    Regions {
        /// Path to the sales CSV file
        file: PathBuf,
        #[command(flatten)]
        filter: SalesFilterArgs,
    },
    /// Month-by-category revenue matrix
    Matrix {
        /// Path to the sales CSV file
        file: PathBuf,
        #[command(flatten)]
        filter: SalesFilterArgs,
    },
}

fn report_import_errors(result: &SalesImportResult) {
    for (line, message) in &result.errors {
        eprintln!("Warning: skipped line {}: {}", line, message);
    }
}

/// Handle a sales command
pub fn handle_sales_command(settings: &Settings, cmd: SalesCommands) -> CashcastResult<()> {
    let symbol = &settings.currency_symbol;

    match cmd {
        SalesCommands::Summary { file, filter } => {
            let result = load_sales_csv(&file)?;
            report_import_errors(&result);
            let records = filter.into_filter()?.apply(&result.records);
            print!("{}", display::format_sales_summary(&summarize(&records), symbol));
        }
        SalesCommands::Monthly { file, filter } => {
            let result = load_sales_csv(&file)?;
            report_import_errors(&result);
            let records = filter.into_filter()?.apply(&result.records);
            print!("{}", display::format_monthly_table(&monthly_revenue(&records), symbol));
        }
        SalesCommands::Categories { file, filter } => {
            let result = load_sales_csv(&file)?;
            report_import_errors(&result);
            let records = filter.into_filter()?.apply(&result.records);
            print!(
                "{}",
                display::format_category_table(&revenue_by_category(&records), symbol)
            );
        }
        SalesCommands::Regions { file, filter } => {
            let result = load_sales_csv(&file)?;
            report_import_errors(&result);
            let records = filter.into_filter()?.apply(&result.records);
            print!("{}", display::format_region_table(&revenue_by_region(&records), symbol));
        }
        SalesCommands::Matrix { file, filter } => {
            let result = load_sales_csv(&file)?;
            report_import_errors(&result);
            let records = filter.into_filter()?.apply(&result.records);
            print!(
                "{}",
                display::format_matrix_table(&month_category_matrix(&records), symbol)
            );
        }
    }

    Ok(())
}
