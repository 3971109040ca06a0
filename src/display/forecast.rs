//! Forecast display formatting
//!
//! Flattens projected ledger entries into table rows: one row per applied
//! transaction, and a single placeholder row for dates with no activity.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{LedgerEntry, Money};

/// One row of the forecast table
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ForecastRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Transaction")]
    pub transaction: String,
    #[tabled(rename = "Income")]
    pub income: String,
    #[tabled(rename = "Expense")]
    pub expense: String,
    #[tabled(rename = "Balance")]
    pub balance: String,
}

/// Flatten ledger entries into display rows
///
/// Every row of a date repeats that date's closing balance; empty dates
/// produce a "-" placeholder row with zero income and expense. Amounts
/// honor the configured currency symbol.
pub fn forecast_rows(entries: &[LedgerEntry], symbol: &str) -> Vec<ForecastRow> {
    let mut rows = Vec::new();

    for entry in entries {
        let date = entry.date.format("%Y-%m-%d").to_string();
        let balance = entry.balance.format_with_symbol(symbol);

        if entry.transactions.is_empty() {
            rows.push(ForecastRow {
                date,
                transaction: "-".to_string(),
                income: Money::zero().format_with_symbol(symbol),
                expense: Money::zero().format_with_symbol(symbol),
                balance,
            });
            continue;
        }

        for txn in &entry.transactions {
            let (income, expense) = if txn.amount.is_positive() {
                (txn.amount, Money::zero())
            } else {
                (Money::zero(), txn.amount.abs())
            };

            rows.push(ForecastRow {
                date: date.clone(),
                transaction: txn.label.clone(),
                income: income.format_with_symbol(symbol),
                expense: expense.format_with_symbol(symbol),
                balance: balance.clone(),
            });
        }
    }

    rows
}

/// Render the forecast as a text table
pub fn format_forecast_table(entries: &[LedgerEntry], symbol: &str) -> String {
    if entries.is_empty() {
        return "No forecast entries.\n".to_string();
    }

    let mut table = Table::new(forecast_rows(entries, symbol));
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// One-line summary of a projection
pub fn format_forecast_summary(entries: &[LedgerEntry], symbol: &str) -> String {
    match entries.last() {
        Some(last) => format!(
            "{} days projected, final balance {} on {}\n",
            entries.len(),
            last.balance.format_with_symbol(symbol),
            last.date.format("%Y-%m-%d")
        ),
        None => "No forecast entries.\n".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppliedTransaction;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    #[test]
    fn test_empty_day_gets_placeholder_row() {
        let entries = vec![LedgerEntry {
            date: date(1),
            transactions: vec![],
            balance: Money::from_major(100),
        }];

        let rows = forecast_rows(&entries, "$");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].transaction, "-");
        assert_eq!(rows[0].income, "$0.00");
        assert_eq!(rows[0].expense, "$0.00");
        assert_eq!(rows[0].balance, "$100.00");
    }

    #[test]
    fn test_one_row_per_transaction_with_shared_balance() {
        let entries = vec![LedgerEntry {
            date: date(2),
            transactions: vec![
                AppliedTransaction {
                    label: "Salary".into(),
                    amount: Money::from_major(300),
                    color: "green".into(),
                },
                AppliedTransaction {
                    label: "Rent".into(),
                    amount: -Money::from_major(120),
                    color: "red".into(),
                },
            ],
            balance: Money::from_major(180),
        }];

        let rows = forecast_rows(&entries, "$");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].income, "$300.00");
        assert_eq!(rows[0].expense, "$0.00");
        assert_eq!(rows[1].income, "$0.00");
        assert_eq!(rows[1].expense, "$120.00");
        assert_eq!(rows[0].balance, rows[1].balance);
    }

    #[test]
    fn test_table_renders_headers() {
        let entries = vec![LedgerEntry {
            date: date(1),
            transactions: vec![],
            balance: Money::zero(),
        }];

        let table = format_forecast_table(&entries, "$");
        for header in ["Date", "Transaction", "Income", "Expense", "Balance"] {
            assert!(table.contains(header));
        }
    }

    #[test]
    fn test_summary_line() {
        let entries = vec![LedgerEntry {
            date: date(5),
            transactions: vec![],
            balance: Money::from_major(42),
        }];

        let summary = format_forecast_summary(&entries, "$");
        assert!(summary.contains("1 days projected"));
        assert!(summary.contains("$42.00"));
        assert!(summary.contains("2025-01-05"));
    }

    #[test]
    fn test_configured_symbol_flows_through() {
        let entries = vec![LedgerEntry {
            date: date(5),
            transactions: vec![AppliedTransaction {
                label: "Salary".into(),
                amount: Money::from_major(300),
                color: "green".into(),
            }],
            balance: Money::from_major(342),
        }];

        let rows = forecast_rows(&entries, "€");
        assert_eq!(rows[0].income, "€300.00");
        assert_eq!(rows[0].balance, "€342.00");
        assert!(format_forecast_summary(&entries, "€").contains("€342.00"));
    }
}
