//! Forecast CLI command

use chrono::{Local, NaiveDate};

use crate::config::Settings;
use crate::display;
use crate::error::{CashcastError, CashcastResult};
use crate::services::TrackerService;
use crate::storage::Storage;

/// Handle the forecast command
///
/// Projects the balance curve and prints it as a table followed by a
/// one-line summary. `horizon` falls back to the configured default.
pub fn handle_forecast_command(
    storage: &Storage,
    settings: &Settings,
    horizon: Option<u32>,
    from: Option<String>,
) -> CashcastResult<()> {
    let service = TrackerService::new(storage);
    let horizon = horizon.unwrap_or(settings.horizon_days);

    let start = match from {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|e| CashcastError::Config(format!("Invalid date '{}': {}", s, e)))?,
        None => Local::now().date_naive(),
    };

    let entries = service.forecast_from(horizon, start)?;

    print!(
        "{}",
        display::format_forecast_table(&entries, &settings.currency_symbol)
    );
    print!(
        "{}",
        display::format_forecast_summary(&entries, &settings.currency_symbol)
    );

    Ok(())
}
