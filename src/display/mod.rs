//! Terminal display formatting for CLI output

pub mod forecast;
pub mod sales;

pub use forecast::{forecast_rows, format_forecast_summary, format_forecast_table, ForecastRow};
pub use sales::{
    format_category_table, format_matrix_table, format_monthly_table, format_region_table,
    format_sales_summary, month_name,
};
