//! Sales display formatting

use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::sales::{
    CategoryRevenue, MonthCategoryMatrix, MonthlyRevenue, RegionShare, SalesSummary,
};

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// Month name for a 1-based calendar month
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

/// Format the headline metrics block
pub fn format_sales_summary(summary: &SalesSummary, symbol: &str) -> String {
    format!(
        "Records:            {}\n\
         Total revenue:      {}\n\
         Total quantity:     {}\n\
         Average unit price: {}\n",
        summary.record_count,
        summary.total_revenue.format_with_symbol(symbol),
        summary.total_quantity,
        summary.average_unit_price.format_with_symbol(symbol)
    )
}

#[derive(Tabled)]
struct MonthlyRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Quantity")]
    quantity: u64,
}

/// Render the monthly revenue series as a text table
pub fn format_monthly_table(series: &[MonthlyRevenue], symbol: &str) -> String {
    if series.is_empty() {
        return "No sales data.\n".to_string();
    }

    let rows: Vec<MonthlyRow> = series
        .iter()
        .map(|m| MonthlyRow {
            month: format!("{}-{:02}", m.year, m.month),
            revenue: m.revenue.format_with_symbol(symbol),
            quantity: m.quantity,
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
}

/// Render the per-category breakdown as a text table
pub fn format_category_table(breakdown: &[CategoryRevenue], symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No sales data.\n".to_string();
    }

    let rows: Vec<CategoryRow> = breakdown
        .iter()
        .map(|c| CategoryRow {
            category: c.category.clone(),
            revenue: c.revenue.format_with_symbol(symbol),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Revenue")]
    revenue: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Render the per-region breakdown with shares as a text table
pub fn format_region_table(breakdown: &[RegionShare], symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No sales data.\n".to_string();
    }

    let rows: Vec<RegionRow> = breakdown
        .iter()
        .map(|r| RegionRow {
            region: r.region.clone(),
            revenue: r.revenue.format_with_symbol(symbol),
            share: format!("{:.1}%", r.share),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Render the month x category matrix as a text table
///
/// Columns vary with the data, so this goes through tabled's builder
/// instead of a derived row struct.
pub fn format_matrix_table(matrix: &MonthCategoryMatrix, symbol: &str) -> String {
    if matrix.months.is_empty() {
        return "No sales data.\n".to_string();
    }

    let mut builder = Builder::default();

    let mut header = vec!["Month".to_string()];
    header.extend(matrix.categories.iter().cloned());
    builder.push_record(header);

    for (row, month) in matrix.months.iter().enumerate() {
        let mut record = vec![month_name(*month).to_string()];
        record.extend(matrix.cells[row].iter().map(|m| m.format_with_symbol(symbol)));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    format!("{}\n", table)
}
