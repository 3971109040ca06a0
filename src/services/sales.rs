//! Sales analytics
//!
//! Filtering and aggregation over ingested sales records: summary metrics,
//! monthly revenue series, per-category and per-region breakdowns, and the
//! month-by-category matrix behind the heatmap view.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Money, SaleRecord};

/// Filter criteria for a slice of sales records
///
/// Empty criteria match everything, so a default filter passes all records
/// through.
#[derive(Debug, Clone, Default)]
pub struct SalesFilter {
    /// Keep only these categories (all categories when empty)
    pub categories: Vec<String>,
    /// Keep only these regions (all regions when empty)
    pub regions: Vec<String>,
    /// Inclusive lower date bound
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound
    pub to: Option<NaiveDate>,
}

impl SalesFilter {
    /// Whether a record passes the filter
    pub fn matches(&self, record: &SaleRecord) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if !self.regions.is_empty() && !self.regions.contains(&record.region) {
            return false;
        }
        if let Some(from) = self.from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if record.date > to {
                return false;
            }
        }
        true
    }

    /// Apply the filter, preserving record order
    pub fn apply(&self, records: &[SaleRecord]) -> Vec<SaleRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Headline metrics for a filtered slice
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    pub total_revenue: Money,
    pub total_quantity: u64,
    /// Mean of the per-row unit prices
    pub average_unit_price: Money,
    pub record_count: usize,
}

/// Revenue for one calendar month of one year
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: Money,
    pub quantity: u64,
}

/// Total revenue for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRevenue {
    pub category: String,
    pub revenue: Money,
}

/// Revenue and share for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region: String,
    pub revenue: Money,
    /// Share of total revenue, 0-100
    pub share: f64,
}

/// Revenue per calendar month (rows) and category (columns)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthCategoryMatrix {
    /// Column labels, sorted
    pub categories: Vec<String>,
    /// Calendar months present (1-12), ascending; years are folded together
    pub months: Vec<u32>,
    /// `cells[row][col]` = revenue for months[row] x categories[col]
    pub cells: Vec<Vec<Money>>,
}

/// Compute headline metrics
pub fn summarize(records: &[SaleRecord]) -> SalesSummary {
    let total_revenue: Money = records.iter().map(|r| r.revenue).sum();
    let total_quantity: u64 = records.iter().map(|r| r.quantity).sum();
    let average_unit_price = if records.is_empty() {
        Money::zero()
    } else {
        let price_sum: i64 = records.iter().map(|r| r.unit_price.cents()).sum();
        Money::from_cents(price_sum / records.len() as i64)
    };

    SalesSummary {
        total_revenue,
        total_quantity,
        average_unit_price,
        record_count: records.len(),
    }
}

/// Aggregate revenue per (year, month), ascending
pub fn monthly_revenue(records: &[SaleRecord]) -> Vec<MonthlyRevenue> {
    let mut buckets: HashMap<(i32, u32), (Money, u64)> = HashMap::new();

    for record in records {
        let entry = buckets
            .entry((record.year(), record.month()))
            .or_insert((Money::zero(), 0));
        entry.0 += record.revenue;
        entry.1 += record.quantity;
    }

    let mut series: Vec<MonthlyRevenue> = buckets
        .into_iter()
        .map(|((year, month), (revenue, quantity))| MonthlyRevenue {
            year,
            month,
            revenue,
            quantity,
        })
        .collect();
    series.sort_by_key(|m| (m.year, m.month));
    series
}

/// Aggregate revenue per category, descending by revenue
///
/// Ties break alphabetically so the ordering is deterministic.
pub fn revenue_by_category(records: &[SaleRecord]) -> Vec<CategoryRevenue> {
    let mut buckets: HashMap<String, Money> = HashMap::new();

    for record in records {
        *buckets.entry(record.category.clone()).or_insert(Money::zero()) += record.revenue;
    }

    let mut breakdown: Vec<CategoryRevenue> = buckets
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue { category, revenue })
        .collect();
    breakdown.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.category.cmp(&b.category)));
    breakdown
}

/// Aggregate revenue per region with percentage shares, descending
pub fn revenue_by_region(records: &[SaleRecord]) -> Vec<RegionShare> {
    let mut buckets: HashMap<String, Money> = HashMap::new();

    for record in records {
        *buckets.entry(record.region.clone()).or_insert(Money::zero()) += record.revenue;
    }

    let total: Money = buckets.values().copied().sum();

    let mut breakdown: Vec<RegionShare> = buckets
        .into_iter()
        .map(|(region, revenue)| {
            let share = if total.is_zero() {
                0.0
            } else {
                revenue.cents() as f64 / total.cents() as f64 * 100.0
            };
            RegionShare {
                region,
                revenue,
                share,
            }
        })
        .collect();
    breakdown.sort_by(|a, b| b.revenue.cmp(&a.revenue).then(a.region.cmp(&b.region)));
    breakdown
}

/// Build the month x category revenue matrix
///
/// Months are calendar months folded across years (January of any year lands
/// in the same row), matching the heatmap the dashboard renders.
pub fn month_category_matrix(records: &[SaleRecord]) -> MonthCategoryMatrix {
    let mut buckets: HashMap<(u32, String), Money> = HashMap::new();
    for record in records {
        *buckets
            .entry((record.month(), record.category.clone()))
            .or_insert(Money::zero()) += record.revenue;
    }

    let mut categories: Vec<String> = buckets.keys().map(|(_, c)| c.clone()).collect();
    categories.sort();
    categories.dedup();

    let mut months: Vec<u32> = buckets.keys().map(|(m, _)| *m).collect();
    months.sort_unstable();
    months.dedup();

    let cells = months
        .iter()
        .map(|month| {
            categories
                .iter()
                .map(|category| {
                    buckets
                        .get(&(*month, category.clone()))
                        .copied()
                        .unwrap_or(Money::zero())
                })
                .collect()
        })
        .collect();

    MonthCategoryMatrix {
        categories,
        months,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(date: (i32, u32, u32), category: &str, region: &str, revenue: i64, qty: u64) -> SaleRecord {
        SaleRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            category: category.into(),
            region: region.into(),
            revenue: Money::from_major(revenue),
            quantity: qty,
            unit_price: Money::from_cents(if qty > 0 { revenue * 100 / qty as i64 } else { 0 }),
        }
    }

    fn sample() -> Vec<SaleRecord> {
        vec![
            sale((2024, 1, 10), "Electronics", "North", 1000, 5),
            sale((2024, 1, 20), "Clothing", "South", 400, 20),
            sale((2024, 2, 5), "Electronics", "South", 600, 3),
            sale((2025, 1, 7), "Books", "North", 200, 10),
        ]
    }

    #[test]
    fn test_filter_by_category_and_region() {
        let records = sample();
        let filter = SalesFilter {
            categories: vec!["Electronics".into()],
            regions: vec!["South".into()],
            ..Default::default()
        };

        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].revenue, Money::from_major(600));
    }

    #[test]
    fn test_filter_by_date_range_inclusive() {
        let records = sample();
        let filter = SalesFilter {
            from: Some(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
            to: Some(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()),
            ..Default::default()
        };

        let filtered = filter.apply(&records);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_filter_passes_everything() {
        let records = sample();
        assert_eq!(SalesFilter::default().apply(&records).len(), records.len());
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&sample());
        assert_eq!(summary.total_revenue, Money::from_major(2200));
        assert_eq!(summary.total_quantity, 38);
        assert_eq!(summary.record_count, 4);
    }

    #[test]
    fn test_summary_empty_slice() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_revenue, Money::zero());
        assert_eq!(summary.average_unit_price, Money::zero());
    }

    #[test]
    fn test_monthly_revenue_sorted() {
        let series = monthly_revenue(&sample());
        assert_eq!(series.len(), 3);
        assert_eq!((series[0].year, series[0].month), (2024, 1));
        assert_eq!(series[0].revenue, Money::from_major(1400));
        assert_eq!((series[1].year, series[1].month), (2024, 2));
        assert_eq!((series[2].year, series[2].month), (2025, 1));
    }

    #[test]
    fn test_revenue_by_category_descending() {
        let breakdown = revenue_by_category(&sample());
        assert_eq!(breakdown[0].category, "Electronics");
        assert_eq!(breakdown[0].revenue, Money::from_major(1600));
        assert_eq!(breakdown[1].category, "Clothing");
        assert_eq!(breakdown[2].category, "Books");
    }

    #[test]
    fn test_revenue_by_region_shares() {
        let breakdown = revenue_by_region(&sample());
        assert_eq!(breakdown[0].region, "North");
        assert_eq!(breakdown[0].revenue, Money::from_major(1200));

        let total_share: f64 = breakdown.iter().map(|r| r.share).sum();
        assert!((total_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_category_matrix_folds_years() {
        let matrix = month_category_matrix(&sample());
        assert_eq!(matrix.months, vec![1, 2]);
        assert_eq!(matrix.categories, vec!["Books", "Clothing", "Electronics"]);

        // January across both years: Books 200, Clothing 400, Electronics 1000
        assert_eq!(
            matrix.cells[0],
            vec![
                Money::from_major(200),
                Money::from_major(400),
                Money::from_major(1000)
            ]
        );
        // February: Electronics only
        assert_eq!(matrix.cells[1][2], Money::from_major(600));
        assert_eq!(matrix.cells[1][0], Money::zero());
    }
}
