//! Sales record model for the analytics dashboard

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single row of sales data ingested from CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub date: NaiveDate,
    pub category: String,
    pub region: String,
    /// Total revenue for the row
    pub revenue: Money,
    /// Units sold
    pub quantity: u64,
    /// Price per unit
    pub unit_price: Money,
}

impl SaleRecord {
    /// Calendar year of the sale
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month of the sale (1-12)
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month() {
        let record = SaleRecord {
            date: NaiveDate::from_ymd_opt(2024, 11, 5).unwrap(),
            category: "Electronics".into(),
            region: "North".into(),
            revenue: Money::from_major(1200),
            quantity: 3,
            unit_price: Money::from_major(400),
        };

        assert_eq!(record.year(), 2024);
        assert_eq!(record.month(), 11);
    }
}
