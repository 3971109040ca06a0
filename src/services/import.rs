//! Sales CSV ingestion
//!
//! Loads sales data from CSV files with configurable column mapping,
//! header auto-detection, multi-format date parsing, and tolerant amount
//! parsing. Unparseable rows are collected as row-level errors rather than
//! aborting the whole load.

use std::path::Path;

use chrono::NaiveDate;
use csv::{Reader, StringRecord};

use crate::error::{CashcastError, CashcastResult};
use crate::models::{Money, SaleRecord};

/// Column mapping configuration for sales CSV files
#[derive(Debug, Clone)]
pub struct SalesColumnMapping {
    pub date_column: usize,
    pub category_column: usize,
    pub region_column: usize,
    pub revenue_column: usize,
    pub quantity_column: usize,
    /// Unit price column; derived from revenue/quantity when absent
    pub unit_price_column: Option<usize>,
    /// Primary date format (strftime); common alternatives are tried too
    pub date_format: String,
}

impl Default for SalesColumnMapping {
    fn default() -> Self {
        Self {
            date_column: 0,
            category_column: 1,
            region_column: 2,
            revenue_column: 3,
            quantity_column: 4,
            unit_price_column: Some(5),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl SalesColumnMapping {
    /// Detect a column mapping from a CSV header record
    ///
    /// Recognizes both English and Russian column names (the source data
    /// ships with Russian headers).
    pub fn detect(headers: &StringRecord) -> Self {
        let mut mapping = Self {
            unit_price_column: None,
            ..Self::default()
        };

        for (idx, header) in headers.iter().enumerate() {
            let h = header.to_lowercase();
            let h = h.trim();

            if h.contains("date") || h.contains("дата") {
                mapping.date_column = idx;
            } else if h.contains("categ") || h.contains("категор") {
                mapping.category_column = idx;
            } else if h.contains("region") || h.contains("регион") {
                mapping.region_column = idx;
            } else if h.contains("price") || h.contains("цена") {
                // Checked before revenue: "Средняя цена" must not match sales
                mapping.unit_price_column = Some(idx);
            } else if h.contains("revenue") || h.contains("sales") || h.contains("продаж") {
                mapping.revenue_column = idx;
            } else if h.contains("quantity") || h.contains("qty") || h.contains("units")
                || h.contains("количество")
            {
                mapping.quantity_column = idx;
            }
        }

        mapping
    }
}

/// Result of loading a sales CSV
#[derive(Debug, Clone, Default)]
pub struct SalesImportResult {
    /// Successfully parsed rows, in file order
    pub records: Vec<SaleRecord>,
    /// (row number, message) pairs for rows that failed to parse
    pub errors: Vec<(usize, String)>,
}

/// Load sales records from a CSV file, detecting the column mapping from
/// the header row
pub fn load_sales_csv<P: AsRef<Path>>(path: P) -> CashcastResult<SalesImportResult> {
    let path = path.as_ref();
    let mut reader = Reader::from_path(path)
        .map_err(|e| CashcastError::Csv(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| CashcastError::Csv(format!("Failed to read headers: {}", e)))?
        .clone();
    let mapping = SalesColumnMapping::detect(&headers);

    read_sales(&mut reader, &mapping)
}

/// Read sales records using an explicit column mapping
pub fn read_sales<R: std::io::Read>(
    reader: &mut Reader<R>,
    mapping: &SalesColumnMapping,
) -> CashcastResult<SalesImportResult> {
    let mut result = SalesImportResult::default();

    for (idx, row) in reader.records().enumerate() {
        let record = match row {
            Ok(record) => record,
            Err(e) => {
                result.errors.push((idx, format!("Error reading CSV record: {}", e)));
                continue;
            }
        };

        match parse_record(&record, mapping) {
            Ok(sale) => result.records.push(sale),
            Err(e) => result.errors.push((idx, e)),
        }
    }

    Ok(result)
}

/// Parse a single CSV record into a sale
fn parse_record(record: &StringRecord, mapping: &SalesColumnMapping) -> Result<SaleRecord, String> {
    let date_str = field(record, mapping.date_column, "date")?;
    let date = parse_date(date_str, &mapping.date_format)?;

    let category = field(record, mapping.category_column, "category")?.to_string();
    let region = field(record, mapping.region_column, "region")?.to_string();

    let revenue = parse_amount(field(record, mapping.revenue_column, "revenue")?)?;

    let quantity: u64 = field(record, mapping.quantity_column, "quantity")?
        .replace([' ', ','], "")
        .parse()
        .map_err(|_| format!("Could not parse quantity in row: {:?}", record))?;

    let unit_price = match mapping.unit_price_column {
        Some(col) => parse_amount(field(record, col, "unit price")?)?,
        None if quantity > 0 => Money::from_cents(revenue.cents() / quantity as i64),
        None => Money::zero(),
    };

    Ok(SaleRecord {
        date,
        category,
        region,
        revenue,
        quantity,
        unit_price,
    })
}

fn field<'a>(record: &'a StringRecord, column: usize, name: &str) -> Result<&'a str, String> {
    record
        .get(column)
        .map(str::trim)
        .ok_or_else(|| format!("Missing {} column", name))
}

/// Parse a date string using multiple format attempts
fn parse_date(s: &str, primary_format: &str) -> Result<NaiveDate, String> {
    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Ok(date);
    }

    let formats = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d"];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("Could not parse date: '{}'", s))
}

/// Parse an amount string, tolerating currency symbols and separators
fn parse_amount(s: &str) -> Result<Money, String> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    Money::parse(&cleaned).map_err(|e| format!("Could not parse amount '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader_from(data: &str) -> Reader<&[u8]> {
        Reader::from_reader(data.as_bytes())
    }

    #[test]
    fn test_parse_english_headers() {
        let csv_data = "Date,Category,Region,Sales,Quantity,Price\n\
                        2024-01-15,Electronics,North,1200.00,3,400.00\n\
                        2024-02-20,Clothing,South,300.50,10,30.05";
        let mut reader = reader_from(csv_data);
        let mapping = SalesColumnMapping::detect(&reader.headers().unwrap().clone());
        let result = read_sales(&mut reader, &mapping).unwrap();

        assert!(result.errors.is_empty());
        assert_eq!(result.records.len(), 2);

        let first = &result.records[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(first.category, "Electronics");
        assert_eq!(first.region, "North");
        assert_eq!(first.revenue, Money::from_cents(120000));
        assert_eq!(first.quantity, 3);
        assert_eq!(first.unit_price, Money::from_cents(40000));
    }

    #[test]
    fn test_detect_russian_headers() {
        let csv_data = "Дата,Категория,Регион,Продажи,Количество,Средняя цена\n\
                        15.01.2024,Электроника,Север,1200,3,400";
        let mut reader = reader_from(csv_data);
        let mapping = SalesColumnMapping::detect(&reader.headers().unwrap().clone());

        assert_eq!(mapping.date_column, 0);
        assert_eq!(mapping.category_column, 1);
        assert_eq!(mapping.region_column, 2);
        assert_eq!(mapping.revenue_column, 3);
        assert_eq!(mapping.quantity_column, 4);
        assert_eq!(mapping.unit_price_column, Some(5));

        let result = read_sales(&mut reader, &mapping).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(
            result.records[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_unit_price_derived_when_column_missing() {
        let csv_data = "Date,Category,Region,Sales,Quantity\n\
                        2024-01-15,Books,West,100.00,4";
        let mut reader = reader_from(csv_data);
        let mapping = SalesColumnMapping::detect(&reader.headers().unwrap().clone());
        assert!(mapping.unit_price_column.is_none());

        let result = read_sales(&mut reader, &mapping).unwrap();
        assert_eq!(result.records[0].unit_price, Money::from_cents(2500));
    }

    #[test]
    fn test_bad_rows_collected_not_fatal() {
        let csv_data = "Date,Category,Region,Sales,Quantity,Price\n\
                        not-a-date,Electronics,North,100,1,100\n\
                        2024-03-01,Clothing,East,50.00,2,25.00";
        let mut reader = reader_from(csv_data);
        let mapping = SalesColumnMapping::detect(&reader.headers().unwrap().clone());
        let result = read_sales(&mut reader, &mapping).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, 0);
        assert!(result.errors[0].1.contains("not-a-date"));
    }

    #[test]
    fn test_amount_with_symbols_and_separators() {
        assert_eq!(parse_amount("1 200.50 ₽").unwrap(), Money::from_cents(120050));
        assert_eq!(parse_amount("1,200.50").unwrap(), Money::from_cents(120050));
        assert_eq!(parse_amount("$1200.50").unwrap(), Money::from_cents(120050));
    }
}
