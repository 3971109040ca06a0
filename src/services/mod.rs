//! Business logic layer
//!
//! - `forecast`: the pure projection engine
//! - `tracker`: validated add operations with write-through persistence
//! - `sales`: filtering and aggregation for the analytics dashboard
//! - `import`: sales CSV ingestion

pub mod forecast;
pub mod import;
pub mod sales;
pub mod tracker;

pub use forecast::project;
pub use import::{load_sales_csv, SalesColumnMapping, SalesImportResult};
pub use sales::{
    month_category_matrix, monthly_revenue, revenue_by_category, revenue_by_region, summarize,
    CategoryRevenue, MonthCategoryMatrix, MonthlyRevenue, RegionShare, SalesFilter, SalesSummary,
};
pub use tracker::TrackerService;
