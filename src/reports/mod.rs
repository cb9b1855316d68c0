//! Reports module for Tally
//!
//! The pure aggregation and statistics engines live here, wrapped in report
//! types that add terminal formatting and CSV export: spending by category,
//! monthly expense/income trends, and summary statistics over expenses.

pub mod spending;
pub mod statistics;
pub mod trends;

pub use spending::{category_totals, CategoryRow, SpendingReport};
pub use statistics::{summary_statistics, SummaryStatistics};
pub use trends::{monthly_trends, MonthRow, TrendsReport};
