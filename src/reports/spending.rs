//! Spending by category
//!
//! Aggregates total spending per category: expenses only (negative amounts),
//! summed per category and reported as positive magnitudes. Income never
//! contributes, and no entry is produced for a category without expenses.

use std::collections::HashMap;
use std::io::Write;

use crate::display::chart;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Record};

/// Total absolute expense per category
///
/// Pure function of the record sequence: filters to expenses (amount < 0),
/// groups by category, and sums magnitudes. Empty input yields an empty map.
/// The map carries no ordering; display sorting is a presenter concern.
pub fn category_totals(records: &[Record]) -> HashMap<String, Money> {
    let mut totals: HashMap<String, Money> = HashMap::new();

    for record in records {
        if let Some(magnitude) = record.expense_magnitude() {
            *totals.entry(record.category.clone()).or_default() += magnitude;
        }
    }

    totals
}

/// One category's spending within a report
#[derive(Debug, Clone)]
pub struct CategoryRow {
    /// Category name
    pub category: String,
    /// Total spending in this category (positive magnitude)
    pub total: Money,
    /// Number of expense records in this category
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending report: per-category totals sorted by magnitude descending
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Per-category rows, highest spending first
    pub rows: Vec<CategoryRow>,
    /// Total spending across all categories (positive magnitude)
    pub total_spending: Money,
    /// Total number of expense records
    pub transaction_count: usize,
}

impl SpendingReport {
    /// Build a spending report from a record sequence
    pub fn from_records(records: &[Record]) -> Self {
        let totals = category_totals(records);

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for record in records.iter().filter(|r| r.is_expense()) {
            *counts.entry(record.category.as_str()).or_default() += 1;
        }

        let total_spending: Money = totals.values().copied().sum();
        let transaction_count = counts.values().sum();

        let mut rows: Vec<CategoryRow> = totals
            .into_iter()
            .map(|(category, total)| {
                let percentage = if total_spending.is_zero() {
                    0.0
                } else {
                    (total.cents() as f64 / total_spending.cents() as f64) * 100.0
                };
                CategoryRow {
                    transaction_count: counts.get(category.as_str()).copied().unwrap_or(0),
                    category,
                    total,
                    percentage,
                }
            })
            .collect();

        // Highest spending first; name breaks ties deterministically
        rows.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));

        Self {
            rows,
            total_spending,
            transaction_count,
        }
    }

    /// Whether there is any spending to report
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display, with a bar per category
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Spending by Category\n");
        output.push_str(&chart::separator(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No expense records to report.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<22} {:>12} {:>6} {:>7}\n",
            "Category", "Amount", "Count", "%"
        ));

        let max = self.rows[0].total.to_major_units();
        for row in &self.rows {
            output.push_str(&format!(
                "{:<22} {:>12} {:>6} {:>7}  {}\n",
                chart::truncate(&row.category, 22),
                row.total.format_with_symbol(symbol),
                row.transaction_count,
                chart::format_percentage(row.percentage),
                chart::bar(row.total.to_major_units(), max, 20)
            ));
        }

        output.push_str(&chart::separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12} {:>6}\n",
            "TOTAL",
            self.total_spending.format_with_symbol(symbol),
            self.transaction_count
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Category,Amount,Transaction Count,Percentage")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{},{:.2}",
                row.category,
                row.total.to_major_units(),
                row.transaction_count,
                row.percentage
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "TOTAL,{:.2},{},100.00",
            self.total_spending.to_major_units(),
            self.transaction_count
        )
        .map_err(|e| TallyError::Export(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: &str, category: &str, cents: i64) -> Record {
        Record::unchecked(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            Money::from_cents(cents),
        )
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_groups_expenses_by_category() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-20", "Income", 100000),
            record("2024-02-01", "Groceries", -3000),
        ];

        let totals = category_totals(&records);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals["Groceries"], Money::from_cents(8000));
    }

    #[test]
    fn test_income_and_zero_amounts_excluded() {
        let records = vec![
            record("2024-01-05", "Income", 100000),
            record("2024-01-06", "Other", 0),
        ];

        // Neither income nor a coerced zero amount fabricates a category entry
        assert!(category_totals(&records).is_empty());
    }

    #[test]
    fn test_sign_partition_conservation() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-06", "Utilities", -2599),
            record("2024-01-07", "Groceries", -401),
            record("2024-01-20", "Income", 100000),
        ];

        let totals = category_totals(&records);
        let total: Money = totals.values().copied().sum();
        let negative_sum: Money = records
            .iter()
            .filter(|r| r.is_expense())
            .map(|r| r.amount)
            .sum();
        assert_eq!(total, -negative_sum);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-06", "Utilities", -2500),
        ];

        assert_eq!(category_totals(&records), category_totals(&records));
    }

    #[test]
    fn test_report_rows_sorted_by_magnitude() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-06", "Utilities", -9000),
            record("2024-01-07", "Transportation", -1000),
        ];

        let report = SpendingReport::from_records(&records);
        let names: Vec<&str> = report.rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(names, vec!["Utilities", "Groceries", "Transportation"]);
        assert_eq!(report.total_spending, Money::from_cents(15000));
        assert_eq!(report.transaction_count, 3);
    }

    #[test]
    fn test_report_percentages() {
        let records = vec![
            record("2024-01-05", "Groceries", -7500),
            record("2024-01-06", "Utilities", -2500),
        ];

        let report = SpendingReport::from_records(&records);
        assert!((report.rows[0].percentage - 75.0).abs() < 1e-9);
        assert!((report.rows[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report_formatting() {
        let report = SpendingReport::from_records(&[]);
        assert!(report.is_empty());
        assert!(report
            .format_terminal("$")
            .contains("No expense records to report."));
    }

    #[test]
    fn test_export_csv() {
        let records = vec![record("2024-01-05", "Groceries", -5000)];
        let report = SpendingReport::from_records(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Category,Amount,Transaction Count,Percentage\n"));
        assert!(csv.contains("Groceries,50.00,1,100.00"));
        assert!(csv.contains("TOTAL,50.00,1,100.00"));
    }
}
