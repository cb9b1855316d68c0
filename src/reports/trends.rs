//! Monthly expense/income trends
//!
//! Buckets records by calendar month and sums each sign partition separately,
//! producing one chronological row per month with expenses reported as
//! positive magnitudes. Months with no records are zero-filled when they fall
//! strictly between the first and last observed month, keeping the time axis
//! continuous for charting; nothing is synthesized outside that range.

use std::collections::BTreeMap;
use std::io::Write;

use crate::display::chart;
use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Month, Record};

/// One month's expense and income totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRow {
    /// The calendar month
    pub month: Month,
    /// Total expenses in the month (positive magnitude)
    pub expenses: Money,
    /// Total income in the month
    pub income: Money,
}

/// Monthly expense/income series, chronological and gap-free
///
/// Pure function of the record sequence. Empty input yields an empty vec.
/// Records are assumed to carry valid dates; the storage layer filters out
/// rows whose dates don't parse.
pub fn monthly_trends(records: &[Record]) -> Vec<MonthRow> {
    // Month -> (expense magnitude, income)
    let mut buckets: BTreeMap<Month, (Money, Money)> = BTreeMap::new();

    for record in records {
        if let Some(magnitude) = record.expense_magnitude() {
            buckets.entry(record.month()).or_default().0 += magnitude;
        } else if record.is_income() {
            buckets.entry(record.month()).or_default().1 += record.amount;
        }
        // A zero amount (coerced from a malformed field) lands in neither bucket
    }

    let (first, last) = match (buckets.keys().next(), buckets.keys().next_back()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Vec::new(),
    };

    // Walk the continuous month span, zero-filling interior gaps
    let mut rows = Vec::new();
    let mut month = first;
    loop {
        let (expenses, income) = buckets.get(&month).copied().unwrap_or_default();
        rows.push(MonthRow {
            month,
            expenses,
            income,
        });

        if month == last {
            break;
        }
        month = month.succ();
    }

    rows
}

/// Monthly trends report
#[derive(Debug, Clone)]
pub struct TrendsReport {
    /// Chronological month rows
    pub rows: Vec<MonthRow>,
    /// Total expenses across all months (positive magnitude)
    pub total_expenses: Money,
    /// Total income across all months
    pub total_income: Money,
}

impl TrendsReport {
    /// Build a trends report from a record sequence
    pub fn from_records(records: &[Record]) -> Self {
        let rows = monthly_trends(records);
        let total_expenses = rows.iter().map(|r| r.expenses).sum();
        let total_income = rows.iter().map(|r| r.income).sum();

        Self {
            rows,
            total_expenses,
            total_income,
        }
    }

    /// Whether there is any monthly data to report
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    ///
    /// Each month gets a pair of bars (expenses above income), the
    /// terminal rendition of an income-vs-expenses line chart.
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Income vs. Expenses\n");
        output.push_str(&chart::separator(72));
        output.push('\n');

        if self.is_empty() {
            output.push_str("No monthly trend data to report.\n");
            return output;
        }

        let max = self
            .rows
            .iter()
            .flat_map(|r| [r.expenses, r.income])
            .max()
            .unwrap_or_default()
            .to_major_units();

        for row in &self.rows {
            output.push_str(&format!(
                "{}  out {:>12}  {}\n",
                row.month,
                row.expenses.format_with_symbol(symbol),
                chart::bar(row.expenses.to_major_units(), max, 30)
            ));
            output.push_str(&format!(
                "{:7}  in {:>13}  {}\n",
                "",
                row.income.format_with_symbol(symbol),
                chart::bar(row.income.to_major_units(), max, 30)
            ));
        }

        output.push_str(&chart::separator(72));
        output.push('\n');
        output.push_str(&format!(
            "Total expenses: {}   Total income: {}\n",
            self.total_expenses.format_with_symbol(symbol),
            self.total_income.format_with_symbol(symbol)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TallyResult<()> {
        writeln!(writer, "Month,Expenses,Income")
            .map_err(|e| TallyError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{:.2},{:.2}",
                row.month,
                row.expenses.to_major_units(),
                row.income.to_major_units()
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }

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

    fn month(year: i32, month: u32) -> Month {
        Month::new(year, month).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        assert!(monthly_trends(&[]).is_empty());
    }

    #[test]
    fn test_partitions_by_sign_and_month() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-20", "Income", 100000),
            record("2024-02-01", "Groceries", -3000),
        ];

        let rows = monthly_trends(&records);
        assert_eq!(
            rows,
            vec![
                MonthRow {
                    month: month(2024, 1),
                    expenses: Money::from_cents(5000),
                    income: Money::from_cents(100000),
                },
                MonthRow {
                    month: month(2024, 2),
                    expenses: Money::from_cents(3000),
                    income: Money::zero(),
                },
            ]
        );
    }

    #[test]
    fn test_zero_fills_interior_months() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-04-05", "Groceries", -3000),
        ];

        let rows = monthly_trends(&records);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].month, month(2024, 2));
        assert!(rows[1].expenses.is_zero() && rows[1].income.is_zero());
        assert_eq!(rows[2].month, month(2024, 3));
        assert!(rows[2].expenses.is_zero() && rows[2].income.is_zero());
        // Nothing synthesized outside the observed range
        assert_eq!(rows.first().unwrap().month, month(2024, 1));
        assert_eq!(rows.last().unwrap().month, month(2024, 4));
    }

    #[test]
    fn test_zero_fill_spans_year_boundary() {
        let records = vec![
            record("2023-11-15", "Utilities", -2000),
            record("2024-02-15", "Utilities", -2000),
        ];

        let rows = monthly_trends(&records);
        let months: Vec<Month> = rows.iter().map(|r| r.month).collect();
        assert_eq!(
            months,
            vec![
                month(2023, 11),
                month(2023, 12),
                month(2024, 1),
                month(2024, 2)
            ]
        );
    }

    #[test]
    fn test_coerced_zero_amounts_land_in_neither_bucket() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-10", "Other", 0),
        ];

        let rows = monthly_trends(&records);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].expenses, Money::from_cents(5000));
        assert!(rows[0].income.is_zero());
    }

    #[test]
    fn test_monthly_conservation() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-01-20", "Income", 100000),
            record("2024-02-01", "Utilities", -3000),
            record("2024-03-15", "Income", 20000),
        ];

        let report = TrendsReport::from_records(&records);
        let category_total: Money =
            crate::reports::category_totals(&records).values().copied().sum();
        let income_total: Money = records
            .iter()
            .filter(|r| r.is_income())
            .map(|r| r.amount)
            .sum();

        assert_eq!(report.total_expenses, category_total);
        assert_eq!(report.total_income, income_total);
    }

    #[test]
    fn test_empty_report_formatting() {
        let report = TrendsReport::from_records(&[]);
        assert!(report
            .format_terminal("$")
            .contains("No monthly trend data to report."));
    }

    #[test]
    fn test_export_csv() {
        let records = vec![
            record("2024-01-05", "Groceries", -5000),
            record("2024-02-20", "Income", 100000),
        ];
        let report = TrendsReport::from_records(&records);

        let mut buf = Vec::new();
        report.export_csv(&mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();

        assert!(csv.starts_with("Month,Expenses,Income\n"));
        assert!(csv.contains("2024-01,50.00,0.00"));
        assert!(csv.contains("2024-02,0.00,1000.00"));
    }
}
