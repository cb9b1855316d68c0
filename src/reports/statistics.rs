//! Summary statistics over expense magnitudes
//!
//! Descriptive statistics computed over the multiset of absolute values of
//! all strictly negative amounts: total, count, mean, median, population
//! standard deviation, and the 75th percentile (linear interpolation between
//! closest ranks). When there are no expenses at all the engine returns
//! `None` so callers can show a neutral message instead of a degenerate
//! report.

use crate::display::chart;
use crate::models::{Money, Record};

/// Descriptive statistics over the expense magnitudes of a record sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Sum of all expense magnitudes (exact)
    pub total_expenses: Money,
    /// Number of expense records
    pub transaction_count: usize,
    /// Mean expense, in major currency units
    pub mean: f64,
    /// Median expense, in major currency units
    pub median: f64,
    /// Population standard deviation of expenses (divides by n, not n-1)
    pub std_dev: f64,
    /// 75th percentile of expenses, linearly interpolated
    pub p75: f64,
}

/// Compute summary statistics over a record sequence
///
/// Pure function: income and zero amounts are ignored entirely. Returns
/// `None` when the sequence contains no expenses.
pub fn summary_statistics(records: &[Record]) -> Option<SummaryStatistics> {
    let magnitudes: Vec<Money> = records
        .iter()
        .filter_map(Record::expense_magnitude)
        .collect();

    if magnitudes.is_empty() {
        return None;
    }

    let total_expenses: Money = magnitudes.iter().copied().sum();
    let n = magnitudes.len();

    let mut values: Vec<f64> = magnitudes.iter().map(Money::to_major_units).collect();
    values.sort_by(|a, b| a.total_cmp(b));

    let mean = values.iter().sum::<f64>() / n as f64;

    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

    Some(SummaryStatistics {
        total_expenses,
        transaction_count: n,
        mean,
        median: median_sorted(&values),
        std_dev: variance.sqrt(),
        p75: percentile_sorted(&values, 0.75),
    })
}

/// Median of an ascending-sorted, non-empty slice
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Percentile of an ascending-sorted, non-empty slice
///
/// Linear interpolation between closest ranks: rank = p * (n - 1).
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    let rank = p * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let weight = rank - lo as f64;
        sorted[lo] * (1.0 - weight) + sorted[hi] * weight
    }
}

impl SummaryStatistics {
    /// Format the statistics for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Summary Statistics\n");
        output.push_str(&chart::separator(72));
        output.push('\n');

        let money_line = |label: &str, value: f64| -> String {
            format!("  {:<24}: {}{:.2}\n", label, symbol, value)
        };

        output.push_str(&format!(
            "  {:<24}: {}\n",
            "Total Expenses",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  {:<24}: {}\n",
            "Number of Transactions", self.transaction_count
        ));
        output.push_str(&money_line("Mean Expense", self.mean));
        output.push_str(&money_line("Median Expense", self.median));
        output.push_str(&money_line("Std. Dev. of Expense", self.std_dev));
        output.push_str(&money_line("75th Percentile", self.p75));

        output
    }
}
