//! Ledger records
//!
//! A record is one line of the ledger: a date, a category, and a signed
//! amount. The sign convention runs through the whole system: negative
//! amounts are expenses, positive amounts are income. Records have no
//! identity beyond their fields; duplicates are meaningful (two same-day
//! same-category expenses are two records).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::month::Month;
use crate::error::{TallyError, TallyResult};

/// A single dated, categorized ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Date of the transaction
    pub date: NaiveDate,
    /// Category name (free text; usually one of the configured categories)
    pub category: String,
    /// Signed amount: negative = expense, positive = income
    pub amount: Money,
}

impl Record {
    /// Create a validated record
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty category or a zero amount
    /// (zero is rejected at entry; it would be neither expense nor income).
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
    ) -> TallyResult<Self> {
        let category = category.into();

        if category.trim().is_empty() {
            return Err(TallyError::Validation("Category cannot be empty".into()));
        }

        if amount.is_zero() {
            return Err(TallyError::Validation(
                "Amount cannot be zero (use negative for expense, positive for income)".into(),
            ));
        }

        Ok(Self {
            date,
            category,
            amount,
        })
    }

    /// Construct a record without validation
    ///
    /// Used by the storage layer, where a zero amount can legitimately occur
    /// as the result of coercing an unparseable amount field.
    pub fn unchecked(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }

    /// Whether this record is an expense (amount strictly negative)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Whether this record is income (amount strictly positive)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// The absolute expense amount, or `None` for income and zero amounts
    pub fn expense_magnitude(&self) -> Option<Money> {
        if self.is_expense() {
            Some(self.amount.abs())
        } else {
            None
        }
    }

    /// The calendar month this record falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_valid_record() {
        let record = Record::new(date(2024, 1, 5), "Groceries", Money::from_cents(-5000)).unwrap();
        assert_eq!(record.category, "Groceries");
        assert!(record.is_expense());
        assert!(!record.is_income());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let err = Record::new(date(2024, 1, 5), "Groceries", Money::zero()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Record::new(date(2024, 1, 5), "  ", Money::from_cents(-100)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_sign_partition() {
        let expense = Record::unchecked(date(2024, 1, 5), "Groceries", Money::from_cents(-5000));
        let income = Record::unchecked(date(2024, 1, 5), "Income", Money::from_cents(100000));
        let coerced = Record::unchecked(date(2024, 1, 5), "Other", Money::zero());

        assert!(expense.is_expense() && !expense.is_income());
        assert!(income.is_income() && !income.is_expense());
        // A coerced zero amount belongs to neither partition
        assert!(!coerced.is_expense() && !coerced.is_income());
    }

    #[test]
    fn test_expense_magnitude() {
        let expense = Record::unchecked(date(2024, 1, 5), "Groceries", Money::from_cents(-5000));
        assert_eq!(expense.expense_magnitude(), Some(Money::from_cents(5000)));

        let income = Record::unchecked(date(2024, 1, 5), "Income", Money::from_cents(100));
        assert_eq!(income.expense_magnitude(), None);
    }

    #[test]
    fn test_month() {
        let record = Record::unchecked(date(2024, 2, 29), "Other", Money::from_cents(-1));
        assert_eq!(record.month(), Month::new(2024, 2).unwrap());
    }
}
