//! Transaction model
//!
//! A single-account ledger entry. The sign of the amount decides whether it is
//! income (positive) or an expense (negative); there is no separate type field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Date format used on disk and for user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A financial transaction in the single-account ledger
///
/// Dates are strict `YYYY-MM-DD`. A data file holding any other date text
/// does not parse as a whole; it is then loaded as empty and preserved
/// next to the data file as `ledger.json.bak` (see `storage::file_io`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount (positive for income, negative for expense)
    pub amount: Money,

    /// Free-form description
    pub description: String,

    /// Free-form category label
    pub category: String,

    /// Transaction date, stored as YYYY-MM-DD
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Check if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} ({})",
            self.date.format(DATE_FORMAT),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Parse a user-supplied date in YYYY-MM-DD form
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_income_and_expense() {
        let pay = Transaction::new(Money::from_cents(10000), "Salary", "Work", date(2025, 1, 1));
        let food = Transaction::new(Money::from_cents(-4000), "Groceries", "Food", date(2025, 1, 2));

        assert!(pay.is_income());
        assert!(!pay.is_expense());
        assert!(food.is_expense());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(Money::from_cents(-1250), "Lunch", "Food", date(2025, 3, 9));
        assert_eq!(txn.to_string(), "2025-03-09 - Lunch: -$12.50 (Food)");
    }

    #[test]
    fn test_json_shape() {
        let txn = Transaction::new(Money::from_cents(-4000), "Groceries", "Food", date(2025, 1, 2));
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["amount"], serde_json::json!(-40.0));
        assert_eq!(value["description"], "Groceries");
        assert_eq!(value["category"], "Food");
        assert_eq!(value["date"], "2025-01-02");
    }

    #[test]
    fn test_reads_existing_data_file_entry() {
        let json = r#"{"amount": 100, "description": "Gift", "category": "Misc", "date": "2024-12-25"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, Money::from_cents(10000));
        assert_eq!(txn.date, date(2024, 12, 25));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-02-28"), Some(date(2025, 2, 28)));
        assert_eq!(parse_date(" 2025-02-28 "), Some(date(2025, 2, 28)));
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("yesterday").is_none());
    }
}
