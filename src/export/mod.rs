//! Export module for the budget tracker
//!
//! Writes ledger data as CSV for spreadsheets:
//! - the single-account ledger, one row per transaction
//! - the account book, one row per entry

pub mod csv;

pub use self::csv::{export_accounts_csv, export_ledger_csv};
