//! Display formatting for terminal output
//!
//! Turns ledger data into plain text for the CLI. Every function returns a
//! String so the shell decides where it goes.

pub mod account;
pub mod balance;
pub mod transaction;

pub use account::{format_account_entries, format_account_list};
pub use balance::{format_account_balance, format_account_balances, format_ledger_balance};
pub use transaction::{format_deleted_transaction, format_transaction_list, format_transaction_row};

/// Truncate a string to a maximum number of characters, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
