//! Transaction display formatting
//!
//! Numbered list view of the single-account ledger. The numbers are the
//! 1-based positions accepted by delete.

use crate::config::Settings;
use crate::models::Transaction;

/// Format one numbered transaction line
pub fn format_transaction_row(position: usize, txn: &Transaction, settings: &Settings) -> String {
    format!(
        "{}. {} - {}: {} ({})",
        position,
        txn.date.format(settings.display_date_format()),
        txn.description,
        txn.amount.format_with_symbol(&settings.currency_symbol),
        txn.category
    )
}

/// Format all transactions in insertion order
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::from("Transactions:\n");
    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, settings));
        output.push('\n');
    }

    output
}

/// Confirmation line after a delete
pub fn format_deleted_transaction(txn: &Transaction, settings: &Settings) -> String {
    format!(
        "Deleted transaction: {} on {}",
        txn.description,
        txn.date.format(settings.display_date_format())
    )
}
