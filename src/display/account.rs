//! Account display formatting
//!
//! Formats the multi-account book for terminal output in table and detail views.

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::{AccountBook, AccountEntry};
use crate::services::account_balance;

use super::truncate;

/// Format every account with its entry count and balance as a table
pub fn format_account_list(book: &AccountBook, settings: &Settings) -> TrackerResult<String> {
    if book.is_empty() {
        return Ok("No accounts found.\n".to_string());
    }

    // Calculate column widths
    let name_width = book
        .names()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>7}  {:>12}\n",
        "Name",
        "Entries",
        "Balance",
        name_width = name_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<name_width$}  {:->7}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (name, entries) in book.iter() {
        let balance = account_balance(entries)?.balance;
        output.push_str(&format!(
            "{:<name_width$}  {:>7}  {:>12}\n",
            name,
            entries.len(),
            balance.format_with_symbol(&settings.currency_symbol),
            name_width = name_width,
        ));
    }

    Ok(output)
}

/// Format the numbered entries of one account
pub fn format_account_entries(name: &str, entries: &[AccountEntry], settings: &Settings) -> String {
    if entries.is_empty() {
        return format!("No entries in account {}.\n", name);
    }

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n\n", name));
    output.push_str(&format!(
        "{:>3}  {:<10}  {:>12}  {}\n",
        "#", "Type", "Amount", "Description"
    ));
    output.push_str(&format!("{}\n", "-".repeat(60)));

    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<10}  {:>12}  {}\n",
            i + 1,
            entry.kind.to_string(),
            entry.amount.format_with_symbol(&settings.currency_symbol),
            truncate(&entry.description, 30).trim_end()
        ));
    }

    output
}
