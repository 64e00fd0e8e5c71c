//! CSV Export functionality
//!
//! Exports the transaction ledger and the account book to CSV format.

use std::io::Write;

use crate::error::TrackerResult;
use crate::models::{AccountBook, Transaction, DATE_FORMAT};

/// Export every ledger transaction, numbered in list order
pub fn export_ledger_csv<W: Write>(transactions: &[Transaction], writer: W) -> TrackerResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["#", "Date", "Description", "Category", "Amount"])?;

    for (i, txn) in transactions.iter().enumerate() {
        csv.write_record([
            (i + 1).to_string(),
            txn.date.format(DATE_FORMAT).to_string(),
            txn.description.clone(),
            txn.category.clone(),
            format!("{:.2}", txn.amount.as_f64()),
        ])?;
    }

    csv.flush()?;
    Ok(transactions.len())
}

/// Export every account entry. Accounts without entries get one row with
/// empty type, amount and description so they are not lost.
pub fn export_accounts_csv<W: Write>(book: &AccountBook, writer: W) -> TrackerResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);
    csv.write_record(["Account", "Type", "Amount", "Description"])?;

    let mut rows = 0;
    for (name, entries) in book.iter() {
        if entries.is_empty() {
            csv.write_record([name, "", "", ""])?;
            rows += 1;
            continue;
        }

        for entry in entries {
            csv.write_record([
                name.to_string(),
                entry.kind.to_string(),
                format!("{:.2}", entry.amount.as_f64()),
                entry.description.clone(),
            ])?;
            rows += 1;
        }
    }

    csv.flush()?;
    Ok(rows)
}
