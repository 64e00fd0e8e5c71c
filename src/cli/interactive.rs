//! Interactive menu
//!
//! The numbered menu loop over the single-account ledger. Input and output
//! are generic so the loop can run against a terminal or an in-memory buffer.
//! Errors from a menu action are printed and the loop continues.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{format_deleted_transaction, format_ledger_balance, format_transaction_list};
use crate::error::TrackerResult;
use crate::services::{ClearOutcome, LedgerService, NewTransaction};
use crate::storage::Storage;

use super::{confirm, prompt};

const MENU: &str = "\nBudget Tracker\n\
                    1. Add Transaction\n\
                    2. View Transactions\n\
                    3. View Balance\n\
                    4. Clear Transactions\n\
                    5. Delete a Transaction\n\
                    6. Exit\n";

/// Run the menu until the user picks Exit or input ends
pub fn run_menu<R: BufRead, W: Write>(
    storage: &mut Storage,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> TrackerResult<()> {
    writeln!(output, "Welcome to the Budget Tracker!")?;
    let mut service = LedgerService::new(&mut storage.ledger);

    loop {
        write!(output, "{}", MENU)?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            writeln!(output)?;
            break;
        };

        let result = match choice.trim() {
            "1" => add_transaction(&mut service, input, output),
            "2" => view_transactions(&service, settings, output),
            "3" => view_balance(&service, settings, output),
            "4" => clear_transactions(&mut service, input, output),
            "5" => delete_transaction(&mut service, settings, input, output),
            "6" => break,
            _ => writeln!(output, "Invalid choice. Please try again.").map_err(Into::into),
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "menu action failed");
            writeln!(output, "Error: {}", e)?;
        }
    }

    Ok(())
}

fn add_transaction<R: BufRead, W: Write>(
    service: &mut LedgerService<'_>,
    input: &mut R,
    output: &mut W,
) -> TrackerResult<()> {
    let Some(amount) = prompt(input, output, "Enter amount: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, output, "Enter description: ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, output, "Enter category: ")? else {
        return Ok(());
    };
    let date = prompt(
        input,
        output,
        "Enter date (YYYY-MM-DD) or leave blank for today: ",
    )?;

    service.add(NewTransaction {
        amount: &amount,
        description: &description,
        category: &category,
        date: date.as_deref(),
    })?;
    writeln!(output, "Transaction added!")?;

    Ok(())
}

fn view_transactions<W: Write>(
    service: &LedgerService<'_>,
    settings: &Settings,
    output: &mut W,
) -> TrackerResult<()> {
    writeln!(output)?;
    write!(output, "{}", format_transaction_list(service.list(), settings))?;
    Ok(())
}

fn view_balance<W: Write>(
    service: &LedgerService<'_>,
    settings: &Settings,
    output: &mut W,
) -> TrackerResult<()> {
    writeln!(output)?;
    write!(
        output,
        "{}",
        format_ledger_balance(service.balance()?.as_ref(), settings)
    )?;
    Ok(())
}

fn clear_transactions<R: BufRead, W: Write>(
    service: &mut LedgerService<'_>,
    input: &mut R,
    output: &mut W,
) -> TrackerResult<()> {
    let confirmation = confirm(
        input,
        output,
        "Are you sure you want to clear all transactions?",
    )?;

    match service.clear(confirmation)? {
        ClearOutcome::Cleared(_) => writeln!(output, "All transactions have been cleared!")?,
        ClearOutcome::Cancelled => writeln!(output, "Clear transactions canceled.")?,
    }

    Ok(())
}

fn delete_transaction<R: BufRead, W: Write>(
    service: &mut LedgerService<'_>,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> TrackerResult<()> {
    if service.list().is_empty() {
        writeln!(output, "\nNo transactions to delete.")?;
        return Ok(());
    }

    view_transactions(service, settings, output)?;
    let Some(raw) = prompt(
        input,
        output,
        "\nEnter the number of the transaction to delete: ",
    )?
    else {
        return Ok(());
    };

    let removed = service.delete(&raw)?;
    writeln!(output, "{}", format_deleted_transaction(&removed, settings))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn run(storage: &mut Storage, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        run_menu(storage, &Settings::default(), &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, "6\n");

        assert!(output.starts_with("Welcome to the Budget Tracker!\n"));
        assert!(output.contains("6. Exit"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, "");
        assert!(output.ends_with("Choose an option: \n"));
    }

    #[test]
    fn test_add_then_view_and_balance() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(
            &mut storage,
            "1\n100\nSalary\nIncome\n2025-01-15\n\
             1\n-40\nGroceries\nFood\n2025-01-16\n\
             2\n3\n6\n",
        );

        assert_eq!(output.matches("Transaction added!").count(), 2);
        assert!(output.contains("1. 2025-01-15 - Salary: $100.00 (Income)"));
        assert!(output.contains("2. 2025-01-16 - Groceries: -$40.00 (Food)"));
        assert!(output.contains("Income: $100.00\nExpenses: $40.00\nNet Balance: $60.00"));
        assert_eq!(storage.ledger.len(), 2);
    }

    #[test]
    fn test_bad_amount_is_reported_and_loop_continues() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, "1\nabc\nx\ny\n\n2\n6\n");

        assert!(output.contains("Error: Invalid amount: 'abc'"));
        assert!(output.contains("No transactions found."));
        assert!(storage.ledger.is_empty());
    }

    #[test]
    fn test_invalid_choice() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, "9\n6\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_empty_views() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(&mut storage, "2\n3\n5\n6\n");

        assert!(output.contains("No transactions found."));
        assert!(output.contains("No transactions to calculate balance."));
        assert!(output.contains("No transactions to delete."));
    }

    #[test]
    fn test_delete_flow() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(
            &mut storage,
            "1\n5\nCoffee\nFood\n2025-02-01\n\
             1\n7\nTea\nFood\n2025-02-02\n\
             5\n7\n\
             5\nfirst\n\
             5\n1\n6\n",
        );

        assert!(output.contains("Error: Invalid selection: 7 is not between 1 and 2"));
        assert!(output.contains("Error: Invalid input: 'first'"));
        assert!(output.contains("Deleted transaction: Coffee on 2025-02-01"));
        assert_eq!(storage.ledger.len(), 1);
        assert_eq!(storage.ledger.transactions()[0].description, "Tea");
    }

    #[test]
    fn test_clear_needs_yes() {
        let (_temp_dir, mut storage) = create_test_storage();
        let output = run(
            &mut storage,
            "1\n5\nCoffee\nFood\n\n4\nno\n4\nYES\n6\n",
        );

        assert!(output.contains("Clear transactions canceled."));
        assert!(output.contains("All transactions have been cleared!"));
        assert!(storage.ledger.is_empty());
    }
}
