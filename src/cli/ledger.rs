//! Ledger CLI commands
//!
//! Implements the top-level commands for the single-account transaction list.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_deleted_transaction, format_ledger_balance, format_transaction_list};
use crate::error::TrackerResult;
use crate::services::{ClearOutcome, LedgerService, NewTransaction};
use crate::storage::Storage;

use super::confirm_on_terminal;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Add a transaction (positive for income, negative for an expense)
    Add {
        /// Amount (e.g., "1500", "-12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Category
        #[arg(short, long, default_value = "General")]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all transactions
    List,
    /// Show income, expenses and net balance
    Balance,
    /// Delete a transaction by its number in `list`
    Delete {
        /// Transaction number
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Remove every transaction
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: LedgerCommands,
) -> TrackerResult<()> {
    let mut service = LedgerService::new(&mut storage.ledger);

    match cmd {
        LedgerCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let txn = service.add(NewTransaction {
                amount: &amount,
                description: &description,
                category: &category,
                date: date.as_deref(),
            })?;

            println!("Transaction added!");
            println!(
                "  {} - {}: {} ({})",
                txn.date.format(settings.display_date_format()),
                txn.description,
                txn.amount.format_with_symbol(&settings.currency_symbol),
                txn.category
            );
        }

        LedgerCommands::List => {
            print!("{}", format_transaction_list(service.list(), settings));
        }

        LedgerCommands::Balance => {
            print!("{}", format_ledger_balance(service.balance()?.as_ref(), settings));
        }

        LedgerCommands::Delete { index } => {
            if service.list().is_empty() {
                println!("No transactions to delete.");
                return Ok(());
            }

            let removed = service.delete(&index)?;
            println!("{}", format_deleted_transaction(&removed, settings));
        }

        LedgerCommands::Clear { yes } => {
            let confirmation =
                confirm_on_terminal(yes, "Are you sure you want to clear all transactions?")?;

            match service.clear(confirmation)? {
                ClearOutcome::Cleared(_) => println!("All transactions have been cleared!"),
                ClearOutcome::Cancelled => println!("Clear transactions canceled."),
            }
        }
    }

    Ok(())
}
