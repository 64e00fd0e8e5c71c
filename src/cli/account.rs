//! Account CLI commands
//!
//! Implements CLI commands for the multi-account book.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_account_balance, format_account_balances, format_account_entries, format_account_list,
};
use crate::error::TrackerResult;
use crate::models::{normalize_account_name, Confirmation};
use crate::services::{AccountAdded, AccountService, ClearOutcome, NewEntry};
use crate::storage::Storage;

use super::confirm_on_terminal;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new, empty account
    Add {
        /// Account name (case-insensitive)
        name: String,
    },
    /// List all accounts, or the entries of one account
    List {
        /// Show the entries of this account
        account: Option<String>,
    },
    /// Record a deposit, withdrawal or expense
    Record {
        /// Account name
        account: String,
        /// Entry type (deposit, withdrawal, expense)
        kind: String,
        /// Amount, never negative (e.g., "250.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        #[arg(default_value = "")]
        description: String,
        /// Create the account without asking if it doesn't exist
        #[arg(long)]
        create: bool,
    },
    /// Delete an entry by its number in `account list <account>`
    Delete {
        /// Account name
        account: String,
        /// Entry number
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Show the balance of one account, or of every account
    Balance {
        /// Account name
        account: Option<String>,
    },
    /// Remove every entry but keep the accounts
    ClearBalances {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Remove every account
    ClearAll {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Save the account book under a profile name or file path
    Save {
        /// Profile name, or a path to a .json file
        profile: String,
    },
    /// Replace the account book with a saved profile
    Load {
        /// Profile name, or a path to a .json file
        profile: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: AccountCommands,
) -> TrackerResult<()> {
    // The service holds the account store mutably
    let paths = storage.paths().clone();
    let mut service = AccountService::new(&mut storage.accounts);

    match cmd {
        AccountCommands::Add { name } => match service.add_account(&name)? {
            AccountAdded::Created(name) => println!("Created account: {}", name),
            AccountAdded::AlreadyExists(name) => println!("Account '{}' already exists.", name),
        },

        AccountCommands::List { account: None } => {
            print!("{}", format_account_list(service.book(), settings)?);
        }

        AccountCommands::List {
            account: Some(account),
        } => {
            let entries = service.entries(&account)?;
            let name = normalize_account_name(&account).unwrap_or(account);
            print!("{}", format_account_entries(&name, entries, settings));
        }

        AccountCommands::Record {
            account,
            kind,
            amount,
            description,
            create,
        } => {
            let create_missing = if create || service.book().contains(&account) {
                Confirmation::Confirmed
            } else {
                match normalize_account_name(&account) {
                    Some(name) => confirm_on_terminal(
                        false,
                        &format!("Account '{}' does not exist. Create it?", name),
                    )?,
                    None => Confirmation::Declined,
                }
            };

            let (name, entry) = service.record(
                NewEntry {
                    account: &account,
                    kind: &kind,
                    amount: &amount,
                    description: &description,
                },
                create_missing,
            )?;

            println!(
                "Recorded {} of {} in {}",
                entry.kind,
                entry.amount.format_with_symbol(&settings.currency_symbol),
                name
            );
        }

        AccountCommands::Delete { account, index } => {
            let removed = service.delete_entry(&account, &index)?;
            println!(
                "Deleted entry: {} {} - {}",
                removed.kind,
                removed.amount.format_with_symbol(&settings.currency_symbol),
                removed.description
            );
        }

        AccountCommands::Balance { account: Some(account) } => {
            let balance = service.balance(&account)?;
            let name = normalize_account_name(&account).unwrap_or(account);
            print!("{}", format_account_balance(&name, &balance, settings));
        }

        AccountCommands::Balance { account: None } => {
            print!("{}", format_account_balances(&service.balances()?, settings));
        }

        AccountCommands::ClearBalances { yes } => {
            let confirmation =
                confirm_on_terminal(yes, "Are you sure you want to clear all account balances?")?;

            match service.clear_balances(confirmation)? {
                ClearOutcome::Cleared(_) => println!("All account balances have been cleared!"),
                ClearOutcome::Cancelled => println!("Clear balances canceled."),
            }
        }

        AccountCommands::ClearAll { yes } => {
            let confirmation =
                confirm_on_terminal(yes, "Are you sure you want to delete all accounts?")?;

            match service.clear_all(confirmation)? {
                ClearOutcome::Cleared(_) => println!("All accounts have been deleted!"),
                ClearOutcome::Cancelled => println!("Clear accounts canceled."),
            }
        }

        AccountCommands::Save { profile } => {
            let path = paths.profile_file(&profile);
            service.save_as(&path)?;
            println!(
                "Saved {} account(s) to {}",
                service.book().len(),
                path.display()
            );
        }

        AccountCommands::Load { profile } => {
            let path = paths.profile_file(&profile);
            let count = service.load_from(&path)?;
            println!("Loaded {} account(s) from {}", count, path.display());
        }
    }

    Ok(())
}
