//! CLI commands for data export
//!
//! Writes CSV to a file, or to stdout when no file is given.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::export::csv;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the transaction ledger to CSV
    Ledger {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the account book to CSV
    Accounts {
        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> TrackerResult<()> {
    match cmd {
        ExportCommands::Ledger { output: None } => {
            csv::export_ledger_csv(storage.ledger.transactions(), io::stdout().lock())?;
        }
        ExportCommands::Ledger {
            output: Some(output),
        } => {
            let count = csv::export_ledger_csv(storage.ledger.transactions(), create_file(&output)?)?;
            println!("Exported {} transactions to: {}", count, output.display());
        }
        ExportCommands::Accounts { output: None } => {
            csv::export_accounts_csv(storage.accounts.book(), io::stdout().lock())?;
        }
        ExportCommands::Accounts {
            output: Some(output),
        } => {
            let count = csv::export_accounts_csv(storage.accounts.book(), create_file(&output)?)?;
            println!("Exported {} account rows to: {}", count, output.display());
        }
    }

    Ok(())
}

fn create_file(output: &Path) -> TrackerResult<impl Write> {
    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}
