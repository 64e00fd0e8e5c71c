//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod config;
pub mod export;
pub mod interactive;
pub mod ledger;

pub use account::{handle_account_command, AccountCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportCommands};
pub use interactive::run_menu;
pub use ledger::{handle_ledger_command, LedgerCommands};

use std::io::{self, BufRead, Write};

use crate::error::TrackerResult;
use crate::models::Confirmation;

/// Print a prompt and read one line of input.
///
/// Returns None at end of input. The trailing line break is stripped.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> TrackerResult<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string()))
}

/// Ask a yes/no question. End of input counts as "no".
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> TrackerResult<Confirmation> {
    let answer = prompt(input, output, &format!("{} (yes/no): ", question))?;
    Ok(answer
        .map(|a| Confirmation::from_response(&a))
        .unwrap_or_default())
}

/// Confirmation from a `--yes` flag, or else from the terminal
fn confirm_on_terminal(yes: bool, question: &str) -> TrackerResult<Confirmation> {
    if yes {
        return Ok(Confirmation::Confirmed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let confirmation = confirm(&mut stdin.lock(), &mut stdout.lock(), question)?;
    println!();
    Ok(confirmation)
}
