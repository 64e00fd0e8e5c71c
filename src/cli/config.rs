//! Config CLI command
//!
//! Shows paths and settings, and updates the display settings.

use clap::Args;

use crate::config::{Settings, TrackerPaths};
use crate::error::TrackerResult;

/// Arguments for `config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Set the currency symbol shown before amounts
    #[arg(long)]
    pub currency: Option<String>,

    /// Set the date format used when listing (strftime, e.g. "%d/%m/%Y")
    #[arg(long)]
    pub date_format: Option<String>,
}

/// Handle the config command. With no options it only prints.
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> TrackerResult<()> {
    let changed = args.currency.is_some() || args.date_format.is_some();

    if let Some(symbol) = &args.currency {
        settings.set_currency_symbol(symbol)?;
    }
    if let Some(format) = &args.date_format {
        settings.set_date_format(format)?;
    }
    if changed {
        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory:     {}", paths.base_dir().display());
    println!("Settings file:      {}", paths.settings_file().display());
    println!("Ledger file:        {}", paths.ledger_file().display());
    println!("Accounts file:      {}", paths.accounts_file().display());
    println!("Profiles directory: {}", paths.profiles_dir().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);

    Ok(())
}
