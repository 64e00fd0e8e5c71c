use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_account_command, handle_config_command, handle_export_command, handle_ledger_command,
    run_menu, AccountCommands, ConfigArgs, ExportCommands, LedgerCommands,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::logging::init_tracing;
use budget_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal budget tracker",
    long_about = "A terminal-based personal budget tracker. Keep a single ledger of \
                  income and expenses, or track several named accounts with deposits, \
                  withdrawals and expenses. Run without a command for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Launch the interactive menu
    Menu,

    /// Multi-account commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Export data to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths, or change display settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, args)?;
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_menu(&mut storage, &settings, &mut stdin.lock(), &mut stdout.lock())?;
        }
    }

    Ok(())
}
