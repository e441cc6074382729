use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use finance_flow::cli::{handle_ledger_command, LedgerCommands};
use finance_flow::config::{paths::FlowPaths, settings::Settings};
use finance_flow::display::DisplayOptions;
use finance_flow::logging::init_tracing;
use finance_flow::services::Ledger;
use finance_flow::shell::Shell;
use finance_flow::storage::{LoadOutcome, RecordStore};

#[derive(Parser)]
#[command(
    name = "financeflow",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "FinanceFlow records income and expenses in a CSV file and reports \
                  your balance and transaction history. Run without a subcommand \
                  to open the interactive menu."
)]
struct Cli {
    /// Ledger CSV file (defaults to transactions.csv in the data directory)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    #[command(alias = "menu")]
    Shell,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut paths = FlowPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_ledger_file(file);
    }

    let settings = Settings::load_or_create(&paths).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable settings file");
        Settings::default()
    });
    let mut options = DisplayOptions::from(&settings);
    if cli.no_color {
        options.color = false;
    }

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => run_shell(&paths, options)?,
        Commands::Ledger(cmd) => {
            let (mut ledger, outcome) = Ledger::open(RecordStore::new(paths.ledger_file()));
            if let LoadOutcome::Failed(e) = outcome {
                // Writing now would replace the unreadable file with a single row
                return Err(e).with_context(|| {
                    format!("Could not read {}", paths.ledger_file().display())
                });
            }
            let output = handle_ledger_command(&mut ledger, &options, cmd)?;
            print!("{}", output);
        }
        Commands::Config => {
            println!("FinanceFlow Configuration");
            println!("=========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Color output:    {}", options.color);
        }
    }

    Ok(())
}

fn run_shell(paths: &FlowPaths, options: DisplayOptions) -> Result<()> {
    let (mut ledger, outcome) = Ledger::open(RecordStore::new(paths.ledger_file()));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), options);

    shell.report_load(ledger.path(), &outcome)?;
    shell.run(&mut ledger)?;

    Ok(())
}
