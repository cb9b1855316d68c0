use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use tally_cli::cli::{handle_report_command, run_shell, ReportCommands};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::models::{Money, Record};
use tally_cli::storage::LedgerStore;
use tally_cli::TallyError;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based personal expense ledger and analyzer",
    long_about = "Tally keeps an append-only CSV ledger of dated, categorized \
                  transactions (negative amounts are expenses, positive amounts \
                  are income) and computes spending reports over it: category \
                  totals, monthly trends, and summary statistics."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu shell
    #[command(alias = "menu")]
    Shell,

    /// Append a transaction to the ledger
    Add {
        /// Signed amount: negative for expense, positive for income
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,

        /// Category name
        #[arg(short, long, default_value = "Other")]
        category: String,
    },

    /// Generate reports over the ledger
    #[command(subcommand)]
    Report(ReportCommands),

    /// Initialize the data directory, ledger file, and settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = LedgerStore::new(paths.ledger_file());

    match cli.command {
        None | Some(Commands::Shell) => {
            paths.ensure_directories()?;
            store.init()?;
            run_shell(&store, &settings)?;
        }
        Some(Commands::Add {
            amount,
            date,
            category,
        }) => {
            paths.ensure_directories()?;
            handle_add(&store, amount, date, category)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            paths.ensure_directories()?;
            store.init()?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("Initialized ledger at {}", store.path().display());
        }
        Some(Commands::Config) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Ledger file:     {}", paths.ledger_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
            println!("Categories:");
            for (i, category) in settings.categories.iter().enumerate() {
                println!("  {}: {}", i + 1, category);
            }
        }
    }

    Ok(())
}

fn handle_add(
    store: &LedgerStore,
    amount: String,
    date: Option<String>,
    category: String,
) -> Result<()> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| TallyError::Validation(format!("Invalid date: {}", s)))?,
        None => Local::now().date_naive(),
    };

    let amount = Money::parse(&amount)
        .map_err(|e| TallyError::Validation(e.to_string()))?;

    let record = Record::new(date, category, amount)?;
    store.append(&record)?;

    println!(
        "Recorded {} {} on {}",
        record.category, record.amount, record.date
    );
    Ok(())
}
