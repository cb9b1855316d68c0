//! CLI commands for reports
//!
//! Prints spending, trends, and statistics reports to the terminal, with
//! optional CSV export.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::Record;
use crate::reports::{summary_statistics, SpendingReport, TrendsReport};
use crate::storage::LedgerStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending totals by category
    Spending {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Monthly income vs. expenses trend
    Trends {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summary statistics over expenses
    #[command(alias = "statistics")]
    Stats,

    /// All of the above, in one run
    All,
}

/// Handle report commands
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let records = store.load()?;

    match cmd {
        ReportCommands::Spending { output } => {
            handle_spending_report(&records, settings, output)
        }
        ReportCommands::Trends { output } => handle_trends_report(&records, settings, output),
        ReportCommands::Stats => {
            handle_stats_report(&records, settings);
            Ok(())
        }
        ReportCommands::All => {
            handle_spending_report(&records, settings, None)?;
            println!();
            handle_stats_report(&records, settings);
            println!();
            handle_trends_report(&records, settings, None)
        }
    }
}

fn handle_spending_report(
    records: &[Record],
    settings: &Settings,
    output: Option<PathBuf>,
) -> TallyResult<()> {
    let report = SpendingReport::from_records(records);
    print!("{}", report.format_terminal(&settings.currency_symbol));

    if let Some(path) = output {
        let file = File::create(&path)
            .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        report.export_csv(&mut BufWriter::new(file))?;
        println!("\nExported to {}", path.display());
    }

    Ok(())
}

fn handle_trends_report(
    records: &[Record],
    settings: &Settings,
    output: Option<PathBuf>,
) -> TallyResult<()> {
    let report = TrendsReport::from_records(records);
    print!("{}", report.format_terminal(&settings.currency_symbol));

    if let Some(path) = output {
        let file = File::create(&path)
            .map_err(|e| TallyError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
        report.export_csv(&mut BufWriter::new(file))?;
        println!("\nExported to {}", path.display());
    }

    Ok(())
}

fn handle_stats_report(records: &[Record], settings: &Settings) {
    match summary_statistics(records) {
        Some(stats) => print!("{}", stats.format_terminal(&settings.currency_symbol)),
        None => println!("No expense records found for statistical analysis."),
    }
}
