//! Interactive menu shell
//!
//! A three-option text menu: record a transaction, run the full
//! analysis, or exit. Invalid input re-prompts; end of input (Ctrl+D) exits
//! cleanly at any prompt. Records are appended to the ledger immediately, so
//! an interrupt can never lose an already-confirmed entry.

use std::io::{self, BufRead};

use chrono::{Local, NaiveDate};
use log::debug;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::models::{Money, Record};
use crate::reports::{summary_statistics, SpendingReport, TrendsReport};
use crate::storage::LedgerStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Run the interactive menu loop until the user exits
pub fn run_shell(store: &LedgerStore, settings: &Settings) -> TallyResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Welcome to Tally - personal expense ledger");

    loop {
        println!();
        println!("--- Tally Menu ---");
        println!("1. Record new expense/income");
        println!("2. Run analysis & view reports");
        println!("3. Exit");
        print!("Enter your choice (1-3): ");
        flush_stdout();

        let choice = match read_line(&mut input) {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => {
                let record = match prompt_record(&mut input, settings) {
                    Some(record) => record,
                    None => break,
                };
                match store.append(&record) {
                    Ok(()) => println!("Recorded successfully."),
                    // Surface the failure; the record is not saved
                    Err(e) => println!("Failed to save record: {}", e),
                }
            }
            "2" => run_analysis(store, settings)?,
            "3" => break,
            other => {
                debug!("invalid menu choice {:?}", other);
                println!("Invalid choice. Please enter 1, 2, or 3.");
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Load the ledger and print all three reports
fn run_analysis(store: &LedgerStore, settings: &Settings) -> TallyResult<()> {
    let records = store.load()?;

    if records.is_empty() {
        println!("Cannot run analysis: the ledger is empty.");
        return Ok(());
    }

    let symbol = &settings.currency_symbol;

    println!();
    print!("{}", SpendingReport::from_records(&records).format_terminal(symbol));
    println!();
    match summary_statistics(&records) {
        Some(stats) => print!("{}", stats.format_terminal(symbol)),
        None => println!("No expense records found for statistical analysis."),
    }
    println!();
    print!("{}", TrendsReport::from_records(&records).format_terminal(symbol));

    Ok(())
}

/// Prompt for a complete record; `None` means end of input
fn prompt_record(input: &mut impl BufRead, settings: &Settings) -> Option<Record> {
    let date = prompt_date(input)?;
    let category = prompt_category(input, settings)?;
    let amount = prompt_amount(input)?;

    // All three prompts validated their pieces, so this cannot fail
    Record::new(date, category, amount).ok()
}

/// Prompt for a date, defaulting to today on an empty line
fn prompt_date(input: &mut impl BufRead) -> Option<NaiveDate> {
    let today = Local::now().date_naive();

    loop {
        print!("Enter date (YYYY-MM-DD, default today {}): ", today.format(DATE_FORMAT));
        flush_stdout();

        let line = read_line(input)?;
        if line.is_empty() {
            return Some(today);
        }

        match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => return Some(date),
            Err(_) => println!("Invalid date. Please use YYYY-MM-DD."),
        }
    }
}

/// Prompt for a category by number from the configured list
fn prompt_category(input: &mut impl BufRead, settings: &Settings) -> Option<String> {
    println!("Select category:");
    for (i, category) in settings.categories.iter().enumerate() {
        println!("  {}: {}", i + 1, category);
    }

    loop {
        print!("Enter category number: ");
        flush_stdout();

        let line = read_line(input)?;
        match line.parse::<usize>().ok().and_then(|i| settings.category_by_index(i)) {
            Some(category) => return Some(category.to_string()),
            None => println!("Invalid category number."),
        }
    }
}

/// Prompt for a non-zero signed amount
fn prompt_amount(input: &mut impl BufRead) -> Option<Money> {
    loop {
        print!("Enter amount (negative for expense, positive for income): ");
        flush_stdout();

        let line = read_line(input)?;
        match Money::parse(&line) {
            Ok(amount) if amount.is_zero() => {
                println!("Amount cannot be zero. Please re-enter.");
            }
            Ok(amount) => return Some(amount),
            Err(_) => println!("Invalid input. Please enter a numerical amount."),
        }
    }
}

/// Read one trimmed line; `None` on end of input
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn flush_stdout() {
    use std::io::Write;
    let _ = io::stdout().flush();
}
