//! Tally - Terminal-based personal expense ledger and analyzer
//!
//! Tally keeps a plain-CSV ledger of dated, categorized transactions (negative
//! amounts are expenses, positive amounts are income) and computes spending
//! reports over it: per-category totals, monthly expense/income trends, and
//! descriptive statistics over expense magnitudes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, month keys)
//! - `storage`: CSV ledger storage layer
//! - `reports`: Pure aggregation and statistics engines plus report types
//! - `display`: Terminal chart and table formatting helpers
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use tally_cli::config::{paths::TallyPaths, settings::Settings};
//! use tally_cli::storage::LedgerStore;
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let records = LedgerStore::new(paths.ledger_file()).load()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::TallyError;
