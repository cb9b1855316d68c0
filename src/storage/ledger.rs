//! CSV-backed ledger store
//!
//! Persists records as an append-only CSV file with a fixed
//! `Date,Category,Amount` header: dates as `YYYY-MM-DD`, categories as free
//! text, amounts as signed decimals.
//!
//! Loading is deliberately tolerant. A missing file is (re)initialized and
//! yields an empty ledger; a wrong header yields an empty ledger; a row with
//! an unparseable date is skipped; a row with an unparseable amount is kept
//! with the amount coerced to zero. None of these conditions surface as
//! errors to the caller - only a genuinely unreadable file does.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::{TallyError, TallyResult};
use crate::models::{Money, Record};

/// Required header fields, in order
const HEADER: [&str; 3] = ["Date", "Category", "Amount"];

/// Date format used on disk
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append-only CSV record store
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store for the given ledger file path (no I/O)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the ledger file with its header if it doesn't exist yet
    ///
    /// Also creates the parent directory. Existing files are left untouched.
    pub fn init(&self) -> TallyResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TallyError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| {
            TallyError::Storage(format!("Failed to create {}: {}", self.path.display(), e))
        })?;
        writer
            .write_record(HEADER)
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| TallyError::Storage(format!("Failed to write header: {}", e)))?;

        debug!("initialized ledger file at {}", self.path.display());
        Ok(())
    }

    /// Load all records from the ledger
    ///
    /// Returns an empty vec for a missing file (after re-initializing it),
    /// an empty or header-only file, or a file whose header doesn't match.
    /// Rows with unparseable dates are skipped; unparseable amounts are
    /// coerced to zero.
    pub fn load(&self) -> TallyResult<Vec<Record>> {
        if !self.path.exists() {
            warn!(
                "ledger file {} not found, creating it",
                self.path.display()
            );
            self.init()?;
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| {
                TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let headers = reader
            .headers()
            .map_err(|e| TallyError::Storage(format!("Failed to read header: {}", e)))?;

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            debug!("ledger file {} is empty", self.path.display());
            return Ok(Vec::new());
        }

        if headers.iter().map(str::trim).ne(HEADER) {
            warn!(
                "ledger file {} has an unexpected header, ignoring its contents",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for (line, row) in reader.records().enumerate() {
            // Header is line 1; data starts at line 2
            let line = line + 2;

            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    warn!("skipping unreadable ledger row at line {}: {}", line, e);
                    continue;
                }
            };

            let (date, category, amount) = match (row.get(0), row.get(1), row.get(2)) {
                (Some(d), Some(c), Some(a)) => (d, c, a),
                _ => {
                    warn!("skipping short ledger row at line {}", line);
                    continue;
                }
            };

            let date = match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(date) => date,
                Err(_) => {
                    warn!(
                        "skipping ledger row at line {} with unparseable date {:?}",
                        line, date
                    );
                    continue;
                }
            };

            if category.is_empty() {
                warn!("skipping ledger row at line {} with empty category", line);
                continue;
            }

            // Unparseable amounts coerce to zero rather than dropping the row
            records.push(Record::unchecked(date, category, Money::parse_lossy(amount)));
        }

        Ok(records)
    }

    /// Append a single record to the ledger
    ///
    /// Initializes the file first if it's missing. A failure here means the
    /// record was not saved; the error is surfaced, not retried.
    pub fn append(&self, record: &Record) -> TallyResult<()> {
        self.init()?;

        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                TallyError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record([
                record.date.format(DATE_FORMAT).to_string(),
                record.category.clone(),
                record.amount.to_decimal_string(),
            ])
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .map_err(|e| TallyError::Storage(format!("Failed to append record: {}", e)))?;

        Ok(())
    }
}
