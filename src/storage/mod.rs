//! Storage layer for Tally
//!
//! The ledger is a single append-only CSV file; this module owns all reads
//! and writes to it.

pub mod ledger;

pub use ledger::LedgerStore;
