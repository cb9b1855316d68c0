//! Core data models for Tally
//!
//! This module contains the data structures the ledger and the report engines
//! operate on: monetary amounts, ledger records, and year-month keys.

pub mod money;
pub mod month;
pub mod record;

pub use money::Money;
pub use month::Month;
pub use record::Record;
