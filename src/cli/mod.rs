//! CLI command handlers
//!
//! This module contains the implementation of CLI commands and the
//! interactive shell, bridging clap argument parsing with the storage and
//! report layers.

pub mod report;
pub mod shell;

pub use report::{handle_report_command, ReportCommands};
pub use shell::run_shell;
