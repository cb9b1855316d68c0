//! Configuration management for Tally
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::TallyPaths;
pub use settings::Settings;
