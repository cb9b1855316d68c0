//! Display formatting for terminal output
//!
//! Chart and layout primitives shared by the report types.

pub mod chart;
