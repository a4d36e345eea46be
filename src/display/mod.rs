//! Display formatting for terminal output
//!
//! Provides utilities for formatting reports for non-interactive output.

pub mod report;

pub use report::{format_month_list, format_report};
