//! Core data models for finreport
//!
//! This module contains the data structures the report screen works with:
//! the month table, query keys, user ids, and the report itself.

pub mod ids;
pub mod month;
pub mod period;
pub mod report;

pub use ids::UserId;
pub use month::Month;
pub use period::{current_year, QueryKey};
pub use report::{format_amount, Amount, LoadedReport, Report};
