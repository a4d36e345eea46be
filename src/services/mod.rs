//! Service layer for finreport
//!
//! The service layer sits between the report service and the screens: the
//! HTTP client, the month selection, and the fetch controller.

pub mod client;
pub mod controller;
pub mod selection;

pub use client::{HttpReportClient, ReportSource};
pub use controller::{FetchOutcome, PendingFetch, ReportController};
pub use selection::MonthSelection;
