//! finreport - monthly financial reports in the terminal
//!
//! This library provides the core of the finreport client: choosing a month,
//! fetching that month's summary from the report service, rendering it, and
//! exporting the rendered report as a PDF.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Months, query keys, and report data
//! - `services`: Report service client, month selection, fetch controller
//! - `export`: Region capture and PDF writing
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Subcommand handlers
//! - `tui`: The interactive report screen
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use finreport::config::{ReportPaths, Settings};
//! use finreport::models::Month;
//! use finreport::services::{HttpReportClient, ReportController};
//!
//! let paths = ReportPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let client = HttpReportClient::from_settings(&settings)?;
//! let mut controller = ReportController::new(Arc::new(client), settings.user_id.clone());
//! controller.select_month(Month::March);
//! let loaded = controller.fetch_report(2024)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::ReportError;
