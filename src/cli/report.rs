//! CLI commands for reports
//!
//! Fetch a month's report from the report service, print it, or export it
//! to PDF without opening the interactive screen.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_report;
use crate::error::ReportResult;
use crate::export::{BufferCapture, ExportAdapter, ExportOutcome};
use crate::models::{current_year, LoadedReport, Month};
use crate::services::{HttpReportClient, ReportController};
use crate::tui::widgets::ReportCard;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Fetch and print the report for a month
    Show {
        /// Month code or name (e.g., "03", "March")
        #[arg(short, long)]
        month: String,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch the report for a month and save it as a PDF
    Export {
        /// Month code or name (e.g., "07", "July")
        #[arg(short, long)]
        month: String,

        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Directory to write the PDF into
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(settings: &Settings, cmd: ReportCommands) -> ReportResult<()> {
    let client = HttpReportClient::from_settings(settings)?;
    let mut controller = ReportController::new(Arc::new(client), settings.user_id.clone());

    match cmd {
        ReportCommands::Show { month, year, json } => {
            let loaded = fetch(&mut controller, &month, year)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&loaded.report)?);
            } else {
                println!("{}", format_report(loaded, &settings.currency_symbol));
            }
        }
        ReportCommands::Export {
            month,
            year,
            output,
        } => {
            let loaded = fetch(&mut controller, &month, year)?.clone();
            let outcome = export_report(&loaded, settings, output)?;
            println!(
                "Saved {} ({} page{})",
                outcome.path.display(),
                outcome.pages,
                if outcome.pages == 1 { "" } else { "s" }
            );
        }
    }

    Ok(())
}

/// Select `month` and fetch its report for `year` (or the current year)
pub fn fetch<'a>(
    controller: &'a mut ReportController,
    month: &str,
    year: Option<i32>,
) -> ReportResult<&'a LoadedReport> {
    let month: Month = month.parse()?;
    controller.select_month(month);
    controller.fetch_report(year.unwrap_or_else(current_year))
}

/// Render the report card off-screen and export it
pub fn export_report(
    loaded: &LoadedReport,
    settings: &Settings,
    output: Option<PathBuf>,
) -> ReportResult<ExportOutcome> {
    let capture = BufferCapture::render(
        ReportCard::new(loaded, &settings.currency_symbol),
        ReportCard::export_area(),
    );

    let mut adapter = ExportAdapter::from_settings(settings);
    if let Some(dir) = output {
        adapter = ExportAdapter::new(dir).with_scale(settings.capture_scale);
    }
    adapter.export(&capture, &loaded.key)
}
