//! Report formatting for terminal output
//!
//! Plain-text renditions of a report and of the month table for the CLI.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{format_amount, LoadedReport, Month};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    item: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Month")]
    label: &'static str,
}

/// Format a loaded report as a titled table
pub fn format_report(loaded: &LoadedReport, currency: &str) -> String {
    let rows: Vec<SummaryRow> = loaded
        .report
        .rows()
        .into_iter()
        .map(|(item, amount)| SummaryRow {
            item,
            amount: format_amount(currency, amount),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "Report for {}\n{}\nGenerated on {}",
        loaded.key.title(),
        table,
        loaded.fetched_at.format("%Y-%m-%d")
    )
}

/// Format the month selector table
pub fn format_month_list() -> String {
    let rows: Vec<MonthRow> = Month::ALL
        .iter()
        .map(|m| MonthRow {
            code: m.code(),
            label: m.label(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
