//! Report card widget
//!
//! The rendered monthly summary. The same widget is drawn on screen and
//! rendered off-screen when the report is exported.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::models::{format_amount, LoadedReport};

/// Rows the card needs, borders included
pub const REPORT_CARD_HEIGHT: u16 = 11;
/// Width used when the card is rendered off-screen
pub const REPORT_CARD_WIDTH: u16 = 56;

/// Widget for rendering a loaded report
pub struct ReportCard<'a> {
    loaded: &'a LoadedReport,
    currency: &'a str,
}

impl<'a> ReportCard<'a> {
    pub fn new(loaded: &'a LoadedReport, currency: &'a str) -> Self {
        Self { loaded, currency }
    }

    /// Off-screen area for export rendering
    pub fn export_area() -> Rect {
        Rect::new(0, 0, REPORT_CARD_WIDTH, REPORT_CARD_HEIGHT)
    }
}

fn row_color(label: &str) -> Color {
    match label {
        "Income" => Color::Green,
        "Expenses" => Color::Red,
        "Savings" => Color::Blue,
        _ => Color::Magenta,
    }
}

impl<'a> Widget for ReportCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" Report for {} ", self.loaded.key.title()))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );

        let mut lines = vec![Line::from("")];

        for (label, amount) in self.loaded.report.rows() {
            let color = row_color(label);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{:<10}", format!("{}:", label)),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format_amount(self.currency, amount),
                    Style::default().fg(color),
                ),
            ]));
        }

        let rule_width = area.width.saturating_sub(6) as usize;
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(rule_width)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  Generated on {}",
                self.loaded.fetched_at.format("%Y-%m-%d")
            ),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Month, QueryKey, Report};

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                let idx = (y * buf.area.width + x) as usize;
                text.push_str(buf.content[idx].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_title_and_values() {
        let loaded = LoadedReport::new(
            QueryKey::new(2024, Month::March),
            Report {
                total_income: Amount::new(5000),
                total_expenses: Amount::new(2000),
                total_savings: Amount::new(1000),
                balance: Amount::new(2000),
            },
        );
        let area = ReportCard::export_area();
        let mut buf = Buffer::empty(area);
        ReportCard::new(&loaded, "Rs.").render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Report for March 2024"));
        assert!(text.contains("Income:"));
        assert!(text.contains("Rs. 5000"));
        assert!(text.contains("Rs. 1000"));
        assert!(text.contains("Generated on"));
    }
}
