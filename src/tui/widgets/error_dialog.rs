//! Error dialog widget
//!
//! Blocking dialog for failures the user must acknowledge, with recovery
//! suggestions.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::ReportError;

/// An error with its details and recovery suggestions
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// The error title/summary
    pub title: String,
    /// Detailed error message
    pub details: String,
    /// Suggested recovery actions
    pub suggestions: Vec<String>,
}

impl ErrorInfo {
    /// Create error info from a ReportError
    pub fn from_error(error: &ReportError) -> Self {
        let (title, suggestions) = match error {
            ReportError::FetchFailed { status, .. } => (
                "Report Unavailable",
                match status {
                    Some(404) => vec!["No report exists for this month yet".to_string()],
                    Some(code) if *code >= 500 => vec![
                        "The report service had a problem; try again later".to_string(),
                    ],
                    _ => vec!["Try viewing the report again".to_string()],
                },
            ),
            ReportError::ServiceUnreachable { base_url, .. } => (
                "Service Unreachable",
                vec![
                    format!("Check that the report service is running at {}", base_url),
                    "Set a different address with --api-url or FINREPORT_API_URL".to_string(),
                ],
            ),
            ReportError::ExportFailed(_) => (
                "Export Failed",
                vec![
                    "Check that the export directory exists and is writable".to_string(),
                    "View the report again before downloading".to_string(),
                ],
            ),
            ReportError::NoSelection => (
                "No Month Selected",
                vec!["Pick a month from the list first".to_string()],
            ),
            ReportError::FetchInFlight => (
                "Request Pending",
                vec!["Wait for the current report to load".to_string()],
            ),
            ReportError::Config(_) => (
                "Configuration Error",
                vec!["Check config.json in the data directory".to_string()],
            ),
            ReportError::Io(_) | ReportError::Json(_) => (
                "I/O Error",
                vec!["Check permissions on the data directory".to_string()],
            ),
            ReportError::Validation(_) => (
                "Validation Error",
                vec!["Review the input values and try again".to_string()],
            ),
        };

        Self {
            title: title.to_string(),
            details: error.to_string(),
            suggestions,
        }
    }
}

/// Widget for rendering an error dialog
pub struct ErrorDialog<'a> {
    error: &'a ErrorInfo,
}

impl<'a> ErrorDialog<'a> {
    /// Create a new error dialog widget
    pub fn new(error: &'a ErrorInfo) -> Self {
        Self { error }
    }
}

impl<'a> Widget for ErrorDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error: {} ", self.error.title))
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Details
                Constraint::Min(1),    // Suggestions
                Constraint::Length(1), // Close hint
            ])
            .split(inner);

        Paragraph::new(self.error.details.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        if !self.error.suggestions.is_empty() {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                "Suggestions:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            lines.extend(
                self.error
                    .suggestions
                    .iter()
                    .map(|s| Line::from(vec![Span::raw("  - "), Span::raw(s.as_str())])),
            );

            Paragraph::new(lines)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        Paragraph::new("Press Esc or Enter to close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}

/// Calculate the area for an error dialog (centered in parent)
pub fn error_dialog_area(parent: Rect) -> Rect {
    let width = (parent.width * 70 / 100).clamp(40, 80).min(parent.width);
    let height = (parent.height * 50 / 100).clamp(10, 20).min(parent.height);

    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;

    Rect::new(x, y, width, height)
}
