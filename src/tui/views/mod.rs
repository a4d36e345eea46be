//! TUI Views module
//!
//! The report screen and the status bar, plus the overlays drawn on top of
//! them (month list, toasts, error dialog).

pub mod report;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::{notification_area, AppLayout};
use super::widgets::{error_dialog_area, ErrorDialog, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    report::render_header(frame, app, layout.header);
    report::render_controls(frame, app, layout.controls);
    report::render_content(frame, app, layout.content);
    status_bar::render(frame, app, layout.status_bar);

    if app.dropdown.is_some() {
        report::render_dropdown(frame, app, layout.controls);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_area(frame.area()),
        );
    }

    if let Some(ref error) = app.error {
        frame.render_widget(ErrorDialog::new(error), error_dialog_area(frame.area()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::ReportError;
    use crate::models::{Month, UserId};
    use crate::services::controller::tests::{sample_report, FakeSource};
    use crate::services::ReportController;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::sync::mpsc;

    fn app_with_report(loaded: bool) -> App {
        let (tx, _rx) = mpsc::channel();
        let source = FakeSource::with_responses(vec![Ok(sample_report())]);
        let mut controller = ReportController::new(source, UserId::new("1"));
        if loaded {
            controller.select_month(Month::March);
            controller.fetch_report(2024).unwrap();
        }
        App::new(controller, &Settings::default(), tx)
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

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
    fn test_download_hidden_without_report() {
        let mut app = app_with_report(false);
        let text = draw(&mut app);

        assert!(text.contains("Select Month"));
        assert!(text.contains("View Report"));
        assert!(!text.contains("Download PDF"));
        assert!(app.report_region.is_none());
    }

    #[test]
    fn test_download_shown_with_report() {
        let mut app = app_with_report(true);
        let text = draw(&mut app);

        assert!(text.contains("Download PDF"));
        assert!(text.contains("Report for March 2024"));
        assert!(text.contains("Rs. 5000"));
        let region = app.report_region.unwrap();
        assert_eq!(region.height, crate::tui::widgets::report_card::REPORT_CARD_HEIGHT);
    }

    #[test]
    fn test_loading_indicator() {
        let mut app = app_with_report(false);
        app.controller.select_month(Month::May);
        let _pending = app.controller.begin_fetch(2024).unwrap();

        let text = draw(&mut app);
        assert!(text.contains("Loading..."));
    }

    #[test]
    fn test_error_dialog_drawn() {
        let mut app = app_with_report(true);
        app.show_error(&ReportError::http_status(500));

        let text = draw(&mut app);
        assert!(text.contains("Report Unavailable"));
        // The previous report stays underneath
        assert!(text.contains("Download PDF"));
    }

    #[test]
    fn test_dropdown_lists_months() {
        let mut app = app_with_report(false);
        app.open_dropdown();

        let text = draw(&mut app);
        assert!(text.contains("January"));
        assert!(text.contains("December"));
    }
}
