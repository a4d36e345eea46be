//! Report screen
//!
//! Month selector, action buttons, loading indicator, and the report card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Month;
use crate::tui::app::{App, Control};
use crate::tui::layout::{centered_rect_fixed, dropdown_area, ControlsLayout};
use crate::tui::widgets::report_card::{ReportCard, REPORT_CARD_HEIGHT, REPORT_CARD_WIDTH};

const PLACEHOLDER: &str = "Select Month";
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the screen title
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Monthly Financial Report",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  user {}", app.controller.user_id()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(header, area);
}

fn button<'a>(label: impl Into<String>, focused: bool, enabled: bool) -> Paragraph<'a> {
    let text_style = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    Paragraph::new(label.into())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        )
}

/// Render the month selector and the action buttons
pub fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ControlsLayout::new(area);
    let focus = app.focus;

    let month_label = match app.controller.selection().selected() {
        Some(month) => format!("{} v", month.label()),
        None => format!("{} v", PLACEHOLDER),
    };
    frame.render_widget(
        button(month_label, focus == Control::MonthSelect, true),
        layout.month_select,
    );

    frame.render_widget(
        button(
            "View Report",
            focus == Control::ViewReport,
            app.controller.can_fetch(),
        ),
        layout.view_report,
    );

    if app.controller.can_export() {
        frame.render_widget(
            button("Download PDF", focus == Control::DownloadPdf, true),
            layout.download_pdf,
        );
    }

    frame.render_widget(button("Back", focus == Control::Back, true), layout.back);
}

/// Render the open month list over the content
pub fn render_dropdown(frame: &mut Frame, app: &App, controls: Rect) {
    let Some(highlighted) = app.dropdown else {
        return;
    };

    let anchor = ControlsLayout::new(controls).month_select;
    let area = dropdown_area(anchor, (Month::ALL.len() + 1) as u16, frame.area());

    let items: Vec<ListItem> = std::iter::once(ListItem::new(PLACEHOLDER))
        .chain(Month::ALL.iter().map(|m| ListItem::new(m.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(highlighted));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the loading indicator and the report card
///
/// Records where the card was drawn so it can be exported at that size.
pub fn render_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut card_area = area;

    if app.controller.is_loading() {
        let spinner = SPINNER[(app.tick_count as usize) % SPINNER.len()];
        let indicator = Paragraph::new(format!("{} Loading...", spinner))
            .style(Style::default().fg(Color::Yellow));
        let line = Rect::new(
            area.x + 1,
            area.y,
            area.width.saturating_sub(1),
            area.height.min(1),
        );
        frame.render_widget(indicator, line);
        card_area.y = card_area.y.saturating_add(1).min(area.bottom());
        card_area.height = card_area.height.saturating_sub(1);
    }

    let Some(loaded) = app.controller.report() else {
        app.report_region = None;
        if !app.controller.is_loading() {
            let hint = Paragraph::new("Choose a month, then View Report")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, centered_rect_fixed(40, 1, area));
        }
        return;
    };

    let region = Rect::new(
        card_area.x,
        card_area.y,
        card_area.width.min(REPORT_CARD_WIDTH),
        card_area.height.min(REPORT_CARD_HEIGHT),
    );
    frame.render_widget(ReportCard::new(loaded, &app.currency), region);
    app.report_region = Some(region);
}
