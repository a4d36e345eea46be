//! Layout definitions for the TUI
//!
//! Defines the report screen structure: header, control row, content, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the month selector button
pub const MONTH_SELECT_WIDTH: u16 = 22;

/// Layout regions for the report screen
pub struct AppLayout {
    /// Screen title
    pub header: Rect,
    /// Month selector and action buttons
    pub controls: Rect,
    /// Loading indicator and report card
    pub content: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Controls
                Constraint::Min(3),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            controls: chunks[1],
            content: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Buttons in the control row
pub struct ControlsLayout {
    pub month_select: Rect,
    pub view_report: Rect,
    pub download_pdf: Rect,
    pub back: Rect,
}

impl ControlsLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(MONTH_SELECT_WIDTH),
                Constraint::Length(15), // View Report
                Constraint::Length(16), // Download PDF
                Constraint::Length(10), // Back
                Constraint::Min(0),
            ])
            .split(area);

        Self {
            month_select: chunks[0],
            view_report: chunks[1],
            download_pdf: chunks[2],
            back: chunks[3],
        }
    }
}

/// Drop-down list anchored below the month selector, clipped to `bounds`
pub fn dropdown_area(anchor: Rect, rows: u16, bounds: Rect) -> Rect {
    let y = anchor.bottom().min(bounds.bottom());
    let height = (rows + 2).min(bounds.bottom().saturating_sub(y));
    Rect::new(anchor.x, y, anchor.width, height)
}

/// Toast area in the top-right corner
pub fn notification_area(parent: Rect) -> Rect {
    let width = (parent.width / 2).clamp(20, 50).min(parent.width);
    let x = parent.right().saturating_sub(width + 1).max(parent.x);
    Rect::new(x, parent.y + 1, width, 3.min(parent.height))
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
