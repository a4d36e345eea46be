//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::sync::mpsc;
use std::thread;

use ratatui::layout::Rect;
use tracing::info;

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::export::{BufferCapture, ExportAdapter, ExportOutcome};
use crate::models::{current_year, Month};
use crate::services::{FetchOutcome, ReportController};

use super::event::Event;
use super::widgets::{ErrorInfo, Notification, NotificationQueue, ReportCard};

/// Focusable controls on the report screen, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    MonthSelect,
    ViewReport,
    DownloadPdf,
    Back,
}

impl Control {
    const ORDER: [Control; 4] = [
        Control::MonthSelect,
        Control::ViewReport,
        Control::DownloadPdf,
        Control::Back,
    ];

    fn step(self, forward: bool, download_visible: bool) -> Self {
        let len = Self::ORDER.len();
        let mut idx = Self::ORDER.iter().position(|c| *c == self).unwrap_or(0);
        loop {
            idx = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
            let next = Self::ORDER[idx];
            if next != Control::DownloadPdf || download_visible {
                return next;
            }
        }
    }
}

/// Number of entries in the month dropdown, placeholder included
pub const DROPDOWN_LEN: usize = Month::ALL.len() + 1;

/// Main application state
pub struct App {
    /// Selection, loading flag and the displayed report
    pub controller: ReportController,

    /// Currency symbol used for amounts
    pub currency: String,

    /// Writes the displayed report to PDF
    pub exporter: ExportAdapter,

    /// Control that currently has focus
    pub focus: Control,

    /// Highlighted dropdown entry while the month list is open
    pub dropdown: Option<usize>,

    /// Where the report card was last drawn
    pub report_region: Option<Rect>,

    /// Transient toasts
    pub notifications: NotificationQueue,

    /// Blocking error dialog, if one is open
    pub error: Option<ErrorInfo>,

    /// Status message to display
    pub status_message: Option<String>,

    /// Ticks elapsed, drives the loading spinner
    pub tick_count: u64,

    /// Whether the app should quit
    pub should_quit: bool,

    sender: mpsc::Sender<Event>,
}

impl App {
    /// Create a new App; fetch results are posted to `sender`
    pub fn new(
        controller: ReportController,
        settings: &Settings,
        sender: mpsc::Sender<Event>,
    ) -> Self {
        Self {
            controller,
            currency: settings.currency_symbol.clone(),
            exporter: ExportAdapter::from_settings(settings),
            focus: Control::default(),
            dropdown: None,
            report_region: None,
            notifications: NotificationQueue::new(),
            error: None,
            status_message: None,
            tick_count: 0,
            should_quit: false,
            sender,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Leave the report screen
    pub fn navigate_back(&mut self) {
        info!("leaving report screen");
        self.quit();
    }

    /// Check if a blocking dialog is open
    pub fn has_dialog(&self) -> bool {
        self.error.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.error = None;
    }

    pub fn show_error(&mut self, error: &ReportError) {
        self.error = Some(ErrorInfo::from_error(error));
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Advance timers
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.notifications.remove_expired();
    }

    /// Move focus to the next visible control
    pub fn focus_next(&mut self) {
        self.focus = self.focus.step(true, self.controller.can_export());
    }

    /// Move focus to the previous visible control
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.step(false, self.controller.can_export());
    }

    /// Open the month list with the current choice highlighted
    pub fn open_dropdown(&mut self) {
        let current = self
            .controller
            .selection()
            .selected()
            .map(|m| m.index() + 1)
            .unwrap_or(0);
        self.dropdown = Some(current);
    }

    pub fn dropdown_down(&mut self) {
        if let Some(idx) = self.dropdown.as_mut() {
            *idx = (*idx + 1).min(DROPDOWN_LEN - 1);
        }
    }

    pub fn dropdown_up(&mut self) {
        if let Some(idx) = self.dropdown.as_mut() {
            *idx = idx.saturating_sub(1);
        }
    }

    /// Apply the highlighted entry and close the list
    pub fn confirm_dropdown(&mut self) {
        if let Some(idx) = self.dropdown.take() {
            match idx.checked_sub(1).and_then(|i| Month::ALL.get(i)) {
                Some(month) => self.controller.select_month(*month),
                None => self.controller.selection_mut().clear(),
            }
        }
    }

    pub fn cancel_dropdown(&mut self) {
        self.dropdown = None;
    }

    /// Press the focused control
    pub fn activate(&mut self) {
        match self.focus {
            Control::MonthSelect => self.open_dropdown(),
            Control::ViewReport => self.trigger_fetch(),
            Control::DownloadPdf => self.download_pdf(),
            Control::Back => self.navigate_back(),
        }
    }

    /// Start fetching the selected month's report on a worker thread
    pub fn trigger_fetch(&mut self) {
        match self.controller.begin_fetch(current_year()) {
            Ok(pending) => {
                self.status_message = Some(format!("Loading report for {}", pending.key().title()));
                let sender = self.sender.clone();
                thread::spawn(move || {
                    let outcome = pending.run();
                    let _ = sender.send(Event::ReportLoaded(outcome));
                });
            }
            Err(ReportError::NoSelection) => {
                self.notify(Notification::warning(ReportError::NoSelection.to_string()));
            }
            Err(ReportError::FetchInFlight) => {
                self.notify(Notification::info("Still loading the previous request"));
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Apply a finished fetch
    pub fn on_fetch_complete(&mut self, outcome: FetchOutcome) {
        match self.controller.complete_fetch(outcome).map(|l| l.key.title()) {
            Ok(title) => {
                self.status_message = Some(format!("Report for {}", title));
            }
            Err(e) => {
                self.status_message = None;
                self.show_error(&e);
            }
        }
    }

    /// Export the displayed report as it was last drawn
    pub fn download_pdf(&mut self) {
        if !self.controller.can_export() {
            return;
        }
        match self.export_displayed() {
            Ok(outcome) => {
                self.notify(Notification::success(format!("Saved {}", outcome.path.display())));
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn export_displayed(&self) -> ReportResult<ExportOutcome> {
        let loaded = self
            .controller
            .report()
            .ok_or_else(|| ReportError::ExportFailed("no report to export".into()))?;
        let region = self
            .report_region
            .filter(|r| !r.is_empty())
            .ok_or_else(|| ReportError::ExportFailed("report region is not rendered".into()))?;

        let capture = BufferCapture::render(ReportCard::new(loaded, &self.currency), region);
        self.exporter.export(&capture, &loaded.key)
    }
}
