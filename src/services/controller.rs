//! Report fetch controller
//!
//! Owns the view state of the report screen: the month selection, the last
//! successfully fetched report, and the loading flag.
//!
//! A fetch is split in two so an event loop can run the request elsewhere:
//! [`ReportController::begin_fetch`] checks preconditions and raises the
//! loading flag, [`ReportController::complete_fetch`] lowers it again and
//! stores or surfaces the outcome. [`ReportController::fetch_report`] does
//! both in one blocking call.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::client::ReportSource;
use super::selection::MonthSelection;
use crate::error::{ReportError, ReportResult};
use crate::models::{LoadedReport, Month, QueryKey, Report, UserId};

/// A dispatched request that has not yet been run
pub struct PendingFetch {
    source: Arc<dyn ReportSource>,
    user_id: UserId,
    key: QueryKey,
}

impl PendingFetch {
    pub fn key(&self) -> QueryKey {
        self.key
    }

    /// Perform the request; blocks until the service answers or fails
    pub fn run(self) -> FetchOutcome {
        let result = self.source.fetch(&self.user_id, &self.key);
        FetchOutcome {
            key: self.key,
            result,
        }
    }
}

/// The resolution of a [`PendingFetch`]
#[derive(Debug)]
pub struct FetchOutcome {
    pub key: QueryKey,
    pub result: ReportResult<Report>,
}

/// State machine behind the report screen
pub struct ReportController {
    source: Arc<dyn ReportSource>,
    user_id: UserId,
    selection: MonthSelection,
    report: Option<LoadedReport>,
    loading: bool,
}

impl ReportController {
    /// Create a controller for `user_id`, reading reports from `source`
    pub fn new(source: Arc<dyn ReportSource>, user_id: UserId) -> Self {
        Self {
            source,
            user_id,
            selection: MonthSelection::new(),
            report: None,
            loading: false,
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn selection(&self) -> &MonthSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut MonthSelection {
        &mut self.selection
    }

    pub fn select_month(&mut self, month: Month) {
        self.selection.select(month);
    }

    /// The report currently displayed, if any
    pub fn report(&self) -> Option<&LoadedReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the "Download PDF" action is offered
    pub fn can_export(&self) -> bool {
        self.report.is_some()
    }

    /// Whether the "View Report" action is enabled
    pub fn can_fetch(&self) -> bool {
        !self.loading
    }

    /// Validate the request and mark the controller as loading
    ///
    /// Fails with [`ReportError::NoSelection`] when no month is chosen and
    /// with [`ReportError::FetchInFlight`] while another fetch is pending.
    /// Neither failure touches the service.
    pub fn begin_fetch(&mut self, year: i32) -> ReportResult<PendingFetch> {
        if self.loading {
            warn!("fetch requested while another is in flight");
            return Err(ReportError::FetchInFlight);
        }

        let key = self.selection.query_key(year)?;
        self.loading = true;
        info!(user = %self.user_id, %key, "fetching report");

        Ok(PendingFetch {
            source: Arc::clone(&self.source),
            user_id: self.user_id.clone(),
            key,
        })
    }

    /// Record the outcome of a fetch
    ///
    /// Always clears the loading flag. A failure leaves the previous report
    /// in place.
    pub fn complete_fetch(&mut self, outcome: FetchOutcome) -> ReportResult<&LoadedReport> {
        self.loading = false;

        match outcome.result {
            Ok(report) => {
                info!(key = %outcome.key, "report loaded");
                Ok(self.report.insert(LoadedReport::new(outcome.key, report)))
            }
            Err(e) => {
                error!(key = %outcome.key, error = %e, "report fetch failed");
                Err(e)
            }
        }
    }

    /// Fetch the report for the selected month in `year`, blocking
    pub fn fetch_report(&mut self, year: i32) -> ReportResult<&LoadedReport> {
        let pending = self.begin_fetch(year)?;
        let outcome = pending.run();
        self.complete_fetch(outcome)
    }
}
