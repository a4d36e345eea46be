//! Month selection state
//!
//! Holds the dropdown choice. An empty selection is the "Select Month"
//! placeholder.

use crate::error::{ReportError, ReportResult};
use crate::models::{Month, QueryKey};

/// Current choice in the month dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthSelection {
    selected: Option<Month>,
}

impl MonthSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected month, if any
    pub fn selected(&self) -> Option<Month> {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    pub fn select(&mut self, month: Month) {
        self.selected = Some(month);
    }

    /// Reset to the placeholder
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Move down the dropdown; the placeholder is above January
    pub fn select_next(&mut self) {
        self.selected = match self.selected {
            None => Some(Month::January),
            Some(month) => Some(Month::from_number(month.number() + 1).unwrap_or(month)),
        };
    }

    /// Move up the dropdown; moving up from January returns to the placeholder
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            None | Some(Month::January) => None,
            Some(month) => Month::from_number(month.number() - 1),
        };
    }

    /// Query key for the selected month in `year`
    pub fn query_key(&self, year: i32) -> ReportResult<QueryKey> {
        self.selected
            .map(|month| QueryKey::new(year, month))
            .ok_or(ReportError::NoSelection)
    }
}
