//! Query keys identifying a reporting period
//!
//! A query key is the `YYYY-MM` string the report service is keyed by.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;

/// The `year-month` pair a report is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    pub year: i32,
    pub month: Month,
}

impl QueryKey {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Title shown above the report, e.g. "March 2024"
    pub fn title(&self) -> String {
        format!("{} {}", self.month.label(), self.year)
    }
}

/// The current calendar year on the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{}", self.year, self.month.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_year_dash_code() {
        assert_eq!(QueryKey::new(2024, Month::March).to_string(), "2024-03");
        assert_eq!(QueryKey::new(2025, Month::December).to_string(), "2025-12");
    }

    #[test]
    fn test_every_month_builds_expected_key() {
        for month in Month::ALL {
            let key = QueryKey::new(2024, month);
            assert_eq!(key.to_string(), format!("2024-{}", month.code()));
        }
    }

    #[test]
    fn test_current_year() {
        assert_eq!(current_year(), chrono::Local::now().year());
    }

    #[test]
    fn test_title() {
        assert_eq!(QueryKey::new(2024, Month::February).title(), "February 2024");
    }
}
