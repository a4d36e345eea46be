//! The closed set of selectable months
//!
//! Each entry has a two-digit code ("01".."12") used in query keys and
//! a full English label used in the selector and report titles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// A calendar month as offered by the month selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in selector order
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month number, 1-based
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Two-digit code used in query keys ("01".."12")
    pub fn code(self) -> &'static str {
        match self {
            Month::January => "01",
            Month::February => "02",
            Month::March => "03",
            Month::April => "04",
            Month::May => "05",
            Month::June => "06",
            Month::July => "07",
            Month::August => "08",
            Month::September => "09",
            Month::October => "10",
            Month::November => "11",
            Month::December => "12",
        }
    }

    /// Full month name
    pub fn label(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Look a month up by its exact two-digit code
    pub fn from_code(code: &str) -> Option<Month> {
        Month::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Look a month up by 1-based number
    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    /// Position in the selector (0-based)
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts a code ("03"), a bare number ("3"), or a name ("march", "Mar")
impl FromStr for Month {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(month) = Month::from_code(s) {
            return Ok(month);
        }

        if let Ok(number) = s.parse::<u32>() {
            return Month::from_number(number)
                .ok_or_else(|| ReportError::Validation(format!("Invalid month: {}", s)));
        }

        let lower = s.to_ascii_lowercase();
        if lower.len() >= 3 {
            if let Some(month) = Month::ALL
                .into_iter()
                .find(|m| m.label().to_ascii_lowercase().starts_with(&lower))
            {
                return Ok(month);
            }
        }

        Err(ReportError::Validation(format!(
            "Invalid month: {}. Use 01-12 or a month name",
            s
        )))
    }
}

impl TryFrom<String> for Month {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Month::from_code(&value)
            .ok_or_else(|| ReportError::Validation(format!("Invalid month code: {}", value)))
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_and_complete() {
        assert_eq!(Month::ALL.len(), 12);
        for (i, month) in Month::ALL.iter().enumerate() {
            assert_eq!(month.number() as usize, i + 1);
            assert_eq!(month.code(), format!("{:02}", i + 1));
            assert_eq!(month.index(), i);
        }
        assert_eq!(Month::ALL[0].label(), "January");
        assert_eq!(Month::ALL[11].label(), "December");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Month::from_code("07"), Some(Month::July));
        assert_eq!(Month::from_code("7"), None);
        assert_eq!(Month::from_code("13"), None);
        assert_eq!(Month::from_code(""), None);
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("03".parse::<Month>().unwrap(), Month::March);
        assert_eq!("3".parse::<Month>().unwrap(), Month::March);
        assert_eq!("march".parse::<Month>().unwrap(), Month::March);
        assert_eq!("Sep".parse::<Month>().unwrap(), Month::September);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("0".parse::<Month>().unwrap_err().is_validation());
        assert!("13".parse::<Month>().is_err());
        assert!("ju".parse::<Month>().is_err());
        assert!("smarch".parse::<Month>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&Month::October).unwrap();
        assert_eq!(json, "\"10\"");
        let back: Month = serde_json::from_str("\"02\"").unwrap();
        assert_eq!(back, Month::February);
        assert!(serde_json::from_str::<Month>("\"February\"").is_err());
    }
}
