//! Monthly financial summary as served by the report service

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::period::QueryKey;

/// One reported figure, kept as the JSON value the service sent
///
/// Numbers keep their original text (`5000`, `1234.5678`), strings are shown
/// as-is, and a missing field is `null`. Nothing is rounded or checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Value);

impl Amount {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// The raw value as received
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

/// Pre-aggregated totals for one month
///
/// Values are passed through exactly as received; the service owns the
/// relationship between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub total_income: Amount,
    #[serde(default)]
    pub total_expenses: Amount,
    #[serde(default)]
    pub total_savings: Amount,
    #[serde(default)]
    pub balance: Amount,
}

impl Report {
    /// Labelled rows in display order
    pub fn rows(&self) -> [(&'static str, &Amount); 4] {
        [
            ("Income", &self.total_income),
            ("Expenses", &self.total_expenses),
            ("Savings", &self.total_savings),
            ("Balance", &self.balance),
        ]
    }
}

/// A report together with the key it was fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedReport {
    pub key: QueryKey,
    pub report: Report,
    pub fetched_at: DateTime<Local>,
}

impl LoadedReport {
    pub fn new(key: QueryKey, report: Report) -> Self {
        Self {
            key,
            report,
            fetched_at: Local::now(),
        }
    }
}

/// Format an amount with a currency prefix, e.g. "Rs. 5000"
pub fn format_amount(symbol: &str, amount: &Amount) -> String {
    format!("{} {}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    fn parse(body: &str) -> Report {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_deserialize_service_body() {
        let report = parse(
            r#"{"total_income":5000,"total_expenses":2000,"total_savings":1000,"balance":2000}"#,
        );
        assert_eq!(report.total_income, Amount::new(5000));
        assert_eq!(report.total_expenses, Amount::new(2000));
        assert_eq!(report.total_savings, Amount::new(1000));
        assert_eq!(report.balance, Amount::new(2000));
    }

    #[test]
    fn test_inconsistent_values_pass_through() {
        let report = parse(r#"{"total_income":1,"total_expenses":2,"total_savings":3,"balance":99.5}"#);
        assert_eq!(report.balance.to_string(), "99.5");
    }

    #[test]
    fn test_numeric_strings_are_kept() {
        let report = parse(
            r#"{"total_income":"5000","total_expenses":"2000.50","total_savings":"1000","balance":"1999.50"}"#,
        );
        assert_eq!(format_amount("Rs.", &report.total_income), "Rs. 5000");
        assert_eq!(format_amount("Rs.", &report.balance), "Rs. 1999.50");
    }

    #[test]
    fn test_missing_fields_are_null() {
        let report = parse(r#"{"total_income":1,"total_expenses":2}"#);
        assert_eq!(report.total_income, Amount::new(1));
        assert_eq!(report.total_savings.as_value(), &Value::Null);
        assert_eq!(report.balance.to_string(), "null");
    }

    #[test]
    fn test_rows_order() {
        let report = parse(r#"{"total_income":1,"total_expenses":2,"total_savings":3,"balance":4}"#);
        let labels: Vec<_> = report.rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Income", "Expenses", "Savings", "Balance"]);
    }

    #[test]
    fn test_format_amount_is_verbatim() {
        let report = parse(
            r#"{"total_income":1234.5678,"total_expenses":-5,"total_savings":0,"balance":5000}"#,
        );
        assert_eq!(format_amount("Rs.", &report.total_income), "Rs. 1234.5678");
        assert_eq!(format_amount("Rs.", &report.total_expenses), "Rs. -5");
        assert_eq!(format_amount("Rs.", &report.total_savings), "Rs. 0");
        assert_eq!(format_amount("$", &report.balance), "$ 5000");
    }

    #[test]
    fn test_loaded_report_keeps_key() {
        let key = QueryKey::new(2024, Month::March);
        let loaded = LoadedReport::new(key, parse("{}"));
        assert_eq!(loaded.key, key);
    }
}
