//! Report service HTTP client
//!
//! Blocking reqwest client (no Tokio runtime required). One GET per call:
//! `{base}/api/reports/{user_id}/{YYYY-MM}`. No retries.

use std::time::Duration;

use tracing::{debug, error};

use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::{QueryKey, Report, UserId};

/// Anything that can produce the report for a user and period
pub trait ReportSource: Send + Sync {
    /// Fetch the report for `key`; a single attempt
    fn fetch(&self, user_id: &UserId, key: &QueryKey) -> ReportResult<Report>;
}

/// Report service client over HTTP
#[derive(Clone)]
pub struct HttpReportClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl HttpReportClient {
    /// Create a client for `base_url`; `timeout` of `None` waits indefinitely
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ReportResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("finreport/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ReportError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the configured address and timeout
    pub fn from_settings(settings: &Settings) -> ReportResult<Self> {
        Self::new(
            settings.api_base_url.clone(),
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the report resource
    pub fn report_url(&self, user_id: &UserId, key: &QueryKey) -> String {
        format!("{}/api/reports/{}/{}", self.base_url, user_id, key)
    }
}

impl ReportSource for HttpReportClient {
    fn fetch(&self, user_id: &UserId, key: &QueryKey) -> ReportResult<Report> {
        let url = self.report_url(user_id, key);
        debug!(%url, "requesting report");

        let response = self.http.get(&url).send().map_err(|e| {
            error!(%url, error = %e, "report service unreachable");
            ReportError::ServiceUnreachable {
                base_url: self.base_url.clone(),
                detail: e.to_string(),
            }
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            error!(%url, status, %body, "report service returned an error status");
            return Err(ReportError::http_status(status));
        }

        response.json::<Report>().map_err(|e| {
            error!(%url, error = %e, "report body could not be parsed");
            ReportError::FetchFailed {
                status: Some(status),
                message: format!("invalid report body: {}", e),
            }
        })
    }
}
