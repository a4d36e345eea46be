//! User settings for finreport
//!
//! Manages the report service address, the current user, and export
//! preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::models::UserId;

/// Oversampling factor applied when capturing the report for export
pub const DEFAULT_CAPTURE_SCALE: u32 = 2;

/// Largest accepted oversampling factor
pub const MAX_CAPTURE_SCALE: u32 = 8;

/// User settings for finreport
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base address of the report service
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// User whose reports are requested
    #[serde(default)]
    pub user_id: UserId,

    /// Currency prefix shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Where exported PDFs are written (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Oversampling factor for report capture
    #[serde(default = "default_capture_scale")]
    pub capture_scale: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_capture_scale() -> u32 {
    DEFAULT_CAPTURE_SCALE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            user_id: UserId::default(),
            currency_symbol: default_currency(),
            export_dir: None,
            request_timeout_secs: None,
            capture_scale: default_capture_scale(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply command-line/environment overrides on top of the file settings
    ///
    /// The result is validated like a loaded file.
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        user: Option<String>,
    ) -> Result<Self, ReportError> {
        if let Some(url) = api_url {
            self.api_base_url = url;
        }
        if let Some(user) = user {
            self.user_id = UserId::new(user);
        }
        self.validate()?;
        Ok(self)
    }

    /// Directory exported documents are written to
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    fn validate(&self) -> Result<(), ReportError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ReportError::Config("api_base_url must not be empty".into()));
        }
        if self.capture_scale == 0 || self.capture_scale > MAX_CAPTURE_SCALE {
            return Err(ReportError::Config(format!(
                "capture_scale must be between 1 and {}",
                MAX_CAPTURE_SCALE
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, "http://localhost:5000");
        assert_eq!(settings.user_id.as_str(), "1");
        assert_eq!(settings.capture_scale, 2);
        assert!(settings.request_timeout_secs.is_none());
        assert_eq!(settings.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.api_base_url = "http://reports.internal:8080".into();
        settings.user_id = UserId::new("42");
        settings.request_timeout_secs = Some(10);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "http://reports.internal:8080");
        assert_eq!(loaded.user_id.as_str(), "42");
        assert_eq!(loaded.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded: Settings = serde_json::from_str(r#"{"user_id": "7"}"#).unwrap();
        assert_eq!(loaded.user_id.as_str(), "7");
        assert_eq!(loaded.api_base_url, "http://localhost:5000");
        assert_eq!(loaded.currency_symbol, "Rs.");
    }

    #[test]
    fn test_zero_scale_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"capture_scale": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_oversized_scale_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"capture_scale": 500}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));

        std::fs::write(paths.settings_file(), r#"{"capture_scale": 8}"#).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap().capture_scale, 8);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Some("http://127.0.0.1:9000".into()), Some("alice".into()))
            .unwrap();
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.user_id.as_str(), "alice");

        let untouched = Settings::default().with_overrides(None, None).unwrap();
        assert_eq!(untouched.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn test_empty_url_override_rejected() {
        let err = Settings::default()
            .with_overrides(Some(String::new()), None)
            .unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));

        let err = Settings::default()
            .with_overrides(Some("   ".into()), None)
            .unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }
}
