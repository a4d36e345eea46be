//! Export module for finreport
//!
//! Turns a rendered report into a downloadable PDF:
//! - `capture`: rasterize a rendered region at an oversampling factor
//! - `page`: fixed A4 portrait geometry and multi-page tiling
//! - `pdf`: write the image onto pages with printpdf
//!
//! Exports are single attempts; a failure is returned as
//! [`ReportError::ExportFailed`](crate::error::ReportError::ExportFailed).

pub mod capture;
pub mod glyphs;
pub mod page;
pub mod pdf;

use std::path::{Path, PathBuf};

use tracing::{error, info};

pub use capture::{BufferCapture, RegionCapture};
pub use page::{PageLayout, A4_HEIGHT_MM, A4_WIDTH_MM};

use crate::config::settings::DEFAULT_CAPTURE_SCALE;
use crate::config::Settings;
use crate::error::{ReportError, ReportResult};
use crate::models::QueryKey;

/// File name (without extension) for the report of `key`
pub fn export_file_stem(key: &QueryKey) -> String {
    format!("Financial_Report_{}-{}", key.year, key.month.code())
}

/// What an export produced
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub pages: usize,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub width_mm: f64,
    pub height_mm: f64,
}

/// Captures a rendered report and saves it as a PDF
#[derive(Debug, Clone)]
pub struct ExportAdapter {
    layout: PageLayout,
    scale: u32,
    output_dir: PathBuf,
}

impl ExportAdapter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            layout: PageLayout::a4_portrait(),
            scale: DEFAULT_CAPTURE_SCALE,
            output_dir: output_dir.into(),
        }
    }

    /// Adapter configured from the export directory and capture scale settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.export_dir()).with_scale(settings.capture_scale)
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path the report of `key` is written to
    pub fn output_path(&self, key: &QueryKey) -> PathBuf {
        self.output_dir
            .join(format!("{}.pdf", export_file_stem(key)))
    }

    /// Capture `region` and write it as the PDF for `key`
    pub fn export(&self, region: &dyn RegionCapture, key: &QueryKey) -> ReportResult<ExportOutcome> {
        self.try_export(region, key).map_err(|e| {
            error!(%key, error = %e, "report export failed");
            match e {
                ReportError::ExportFailed(_) => e,
                other => ReportError::ExportFailed(other.to_string()),
            }
        })
    }

    fn try_export(&self, region: &dyn RegionCapture, key: &QueryKey) -> ReportResult<ExportOutcome> {
        let image = region.capture(self.scale)?;
        let path = self.output_path(key);
        let title = export_file_stem(key);

        let pages = pdf::write_pdf(&image, &self.layout, &title, &path)?;

        let outcome = ExportOutcome {
            pages,
            image_width_px: image.width(),
            image_height_px: image.height(),
            width_mm: self.layout.width_mm,
            height_mm: self.layout.image_height_mm(image.width(), image.height()),
            path,
        };
        info!(path = %outcome.path.display(), pages, "report exported");
        Ok(outcome)
    }
}
