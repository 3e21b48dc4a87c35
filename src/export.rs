// src/export.rs

use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::models::{AnalysisResult, ScanResult};

/// Snapshot of the latest results, as written to disk.
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a> {
    pub exported_at: DateTime<Utc>,
    pub scan_results: &'a [ScanResult],
    pub analysis: Option<&'a AnalysisResult>,
}

impl<'a> ExportDocument<'a> {
    pub fn new(scan_results: &'a [ScanResult], analysis: Option<&'a AnalysisResult>) -> Self {
        Self { exported_at: Utc::now(), scan_results, analysis }
    }

    pub fn is_empty(&self) -> bool {
        self.scan_results.is_empty() && self.analysis.is_none()
    }

    fn file_name(&self) -> String {
        format!("safeguard-{}.json", self.exported_at.format("%Y%m%dT%H%M%S%.3fZ"))
    }
}

/// Writes `document` as pretty JSON under `<data_dir>/exports`.
///
/// Returns `Ok(None)` when there is nothing to export.
pub fn write_export(data_dir: &Path, document: &ExportDocument<'_>) -> Result<Option<PathBuf>> {
    if document.is_empty() {
        return Ok(None);
    }
    let directory = data_dir.join("exports");
    std::fs::create_dir_all(&directory)
        .wrap_err_with(|| format!("creating export directory {}", directory.display()))?;

    let path = directory.join(document.file_name());
    let json = serde_json::to_string_pretty(document).wrap_err("serializing export")?;
    std::fs::write(&path, json).wrap_err_with(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), scans = document.scan_results.len(), has_analysis = document.analysis.is_some(), "Results exported.");
    Ok(Some(path))
}
