//! Output module for exporting categorized URLs
//!
//! This module handles:
//! - Choosing the report format from the output file extension
//! - Writing the report (XLSX by default, CSV for `.csv` paths)
//! - Computing and logging per-category counts

mod csv_output;
pub mod stats;
mod traits;
mod xlsx_output;

pub use csv_output::CsvWriter;
pub use stats::{log_summary, CategorySummary};
pub use traits::{ExportError, ExportResult, ReportWriter, COLUMNS};
pub use xlsx_output::XlsxWriter;

use crate::model::CategorizedRecord;
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Csv,
}

impl ExportFormat {
    /// Picks the format from a file extension (case-insensitive)
    ///
    /// Anything other than `.csv` is written as XLSX.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }

    /// Returns the writer for this format
    pub fn writer(&self) -> &'static dyn ReportWriter {
        match self {
            Self::Xlsx => &XlsxWriter,
            Self::Csv => &CsvWriter,
        }
    }
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// The file actually written
    pub path: PathBuf,

    /// Per-category counts of the written records
    pub summary: CategorySummary,
}

/// Builds the default report file name for a point in time
///
/// Format: `sitemap_results_<YYYYMMDD_HHMMSS>.xlsx`
pub fn default_output_name(timestamp: NaiveDateTime) -> String {
    format!("sitemap_results_{}.xlsx", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Exports categorized records and logs the category summary
///
/// # Arguments
///
/// * `records` - The categorized records, in export order
/// * `output` - Destination file; `sitemap_results_<timestamp>.xlsx` in the
///   current directory when `None`
///
/// # Returns
///
/// * `Ok(ExportReport)` - The path written and its category counts
/// * `Err(ExportError)` - The destination could not be written
pub fn export(records: &[CategorizedRecord], output: Option<&Path>) -> ExportResult<ExportReport> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_output_name(Local::now().naive_local())),
    };

    let format = ExportFormat::from_path(&path);
    tracing::debug!("Writing {} records as {:?}", records.len(), format);

    format.writer().write(records, &path)?;
    tracing::info!("Results exported to {}", path.display());

    let summary = CategorySummary::from_records(records);
    log_summary(&summary);

    Ok(ExportReport { path, summary })
}
