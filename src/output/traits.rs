//! Report writer traits and types
//!
//! This module defines the trait interface for report writers and the error
//! type shared by every export format.

use crate::model::CategorizedRecord;
use std::path::Path;
use thiserror::Error;

/// Column headers, in the order every format writes them
pub const COLUMNS: [&str; 3] = ["url", "category", "lastmod"];

/// Errors that can occur during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Trait for report writers
///
/// A writer serializes categorized records as a table with a header row
/// (`url`, `category`, `lastmod`) followed by one row per record.
pub trait ReportWriter {
    /// Writes all records to `path`, replacing any existing file
    ///
    /// # Arguments
    ///
    /// * `records` - The records to write, in order
    /// * `path` - Destination file
    fn write(&self, records: &[CategorizedRecord], path: &Path) -> ExportResult<()>;
}

/// Splits a record into its cells, in column order
pub(crate) fn record_cells(record: &CategorizedRecord) -> [&str; 3] {
    [
        record.url.as_str(),
        record.category.as_str(),
        record.lastmod_cell(),
    ]
}
