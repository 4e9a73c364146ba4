//! CSV output

use crate::model::CategorizedRecord;
use crate::output::traits::{record_cells, ExportResult, ReportWriter, COLUMNS};
use std::path::Path;

/// Writes records as comma-separated values with a header row
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvWriter;

impl ReportWriter for CsvWriter {
    fn write(&self, records: &[CategorizedRecord], path: &Path) -> ExportResult<()> {
        let mut writer = csv::Writer::from_path(path)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(record_cells(record))?;
        }

        writer.flush()?;
        Ok(())
    }
}
