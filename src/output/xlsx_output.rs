//! XLSX workbook output

use crate::model::CategorizedRecord;
use crate::output::traits::{record_cells, ExportResult, ReportWriter, COLUMNS};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Writes records to a single-sheet XLSX workbook
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWriter;

impl ReportWriter for XlsxWriter {
    fn write(&self, records: &[CategorizedRecord], path: &Path) -> ExportResult<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();

        for (col, name) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        }

        for (index, record) in records.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, cell) in record_cells(record).iter().enumerate() {
                // Absent lastmod stays a blank cell
                if !cell.is_empty() {
                    worksheet.write_string(row, col as u16, *cell)?;
                }
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}
