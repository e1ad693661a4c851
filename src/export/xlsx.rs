// Spreadsheet writer.
// Serializes the header and data rows onto the first worksheet of a new workbook.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::WriteError;

use super::rows::{ExportRow, HEADER};

/// Write the header plus `rows` to a new workbook at `path`.
pub fn write_workbook(path: &Path, rows: &[ExportRow]) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, label) in (0u16..).zip(HEADER) {
        worksheet.write_string_with_format(0, col, label, &bold)?;
    }

    for (row, record) in (1u32..).zip(rows) {
        for (col, value) in (0u16..).zip(record.cells()) {
            worksheet.write_string(row, col, value)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
