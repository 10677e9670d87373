//! Report Writer — serializes collected records into a single-worksheet
//! spreadsheet at a fixed path.

use std::fs;
use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::errors::AppError;
use crate::fields::ResumeRecord;

const SHEET_NAME: &str = "Resumes";
const HEADERS: [&str; 3] = ["Email", "Phone", "All Text"];

/// Writes the report workbook to `output_path`, overwriting any prior
/// report, and returns the same bytes for the download response.
///
/// One header row, then one row per record in collection order. All
/// cells are string-typed; an absent phone renders as an empty cell.
pub fn write_report(records: &[ResumeRecord], output_path: &Path) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet().set_name(SHEET_NAME)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, record.email.as_str())?;
        sheet.write_string(row, 1, record.phone.as_deref().unwrap_or(""))?;
        sheet.write_string(row, 2, record.text.as_str())?;
    }

    let buffer = workbook.save_to_buffer()?;
    fs::write(output_path, &buffer)?;
    Ok(buffer)
}
