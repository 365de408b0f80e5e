use crate::models::seo::{AuditReport, CellValue, REPORT_HEADERS};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

// Longest string Excel stores in a single cell.
const MAX_CELL_CHARS: usize = 32_767;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write spreadsheet {}: {source}", .path.display())]
    Xlsx {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },

    #[error("failed to create {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the report as a single-sheet workbook: header row, then one row per
/// report line.
pub fn save_report_xlsx(output_path: &Path, report: &AuditReport) -> Result<(), ReportError> {
    let xlsx_error = |source| ReportError::Xlsx {
        path: output_path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    fill_sheet(worksheet, report).map_err(xlsx_error)?;
    workbook.save(output_path).map_err(xlsx_error)?;
    Ok(())
}

fn fill_sheet(worksheet: &mut Worksheet, report: &AuditReport) -> Result<(), XlsxError> {
    for (col, header) in REPORT_HEADERS.iter().enumerate() {
        write_text(worksheet, 0, col as u16, header)?;
    }

    for (index, row) in report.rows.iter().enumerate() {
        let line = index as u32 + 1;
        write_text(worksheet, line, 0, &row.parameter)?;
        write_cell(worksheet, line, 1, &row.value)?;
        write_cell(worksheet, line, 2, &row.extra)?;
        if !row.status.is_empty() {
            write_text(worksheet, line, 3, &row.status)?;
        }
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
) -> Result<(), XlsxError> {
    match value {
        CellValue::Text(text) if text.is_empty() => {}
        CellValue::Text(text) => {
            write_text(worksheet, row, col, text)?;
        }
        CellValue::Bool(flag) => {
            worksheet.write_boolean(row, col, *flag)?;
        }
        CellValue::Int(n) => {
            worksheet.write_number(row, col, *n as f64)?;
        }
        CellValue::Empty => {}
    }
    Ok(())
}

// Page text such as a title can exceed the cell limit; it is clipped rather
// than failing the whole report.
fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, text: &str) -> Result<(), XlsxError> {
    if text.chars().count() > MAX_CELL_CHARS {
        let clipped: String = text.chars().take(MAX_CELL_CHARS).collect();
        worksheet.write_string(row, col, clipped)?;
    } else {
        worksheet.write_string(row, col, text)?;
    }
    Ok(())
}

pub fn save_report_json(output_path: &Path, report: &AuditReport) -> Result<(), ReportError> {
    let file = File::create(output_path).map_err(|source| ReportError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
