//! Spreadsheet loading.
//!
//! Workbooks (xlsx, xlsm, xlsb, xls, ods) are read through calamine, plain
//! `.csv` files through the csv crate. Either way the caller gets the rows
//! of the requested window as [`RawRow`]s with empty rows already removed.

mod cells;

use crate::config::RowWindow;
use crate::errors::{AppError, AppResult};
use crate::models::{CellValue, RawRow};
use calamine::{Reader, open_workbook_auto};
use log::debug;
use std::path::Path;

/// Rows loaded from one sheet.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub sheet_name: String,
    pub rows: Vec<RawRow>,
    /// Widest row, before empty-row filtering.
    pub columns: usize,
}

pub fn load_rows(path: &Path, sheet: Option<&str>, window: RowWindow) -> AppResult<SheetData> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let data = if is_csv {
        load_csv(path, window)?
    } else {
        load_workbook(path, sheet, window)?
    };

    debug!(
        "Loaded data from file {}, sheet '{}', starting at row {}. Read {} rows with {} columns",
        path.display(),
        data.sheet_name,
        window.start,
        data.rows.len(),
        data.columns
    );
    Ok(data)
}

fn load_workbook(path: &Path, sheet: Option<&str>, window: RowWindow) -> AppResult<SheetData> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => {
            return Err(AppError::Sheet(format!(
                "sheet '{}' not found in {} (available: {})",
                name,
                path.display(),
                names.join(", ")
            )));
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| AppError::Sheet(format!("{} contains no sheets", path.display())))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;

    // The range starts at the first used cell, not at A1.
    let (first_row, first_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows = Vec::new();
    let mut columns = 0;
    for (offset, cells) in range.rows().enumerate() {
        let idx = first_row + offset;
        if !window.contains(idx) {
            continue;
        }
        let mut values = vec![CellValue::Empty; first_col];
        values.extend(cells.iter().map(cells::from_calamine));
        columns = columns.max(values.len());

        let row = RawRow::new(idx + 1, values);
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(SheetData {
        sheet_name,
        rows,
        columns,
    })
}

fn load_csv(path: &Path, window: RowWindow) -> AppResult<SheetData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    let mut columns = 0;
    for (idx, record) in reader.records().enumerate() {
        if window.end.is_some_and(|end| idx >= end) {
            break;
        }
        let record = record?;
        if !window.contains(idx) {
            continue;
        }
        columns = columns.max(record.len());

        let row = RawRow::new(idx + 1, record.iter().map(cells::from_csv_field).collect());
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(SheetData {
        sheet_name: path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default(),
        rows,
        columns,
    })
}
