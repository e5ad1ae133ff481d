use anyhow::Result;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::utils::normalize_string;

/// One sheet of the source file, materialized with named columns.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Data>>,
}

/// The whole spreadsheet file, loaded eagerly before any row is processed.
///
/// Resource use scales with file size; inputs are assumed small (manual
/// desktop uploads).
#[derive(Debug)]
pub struct SpreadsheetSource {
    pub path: String,
    pub sheets: Vec<SheetTable>,
}

impl SpreadsheetSource {
    /// Open the file and enumerate every sheet.
    ///
    /// Any failure to open or parse is fatal for the run; the caller
    /// terminates the process.
    pub fn load(path: &str) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let sheet_names = workbook.sheet_names().to_vec();
        let mut sheets = Vec::with_capacity(sheet_names.len());

        for name in sheet_names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| anyhow::anyhow!("Error reading sheet '{}': {}", name, e))?;
            sheets.push(SheetTable::from_range(&name, &range));
        }

        Ok(SpreadsheetSource {
            path: path.to_string(),
            sheets,
        })
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

impl SheetTable {
    /// Materialize a cell range as a table: first row becomes the
    /// normalized header set, blank rows are dropped.
    pub fn from_range(name: &str, range: &Range<Data>) -> Self {
        let mut headers: Vec<String> = Vec::new();
        let mut rows: Vec<Vec<Data>> = Vec::new();

        for (row_index, row) in range.rows().enumerate() {
            if row_index == 0 {
                headers = row
                    .iter()
                    .map(|cell| normalize_string(&cell.to_string()))
                    .collect();
                continue;
            }

            // Skip empty rows
            let is_empty_row = row.iter().all(|cell| match cell {
                Data::Empty => true,
                Data::String(s) => s.trim().is_empty(),
                Data::Error(_) => true,
                _ => false,
            });
            if is_empty_row {
                continue;
            }

            rows.push(row.to_vec());
        }

        SheetTable {
            name: name.to_string(),
            headers,
            rows,
        }
    }
}
