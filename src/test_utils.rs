// Test utilities available to both unit and integration tests
// Only compiled when testing

use anyhow::Result;
use async_trait::async_trait;
use calamine::{Data, Range};
use chrono::NaiveDate;

use crate::config::RowDefaults;
use crate::db::ProductStore;
use crate::product::ProductRow;
use crate::workbook::{SheetTable, SpreadsheetSource};

/// Row defaults pinned to a fixed timestamp so assertions are stable.
#[allow(dead_code)]
pub fn test_defaults() -> RowDefaults {
    let run_start = NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    RowDefaults::at(run_start)
}

/// A data row of string cells.
#[allow(dead_code)]
pub fn string_row(values: &[&str]) -> Vec<Data> {
    values
        .iter()
        .map(|v| Data::String(v.to_string()))
        .collect()
}

/// Build a calamine cell range from rows of cells (first row = header).
#[allow(dead_code)]
pub fn range_from_cells(cells: &[Vec<Data>]) -> Range<Data> {
    let cols = cells.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
    let mut range = Range::new((0, 0), (cells.len().max(1) as u32 - 1, cols - 1));
    for (r, row) in cells.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            range.set_value((r as u32, c as u32), cell.clone());
        }
    }
    range
}

/// Build a sheet through the same range-materialization path the real
/// loader uses.
#[allow(dead_code)]
pub fn sheet_from_cells(name: &str, cells: &[Vec<Data>]) -> SheetTable {
    SheetTable::from_range(name, &range_from_cells(cells))
}

/// Wrap sheets into an in-memory spreadsheet source.
#[allow(dead_code)]
pub fn source_of(sheets: Vec<SheetTable>) -> SpreadsheetSource {
    SpreadsheetSource {
        path: "<in-memory>".to_string(),
        sheets,
    }
}

/// A [`ProductStore`] that records inserted rows, optionally rejecting
/// configured business keys to exercise the row-scoped failure path.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inserted: Vec<ProductRow>,
    pub reject_keys: Vec<String>,
}

impl RecordingStore {
    #[allow(dead_code)]
    pub fn rejecting(keys: &[&str]) -> Self {
        RecordingStore {
            inserted: Vec::new(),
            reject_keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn insert_product(&mut self, row: &ProductRow) -> Result<()> {
        if self.reject_keys.contains(&row.codigo_qr) {
            anyhow::bail!("Duplicate entry '{}' for key 'codigo_qr'", row.codigo_qr);
        }
        self.inserted.push(row.clone());
        Ok(())
    }
}
