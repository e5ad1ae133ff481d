// Re-export shared test utilities from src/test_utils.rs
// These are the core functions used by most tests
pub use productos_importer::test_utils::{
    range_from_cells, sheet_from_cells, source_of, string_row, test_defaults, RecordingStore,
};

use calamine::Data;
use productos_importer::workbook::SheetTable;

/// A sheet with the standard required header row and the given data rows.
#[allow(dead_code)]
pub fn product_sheet(name: &str, rows: &[Vec<Data>]) -> SheetTable {
    let mut cells = vec![string_row(&["codigo_qr", "nombre", "cantidad"])];
    cells.extend(rows.iter().cloned());
    sheet_from_cells(name, &cells)
}

/// One valid product data row.
#[allow(dead_code)]
pub fn valid_row(codigo_qr: &str, nombre: &str, cantidad: i64) -> Vec<Data> {
    vec![
        Data::String(codigo_qr.to_string()),
        Data::String(nombre.to_string()),
        Data::Int(cantidad),
    ]
}
