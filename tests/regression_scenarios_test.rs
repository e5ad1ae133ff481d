//! End-to-end scenarios over the whole import loop.

use calamine::Data;
use productos_importer::run_import;

mod common;
use common::*;

#[tokio::test]
async fn test_two_sheet_scenario_valid_and_skipped() {
    // SheetA: the three required columns and three valid rows.
    // SheetB: missing cantidad, so it must be skipped entirely.
    let sheet_a = product_sheet(
        "SheetA",
        &[
            valid_row("QR-1", "Tornillos", 3),
            valid_row("QR-2", "Tuercas", 5),
            valid_row("QR-3", "Clavos", 8),
        ],
    );
    let sheet_b = sheet_from_cells(
        "SheetB",
        &[
            string_row(&["codigo_qr", "nombre"]),
            string_row(&["QR-9", "Arandelas"]),
        ],
    );
    let source = source_of(vec![sheet_a, sheet_b]);

    let mut store = RecordingStore::default();
    let summary = run_import(&mut store, &source, &test_defaults()).await;

    assert_eq!(summary.rows_inserted, 3);
    assert_eq!(summary.sheets_skipped, 1);
    assert_eq!(summary.rows_failed, 0);
    assert_eq!(store.inserted.len(), 3);
    assert!(store.inserted.iter().all(|row| row.codigo_qr != "QR-9"));
}

#[tokio::test]
async fn test_mixed_failures_keep_counts_consistent() {
    let sheet = product_sheet(
        "Hoja1",
        &[
            valid_row("QR-1", "Tornillos", 3),
            // build failure: cantidad not numeric
            vec![
                Data::String("QR-2".to_string()),
                Data::String("Tuercas".to_string()),
                Data::String("muchas".to_string()),
            ],
            // build failure: missing nombre
            vec![
                Data::String("QR-3".to_string()),
                Data::Empty,
                Data::Int(4),
            ],
            // insert failure (rejected by the store)
            valid_row("QR-4", "Clavos", 8),
            valid_row("QR-5", "Arandelas", 2),
        ],
    );
    let source = source_of(vec![sheet]);

    let mut store = RecordingStore::rejecting(&["QR-4"]);
    let summary = run_import(&mut store, &source, &test_defaults()).await;

    assert_eq!(summary.rows_inserted, 2);
    assert_eq!(summary.rows_failed, 3);
    assert_eq!(summary.failures.len(), 3);
    assert_eq!(store.inserted.len(), 2);

    // Every failure names its business key
    assert!(summary.failures.iter().any(|f| f.contains("QR-2")));
    assert!(summary.failures.iter().any(|f| f.contains("QR-3")));
    assert!(summary.failures.iter().any(|f| f.contains("QR-4")));
}

#[tokio::test]
async fn test_empty_source_produces_an_empty_summary() {
    let source = source_of(vec![]);

    let mut store = RecordingStore::default();
    let summary = run_import(&mut store, &source, &test_defaults()).await;

    assert_eq!(summary.rows_inserted, 0);
    assert_eq!(summary.rows_failed, 0);
    assert_eq!(summary.sheets_skipped, 0);
}

#[tokio::test]
async fn test_rows_are_processed_in_source_order() {
    let sheet = product_sheet(
        "Hoja1",
        &[
            valid_row("QR-1", "Tornillos", 3),
            valid_row("QR-2", "Tuercas", 5),
            valid_row("QR-3", "Clavos", 8),
        ],
    );
    let source = source_of(vec![sheet]);

    let mut store = RecordingStore::default();
    run_import(&mut store, &source, &test_defaults()).await;

    let keys: Vec<&str> = store
        .inserted
        .iter()
        .map(|row| row.codigo_qr.as_str())
        .collect();
    assert_eq!(keys, ["QR-1", "QR-2", "QR-3"]);
}
