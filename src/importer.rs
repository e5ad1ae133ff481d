use std::fmt;

use crate::config::RowDefaults;
use crate::db::ProductStore;
use crate::product::{ProductRow, SheetColumns};
use crate::workbook::SpreadsheetSource;

/// Outcome of one import run, returned to the caller instead of only being
/// written to the console.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub sheets_skipped: usize,
    pub rows_inserted: usize,
    pub rows_failed: usize,
    pub failures: Vec<String>,
}

impl ImportSummary {
    /// Format the collected failures into a report suitable for the errors
    /// log file.
    pub fn failure_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=============================\n");
        report.push_str(&format!(
            "Generated at: {}\n\n",
            crate::utils::get_utc_iso_datetime()
        ));
        report.push_str(&format!(
            "Sheets skipped: {}\nRows inserted: {}\nRows failed: {}\n\n",
            self.sheets_skipped, self.rows_inserted, self.rows_failed
        ));

        for failure in &self.failures {
            report.push_str(&format!("  - {}\n", failure));
        }

        report
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "📊 {} row(s) inserted, {} row(s) failed, {} sheet(s) skipped.",
            self.rows_inserted, self.rows_failed, self.sheets_skipped
        )
    }
}

/// Iterate every sheet and row of the source, inserting one product per row.
///
/// Sheets whose headers do not cover the required columns are skipped with a
/// diagnostic. Row failures (building or inserting) are logged with the
/// row's business key and processing continues; this function never aborts
/// the run.
pub async fn run_import<S: ProductStore + Send>(
    store: &mut S,
    source: &SpreadsheetSource,
    defaults: &RowDefaults,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for sheet in &source.sheets {
        println!("🔄 Processing sheet: {}", sheet.name);

        let Some(columns) = SheetColumns::resolve(&sheet.headers) else {
            eprintln!(
                "❌ Sheet '{}' is missing required columns {:?}, skipping it.",
                sheet.name,
                SheetColumns::REQUIRED
            );
            summary.sheets_skipped += 1;
            continue;
        };

        for (row_index, cells) in sheet.rows.iter().enumerate() {
            // Header occupies row 1 of the sheet
            let row_number = row_index + 2;

            match ProductRow::build(cells, &columns, defaults) {
                Ok(row) => match store.insert_product(&row).await {
                    Ok(()) => {
                        println!("✅ Product {} inserted.", row.codigo_qr);
                        summary.rows_inserted += 1;
                    }
                    Err(e) => {
                        eprintln!("❌ Error inserting product {}: {}", row.codigo_qr, e);
                        summary.rows_failed += 1;
                        summary.failures.push(insert_failure_message(
                            &sheet.name,
                            row_number,
                            &row,
                            &e,
                        ));
                    }
                },
                Err(e) => {
                    let key = columns.business_key(cells);
                    eprintln!(
                        "❌ Skipping row {} of sheet '{}' (codigo_qr {}): {}",
                        row_number, sheet.name, key, e
                    );
                    summary.rows_failed += 1;
                    summary.failures.push(format!(
                        "sheet '{}' row {} (codigo_qr {}): {}",
                        sheet.name, row_number, key, e
                    ));
                }
            }
        }
    }

    summary
}

fn insert_failure_message(
    sheet_name: &str,
    row_number: usize,
    row: &ProductRow,
    error: &anyhow::Error,
) -> String {
    // Include the full row so the log is enough to reconstruct the insert
    let row_data = serde_json::to_string(row)
        .unwrap_or_else(|_| "[error serializing row data]".to_string());

    format!(
        "sheet '{}' row {} (codigo_qr {}): {}\n    Row data: {}",
        sheet_name, row_number, row.codigo_qr, error, row_data
    )
}
