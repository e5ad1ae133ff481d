use productos_importer::config::{DbConfig, RowDefaults, EXCEL_FILE_PATH};
use productos_importer::utils::write_error_to_log;
use productos_importer::workbook::SpreadsheetSource;
use productos_importer::{db, importer, ERRORS_LOG_FILE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = DbConfig::from_constants();

    // Connection is attempted before the spreadsheet is opened; if it
    // fails, the file is never read.
    println!("🔌 Connecting to the database...");
    let mut conn = match db::connect(&config).await {
        Ok(conn) => {
            println!("✅ Connected to MySQL database '{}'.", config.database);
            conn
        }
        Err(e) => {
            eprintln!("❌ Error connecting to the database: {e}");
            std::process::exit(1);
        }
    };

    println!("📁 Reading spreadsheet file: {EXCEL_FILE_PATH}...");
    let source = match SpreadsheetSource::load(EXCEL_FILE_PATH) {
        Ok(source) => {
            println!("✅ Loaded sheets: {:?}", source.sheet_names());
            source
        }
        Err(e) => {
            eprintln!("❌ Error reading the spreadsheet file: {e}");
            std::process::exit(1);
        }
    };

    // One timestamp for the whole run; every inserted row shares it
    let defaults = RowDefaults::now();

    let summary = importer::run_import(&mut conn, &source, &defaults).await;

    if !summary.failures.is_empty() {
        write_error_to_log("Import Failure Report", &summary.failure_report());
        eprintln!("❌ Check {ERRORS_LOG_FILE} for details.");
    }

    println!("{summary}");

    db::close(conn).await;

    println!("✅ Import finished.");
}
