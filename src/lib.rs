pub mod config;
pub mod db;
pub mod importer;
pub mod product;
pub mod utils;
pub mod workbook;

// Test utilities - only compiled when testing or with test feature
// #[cfg(test)] alone doesn't work for integration tests (they're external crates)
// The feature flag makes it available to integration tests via dev-dependencies
#[cfg(any(test, feature = "test"))]
pub mod test_utils;

pub use config::{DbConfig, RowDefaults};
pub use importer::{run_import, ImportSummary};
pub use product::{ProductRow, RowError, SheetColumns};
pub use workbook::{SheetTable, SpreadsheetSource};

pub const ERRORS_LOG_FILE: &str = "errors.log";
