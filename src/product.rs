use calamine::Data;
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::config::RowDefaults;

/// Failure while turning a spreadsheet row into a [`ProductRow`].
///
/// Row-scoped: the import loop logs these and moves on to the next row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("missing value for required column '{column}'")]
    MissingValue { column: &'static str },

    #[error("cannot convert '{value}' to an integer for column 'cantidad'")]
    InvalidCantidad { value: String },
}

/// Resolved positions of the required columns inside one sheet's header row.
///
/// Resolution happens once per sheet; a sheet whose header set does not
/// cover the required columns is skipped entirely. Extra columns are
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct SheetColumns {
    codigo_qr: usize,
    nombre: usize,
    cantidad: usize,
}

impl SheetColumns {
    pub const REQUIRED: [&'static str; 3] = ["codigo_qr", "nombre", "cantidad"];

    pub fn resolve(headers: &[String]) -> Option<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        Some(SheetColumns {
            codigo_qr: position("codigo_qr")?,
            nombre: position("nombre")?,
            cantidad: position("cantidad")?,
        })
    }

    /// Best-effort business key for diagnostics on rows that failed to
    /// build. Never fails; falls back to a placeholder.
    pub fn business_key(&self, cells: &[Data]) -> String {
        match cells.get(self.codigo_qr) {
            Some(Data::Empty) | None => "<sin codigo_qr>".to_string(),
            Some(cell) => cell_to_text(cell).unwrap_or_else(|| "<sin codigo_qr>".to_string()),
        }
    }
}

/// One product record, fully typed, built immediately before insertion and
/// never kept beyond the insert call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRow {
    pub codigo_qr: String,
    pub nombre: String,
    pub cantidad: i64,
    pub estado: String,
    pub fecha_creacion: NaiveDateTime,
    pub url_img: String,
    pub nfc_id: Option<String>,
    pub id_categoria: i32,
}

impl ProductRow {
    /// Build a typed record from one data row, applying the run defaults.
    pub fn build(
        cells: &[Data],
        columns: &SheetColumns,
        defaults: &RowDefaults,
    ) -> Result<Self, RowError> {
        let codigo_qr = required_text(cells, columns.codigo_qr, "codigo_qr")?;
        let nombre = required_text(cells, columns.nombre, "nombre")?;
        let cantidad = cantidad_as_integer(cells.get(columns.cantidad).unwrap_or(&Data::Empty))?;

        Ok(ProductRow {
            codigo_qr,
            nombre,
            cantidad,
            estado: defaults.estado.clone(),
            fecha_creacion: defaults.fecha_creacion,
            url_img: defaults.url_img.clone(),
            nfc_id: defaults.nfc_id.clone(),
            id_categoria: defaults.id_categoria,
        })
    }
}

fn required_text(
    cells: &[Data],
    index: usize,
    column: &'static str,
) -> Result<String, RowError> {
    cells
        .get(index)
        .and_then(cell_to_text)
        .ok_or(RowError::MissingValue { column })
}

/// Stringify a cell, treating blanks and error cells as absent. Numeric
/// cells holding whole values render without a trailing `.0` (Excel stores
/// digit-only codes as floats).
fn cell_to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            if f.fract().abs() < f64::EPSILON && f.abs() <= i64::MAX as f64 {
                Some(format!("{}", *f as i64))
            } else {
                Some(f.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

/// Coerce `cantidad` the way the source data demands an integer: integer
/// cells pass through, float cells truncate toward zero, strings must
/// parse as an integer. Everything else is a row failure.
fn cantidad_as_integer(cell: &Data) -> Result<i64, RowError> {
    match cell {
        Data::Int(i) => Ok(*i),
        Data::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        Data::String(s) => s.trim().parse::<i64>().map_err(|_| RowError::InvalidCantidad {
            value: s.trim().to_string(),
        }),
        other => Err(RowError::InvalidCantidad {
            value: other.to_string(),
        }),
    }
}
