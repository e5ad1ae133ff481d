use anyhow::Result;
use async_trait::async_trait;
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

use crate::config::DbConfig;
use crate::product::ProductRow;

/// Parameterized insert for the `productos` table. Values are always bound,
/// never concatenated into the statement.
pub const PRODUCT_INSERT_SQL: &str = "\
INSERT INTO productos (\
 codigo_qr, nombre, cantidad, estado, fecha_creacion, url_img, nfc_id, id_categoria\
) VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

/// Destination for built product rows.
///
/// The import loop only needs "insert one row, tell me if it failed", which
/// keeps the loop testable without a live MySQL server.
#[async_trait]
pub trait ProductStore {
    async fn insert_product(&mut self, row: &ProductRow) -> Result<()>;
}

/// Open the single connection used for the whole run.
///
/// A failure here is fatal: the caller reports it and exits with a non-zero
/// status before the spreadsheet is ever opened.
pub async fn connect(config: &DbConfig) -> Result<MySqlConnection> {
    let conn = MySqlConnection::connect(&config.connection_url()).await?;
    Ok(conn)
}

#[async_trait]
impl ProductStore for MySqlConnection {
    async fn insert_product(&mut self, row: &ProductRow) -> Result<()> {
        sqlx::query(PRODUCT_INSERT_SQL)
            .bind(&row.codigo_qr)
            .bind(&row.nombre)
            .bind(row.cantidad)
            .bind(&row.estado)
            .bind(row.fecha_creacion)
            .bind(&row.url_img)
            .bind(row.nfc_id.as_deref())
            .bind(row.id_categoria)
            .execute(&mut *self)
            .await?;
        Ok(())
    }
}

/// Release the connection at the end of the run. Best-effort: a close error
/// is logged and the process still exits normally.
pub async fn close(conn: MySqlConnection) {
    match conn.close().await {
        Ok(()) => println!("✅ Database connection closed."),
        Err(e) => eprintln!("❌ Error closing the database connection: {e}"),
    }
}
