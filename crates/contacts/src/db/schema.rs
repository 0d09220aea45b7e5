//! Database schema definitions and initialization

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

use contacts_core::{Error, Result};

/// Database schema as SQL string - executed once on open.
///
/// Phone-number uniqueness is enforced here, server-side; the gateway
/// only classifies the resulting constraint violation.
pub(crate) const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone_number TEXT UNIQUE NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contacts_phone_number ON contacts(phone_number);
";

/// Create `SQLite` connection pool
pub(crate) async fn create_connection_pool(db_url: &str) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .connect(db_url)
        .await
        .map_err(|e| Error::database_error(format!("Failed to connect to database: {e}")))
}

/// Initialize database schema
pub(crate) async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| Error::database_error(format!("Failed to initialize schema: {e}")))
}
