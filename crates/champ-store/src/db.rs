//! Database connection management
//!
//! Opens SQLite connections, applies the pragmas named in `StoreConfig` and
//! creates the store schema

use crate::config::StoreConfig;
use crate::errors::{connection_unavailable, from_rusqlite, schema_error, Result};
use crate::provider::ConnectionProvider;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|e| {
        connection_unavailable(format!("unable to open {}: {}", path.display(), e))
    })
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(|e| connection_unavailable(e.to_string()))
}

/// Configure a connection from the store settings
pub fn configure(conn: &Connection, config: &StoreConfig) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", config.foreign_keys)
        .map_err(from_rusqlite)?;

    conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
        .map_err(from_rusqlite)?;

    // In-memory databases report "memory" whatever was requested
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", &config.journal_mode, |row| {
            row.get(0)
        })
        .map_err(from_rusqlite)?;
    tracing::debug!(journal_mode = %mode, "connection configured");

    Ok(())
}

const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Create the store tables and the legacy `"transaction"` view
///
/// Every statement is `IF NOT EXISTS`, so running it on an existing
/// database changes nothing.
pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL).map_err(schema_error)?;
    tracing::debug!("schema ready");
    Ok(())
}

/// Create the schema through a provider's connection
pub fn create_schema_with<P: ConnectionProvider + ?Sized>(provider: &P) -> Result<()> {
    let conn = provider.get_connection()?;
    create_schema(&conn)
}
