//! Connection providers
//!
//! The repository never opens connections itself. It asks a
//! `ConnectionProvider` for one per operation and drops it when the
//! statement completes.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::config::StoreConfig;
use crate::db;
use crate::errors::{connection_unavailable, Result};

/// A connection lent to exactly one operation
pub enum ConnectionHandle<'a> {
    /// Freshly opened; closed on drop
    Owned(Connection),
    /// Exclusive access to a shared connection until drop
    Shared(MutexGuard<'a, Connection>),
}

impl Deref for ConnectionHandle<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        match self {
            ConnectionHandle::Owned(conn) => conn,
            ConnectionHandle::Shared(guard) => &**guard,
        }
    }
}

impl DerefMut for ConnectionHandle<'_> {
    fn deref_mut(&mut self) -> &mut Connection {
        match self {
            ConnectionHandle::Owned(conn) => conn,
            ConnectionHandle::Shared(guard) => &mut **guard,
        }
    }
}

/// Supplies a ready-to-use connection per call
pub trait ConnectionProvider {
    /// # Errors
    ///
    /// Returns `ConnectionUnavailable` when no connection can be produced.
    fn get_connection(&self) -> Result<ConnectionHandle<'_>>;
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for &P {
    fn get_connection(&self) -> Result<ConnectionHandle<'_>> {
        (**self).get_connection()
    }
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for Arc<P> {
    fn get_connection(&self) -> Result<ConnectionHandle<'_>> {
        (**self).get_connection()
    }
}

/// Opens a new configured connection to a database file on every call
#[derive(Debug, Clone)]
pub struct FileConnectionProvider {
    config: StoreConfig,
}

impl FileConnectionProvider {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

impl ConnectionProvider for FileConnectionProvider {
    fn get_connection(&self) -> Result<ConnectionHandle<'_>> {
        let conn = db::open(&self.config.database_path)?;
        db::configure(&conn, &self.config)?;
        Ok(ConnectionHandle::Owned(conn))
    }
}

/// Serializes access to a single connection
///
/// Used for in-memory databases, where every new connection would be a new
/// empty database.
///
/// Not re-entrant: drop a handle from `get_connection` before calling the
/// repository on the same thread, or the call blocks forever.
#[derive(Debug)]
pub struct SharedConnectionProvider {
    conn: Mutex<Connection>,
}

impl SharedConnectionProvider {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Fresh in-memory database configured with default settings
    pub fn in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        db::configure(&conn, &StoreConfig::default())?;
        Ok(Self::new(conn))
    }
}

impl ConnectionProvider for SharedConnectionProvider {
    fn get_connection(&self) -> Result<ConnectionHandle<'_>> {
        self.conn
            .lock()
            .map(ConnectionHandle::Shared)
            .map_err(|_| connection_unavailable("shared connection lock poisoned"))
    }
}
