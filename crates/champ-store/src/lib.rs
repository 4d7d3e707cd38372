//! Champ Store - SQLite persistence for transaction records
//!
//! Provides:
//! - The `ConnectionProvider` seam and its file-backed and shared implementations
//! - Connection helpers, schema creation and `StoreConfig`
//! - `TransactionRepository`, the transaction store accessor

pub mod config;
pub mod db;
pub mod errors;
pub mod provider;
pub mod repo;

// Re-export key types
pub use crate::config::StoreConfig;
pub use errors::Result;
pub use provider::{
    ConnectionHandle, ConnectionProvider, FileConnectionProvider, SharedConnectionProvider,
};
pub use repo::TransactionRepository;
