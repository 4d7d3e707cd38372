//! Champ Core - domain model, error facility and logging for the transaction store
//!
//! This crate provides:
//! - The `TransactionRecord` value type read and written by the store
//! - `WriteOutcome`, the explicit result of write-path statements
//! - The structured error facility (`TxError`, `TxErrorKind`) and the
//!   `ChampError` domain taxonomy
//! - The logging facility (`init`, `log_op_start!`, `log_op_end!`, `log_op_error!`)

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ChampError, Result, TxError, TxErrorKind};
pub use model::{TransactionRecord, WriteOutcome};

// Schema constants referenced by the logging macros
pub use champ_core_types::schema;
