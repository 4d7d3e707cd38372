//! Error handling for champ-store
//!
//! Wraps champ-core TxError with store-specific helpers

use champ_core::errors::{TxError, TxErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using TxError
pub type Result<T> = std::result::Result<T, TxError>;

/// Create a database error from rusqlite::Error
///
/// Constraint failures (duplicate ids, unknown cart owners) keep their own kind.
pub fn from_rusqlite(err: rusqlite::Error) -> TxError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            TxErrorKind::ConstraintViolation
        }
        _ => TxErrorKind::Persistence,
    };
    TxError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// The store schema could not be created
pub fn schema_error(err: rusqlite::Error) -> TxError {
    TxError::new(TxErrorKind::Persistence)
        .with_op("create_schema")
        .with_message(format!("Schema creation failed: {}", err))
}

/// The provider could not hand out a connection
pub fn connection_unavailable(reason: impl Into<String>) -> TxError {
    TxError::new(TxErrorKind::ConnectionUnavailable)
        .with_op("get_connection")
        .with_message(reason)
}

/// Wrap any read-path failure into the single data-access kind
pub fn read_failure(op: &str, err: TxError) -> TxError {
    TxError::new(TxErrorKind::DataAccess)
        .with_op(op.to_string())
        .with_message(format!(
            "Failed to retrieve transactions: {}",
            err.message()
        ))
        .with_source(err)
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> TxError {
    TxError::new(TxErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(reason)
}
