//! Canonical logging macros
//!
//! Every store operation owns exactly one start event and one terminal event
//! (`end` or `end_error`).

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use champ_core::log_op_start;
/// log_op_start!("find_all");
/// log_op_start!("update_transaction_status", transaction_number = "T-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use champ_core::log_op_end;
/// log_op_end!("find_all", duration_ms = 3);
/// log_op_end!("find_all", duration_ms = 3, row_count = 12);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `err` is anything convertible into `TxError`.
///
/// # Example
///
/// ```
/// # use champ_core::log_op_error;
/// # use champ_core::errors::ChampError;
/// let err = ChampError::DataAccess { message: "no such table".to_string() };
/// log_op_error!("find_all", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let tx_err: $crate::errors::TxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?tx_err.kind(),
            err.code = tx_err.code(),
            error = %tx_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let tx_err: $crate::errors::TxError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?tx_err.kind(),
            err.code = tx_err.code(),
            error = %tx_err,
            $($field)*
        );
    }};
}
