//! Transaction store accessor
//!
//! Four statements against the `transactions` table, one connection per call.
//! Reads fail fast with a single data-access error. Writes never raise; they
//! report a `WriteOutcome` and log anything that went wrong.

use std::time::Instant;

use champ_core::model::{TransactionRecord, WriteOutcome};
use champ_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Params, Row};

use crate::errors::{from_rusqlite, read_failure, Result};
use crate::provider::ConnectionProvider;

const SELECT_ALL: &str = "SELECT t.id, t.transaction_number, t.cart_number, t.room, \
     t.grand_total, t.date_created, t.status \
     FROM transactions t";

// No user filter: returns every transaction once per matching cart item.
const SELECT_JOINED_ON_CART_OWNER: &str = "SELECT t.id, t.transaction_number, t.cart_number, \
     t.room, t.grand_total, t.date_created, t.status \
     FROM transactions t, cart_item c, champ_user u \
     WHERE t.cart_number = c.cart_number AND c.user_number = u.user_number";

const SELECT_BY_USER_NUMBER: &str = "SELECT t.id, t.transaction_number, t.cart_number, t.room, \
     t.grand_total, t.date_created, t.status \
     FROM transactions t \
     WHERE EXISTS ( \
         SELECT 1 FROM cart_item c \
         JOIN champ_user u ON c.user_number = u.user_number \
         WHERE c.cart_number = t.cart_number AND u.user_number = ?1)";

const INSERT_TRANSACTION: &str = "INSERT INTO transactions \
     (id, transaction_number, cart_number, room, grand_total, date_created, status) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";

const UPDATE_TRANSACTION_STATUS: &str =
    "UPDATE transactions SET status = ?1 WHERE transaction_number = ?2";

const COLUMN_ID: usize = 0;
const COLUMN_TRANSACTION_NUMBER: usize = 1;
const COLUMN_CART_NUMBER: usize = 2;
const COLUMN_ROOM: usize = 3;
const COLUMN_GRAND_TOTAL: usize = 4;
const COLUMN_DATE_CREATED: usize = 5;
const COLUMN_STATUS: usize = 6;

/// Reads and writes transaction records through an injected provider
pub struct TransactionRepository<P> {
    provider: P,
}

impl<P: ConnectionProvider> TransactionRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Every transaction, in whatever order the engine returns them
    ///
    /// # Errors
    ///
    /// Any failure is reported as `DataAccess`; no partial results.
    pub fn find_all(&self) -> Result<Vec<TransactionRecord>> {
        self.query_records("find_all", SELECT_ALL, rusqlite::params![])
    }

    /// Transactions joined to the users owning their cart items
    ///
    /// Binds no user: the join has no per-user filter, so the result holds
    /// every transaction that has at least one owned cart item, repeated once
    /// per such item. Use [`Self::find_by_user_number`] to filter.
    ///
    /// # Errors
    ///
    /// Any failure is reported as `DataAccess`; no partial results.
    pub fn find_by_user_id(&self) -> Result<Vec<TransactionRecord>> {
        self.query_records(
            "find_by_user_id",
            SELECT_JOINED_ON_CART_OWNER,
            rusqlite::params![],
        )
    }

    /// Transactions whose cart holds an item owned by `user_number`, once each
    ///
    /// # Errors
    ///
    /// Any failure is reported as `DataAccess`; no partial results.
    pub fn find_by_user_number(&self, user_number: &str) -> Result<Vec<TransactionRecord>> {
        self.query_records(
            "find_by_user_number",
            SELECT_BY_USER_NUMBER,
            rusqlite::params![user_number],
        )
    }

    /// Set the status of every row carrying `transaction_number`
    ///
    /// Never raises. More than one matching row is logged as an error,
    /// reported as `MultipleRowsAffected`, and those rows stay updated.
    pub fn update_transaction_status(
        &self,
        transaction_number: &str,
        status: &str,
    ) -> WriteOutcome {
        self.execute_write(
            "update_transaction_status",
            transaction_number,
            UPDATE_TRANSACTION_STATUS,
            rusqlite::params![status, transaction_number],
        )
    }

    /// Insert one record with its caller-supplied id
    ///
    /// Never raises; a key conflict or connection failure is `Failed`.
    pub fn insert_transaction(&self, record: &TransactionRecord) -> WriteOutcome {
        self.execute_write(
            "insert_transaction",
            &record.transaction_number,
            INSERT_TRANSACTION,
            rusqlite::params![
                record.id,
                record.transaction_number,
                record.cart_number,
                record.room,
                record.grand_total,
                record.date_created,
                record.status,
            ],
        )
    }

    fn query_records<A: Params>(
        &self,
        op: &'static str,
        sql: &str,
        params: A,
    ) -> Result<Vec<TransactionRecord>> {
        let started = Instant::now();
        log_op_start!(op);

        let result = self
            .provider
            .get_connection()
            .and_then(|conn| {
                let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
                let records = stmt
                    .query_map(params, map_transaction_row)
                    .map_err(from_rusqlite)?
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(from_rusqlite)?;
                Ok(records)
            })
            .map_err(|e| read_failure(op, e));

        match &result {
            Ok(records) => {
                log_op_end!(op, duration_ms = elapsed_ms(started), row_count = records.len());
            }
            Err(err) => {
                log_op_error!(op, err.clone(), duration_ms = elapsed_ms(started));
            }
        }
        result
    }

    fn execute_write<A: Params>(
        &self,
        op: &'static str,
        transaction_number: &str,
        sql: &str,
        params: A,
    ) -> WriteOutcome {
        let started = Instant::now();
        log_op_start!(op, transaction_number = transaction_number);

        let executed = self
            .provider
            .get_connection()
            .and_then(|conn| conn.execute(sql, params).map_err(from_rusqlite));

        match executed {
            Ok(rows_affected) => {
                let outcome = WriteOutcome::from_rows_affected(rows_affected);
                match &outcome {
                    WriteOutcome::MultipleRowsAffected { rows_affected } => tracing::error!(
                        op = op,
                        transaction_number = transaction_number,
                        rows_affected = *rows_affected,
                        "number of rows affected is greater than 1"
                    ),
                    WriteOutcome::NoRowsMatched => tracing::debug!(
                        op = op,
                        transaction_number = transaction_number,
                        "no rows matched"
                    ),
                    _ => {}
                }
                log_op_end!(
                    op,
                    duration_ms = elapsed_ms(started),
                    transaction_number = transaction_number,
                    rows_affected = rows_affected
                );
                outcome
            }
            Err(err) => {
                let reason = err.to_string();
                log_op_error!(
                    op,
                    err,
                    duration_ms = elapsed_ms(started),
                    transaction_number = transaction_number
                );
                WriteOutcome::Failed { reason }
            }
        }
    }
}

fn map_transaction_row(row: &Row<'_>) -> rusqlite::Result<TransactionRecord> {
    Ok(TransactionRecord {
        id: row.get(COLUMN_ID)?,
        transaction_number: row.get(COLUMN_TRANSACTION_NUMBER)?,
        cart_number: row.get(COLUMN_CART_NUMBER)?,
        room: row.get(COLUMN_ROOM)?,
        grand_total: row.get(COLUMN_GRAND_TOTAL)?,
        date_created: row.get(COLUMN_DATE_CREATED)?,
        status: row.get(COLUMN_STATUS)?,
    })
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
