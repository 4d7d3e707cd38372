//! Explicit result of a write-path statement
//!
//! Write operations never raise. They report what happened and leave the
//! decision about what counts as an error to the caller.

use crate::errors::ChampError;

/// What a single insert or update statement did
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum WriteOutcome {
    /// Exactly one row changed
    Applied { rows_affected: usize },

    /// The statement ran and changed nothing
    NoRowsMatched,

    /// The statement ran and changed more than one row. The changes are kept.
    MultipleRowsAffected { rows_affected: usize },

    /// The statement could not be executed
    Failed { reason: String },
}

impl WriteOutcome {
    /// Classify an affected-row count reported by the database
    pub fn from_rows_affected(rows_affected: usize) -> Self {
        match rows_affected {
            0 => WriteOutcome::NoRowsMatched,
            1 => WriteOutcome::Applied { rows_affected },
            _ => WriteOutcome::MultipleRowsAffected { rows_affected },
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, WriteOutcome::Applied { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WriteOutcome::Failed { .. })
    }

    /// Rows changed by the statement; zero when it failed
    pub fn rows_affected(&self) -> usize {
        match self {
            WriteOutcome::Applied { rows_affected }
            | WriteOutcome::MultipleRowsAffected { rows_affected } => *rows_affected,
            WriteOutcome::NoRowsMatched | WriteOutcome::Failed { .. } => 0,
        }
    }

    /// Fail-fast view of the outcome
    ///
    /// `key` names the row the statement targeted and is used in the error.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` for no match, `MultipleRowsAffected` for a
    /// multiplicity violation and `DataAccess` when the statement failed.
    pub fn into_result(self, key: &str) -> Result<usize, ChampError> {
        match self {
            WriteOutcome::Applied { rows_affected } => Ok(rows_affected),
            WriteOutcome::NoRowsMatched => Err(ChampError::RecordNotFound {
                transaction_number: key.to_string(),
            }),
            WriteOutcome::MultipleRowsAffected { rows_affected } => {
                Err(ChampError::MultipleRowsAffected {
                    transaction_number: key.to_string(),
                    rows_affected,
                })
            }
            WriteOutcome::Failed { reason } => Err(ChampError::DataAccess { message: reason }),
        }
    }
}
