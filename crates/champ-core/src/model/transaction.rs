//! Transaction record domain model
//!
//! One persisted purchase transaction. All seven fields are always populated;
//! `date_created` and `status` are carried as opaque text and never parsed.

use serde::{Deserialize, Serialize};

/// A purchase transaction as stored in the `transactions` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Surrogate key, supplied by the caller on insert
    pub id: i32,

    /// Business identifier; the lookup key for status updates
    pub transaction_number: String,

    /// Reference to the cart aggregate this transaction paid for
    pub cart_number: String,

    /// Free-form location label
    pub room: String,

    /// Monetary total
    pub grand_total: f64,

    /// Creation timestamp as opaque text
    pub date_created: String,

    /// Free-form state label
    pub status: String,
}

impl TransactionRecord {
    /// Create a new transaction record
    pub fn new(
        id: i32,
        transaction_number: impl Into<String>,
        cart_number: impl Into<String>,
        room: impl Into<String>,
        grand_total: f64,
        date_created: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id,
            transaction_number: transaction_number.into(),
            cart_number: cart_number.into(),
            room: room.into(),
            grand_total,
            date_created: date_created.into(),
            status: status.into(),
        }
    }

    /// Copy of this record with a different status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_populates_all_fields() {
        let record = TransactionRecord::new(
            7,
            "T-0007",
            "C-001",
            "Room 12",
            42.5,
            "2024-03-01 10:15:00",
            "PENDING",
        );

        assert_eq!(record.id, 7);
        assert_eq!(record.transaction_number, "T-0007");
        assert_eq!(record.cart_number, "C-001");
        assert_eq!(record.room, "Room 12");
        assert_eq!(record.grand_total, 42.5);
        assert_eq!(record.date_created, "2024-03-01 10:15:00");
        assert_eq!(record.status, "PENDING");
    }

    #[test]
    fn test_date_created_is_not_interpreted() {
        let record = TransactionRecord::new(1, "T", "C", "R", 0.0, "not a date", "x");
        assert_eq!(record.date_created, "not a date");
    }

    #[test]
    fn test_with_status_leaves_other_fields() {
        let record = TransactionRecord::new(1, "T", "C", "R", 3.0, "d", "PENDING");
        let paid = record.clone().with_status("PAID");

        assert_eq!(paid.status, "PAID");
        assert_eq!(paid.transaction_number, record.transaction_number);
        assert_eq!(paid.grand_total, record.grand_total);
    }
}
