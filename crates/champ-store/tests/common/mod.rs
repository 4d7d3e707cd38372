#![allow(dead_code)]

use champ_core::TransactionRecord;
use champ_store::errors::connection_unavailable;
use champ_store::{
    ConnectionHandle, ConnectionProvider, SharedConnectionProvider, TransactionRepository,
};

/// Repository over a fresh in-memory database with the store schema
pub fn setup_repo() -> TransactionRepository<SharedConnectionProvider> {
    let provider = SharedConnectionProvider::in_memory().unwrap();
    champ_store::db::create_schema_with(&provider).unwrap();
    TransactionRepository::new(provider)
}

/// Provider whose database is never reachable
pub struct UnreachableProvider;

impl ConnectionProvider for UnreachableProvider {
    fn get_connection(&self) -> champ_store::Result<ConnectionHandle<'_>> {
        Err(connection_unavailable("connection refused"))
    }
}

pub fn record(id: i32, transaction_number: &str, cart_number: &str) -> TransactionRecord {
    TransactionRecord::new(
        id,
        transaction_number,
        cart_number,
        format!("Room {}", id),
        12.5 * f64::from(id),
        "2024-05-01 09:30:00",
        "PENDING",
    )
}

/// Insert users and the cart items they own
pub fn seed_cart_owners<P: ConnectionProvider>(
    repo: &TransactionRepository<P>,
    items: &[(&str, &str)],
) {
    let conn = repo.provider().get_connection().unwrap();
    for (_, user_number) in items {
        conn.execute(
            "INSERT OR IGNORE INTO champ_user (user_number) VALUES (?1)",
            [user_number],
        )
        .unwrap();
    }
    for (cart_number, user_number) in items {
        conn.execute(
            "INSERT INTO cart_item (cart_number, user_number) VALUES (?1, ?2)",
            [cart_number, user_number],
        )
        .unwrap();
    }
}

pub fn sorted_by_id(mut records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    records.sort_by_key(|r| r.id);
    records
}

pub fn assert_same_record(actual: &TransactionRecord, expected: &TransactionRecord) {
    assert_eq!(actual.id, expected.id);
    assert_eq!(actual.transaction_number, expected.transaction_number);
    assert_eq!(actual.cart_number, expected.cart_number);
    assert_eq!(actual.room, expected.room);
    assert!(
        (actual.grand_total - expected.grand_total).abs() < 1e-6,
        "grand_total {} != {}",
        actual.grand_total,
        expected.grand_total
    );
    assert_eq!(actual.date_created, expected.date_created);
    assert_eq!(actual.status, expected.status);
}
