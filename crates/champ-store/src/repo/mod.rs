//! Repository layer mapping transaction records to SQLite rows

pub mod transaction_repo;

pub use transaction_repo::TransactionRepository;
