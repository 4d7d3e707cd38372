pub mod outcome;
pub mod transaction;

pub use outcome::WriteOutcome;
pub use transaction::TransactionRecord;
