//! Storage layer for FinanceFlow
//!
//! The ledger is persisted as a single CSV file that is rewritten atomically
//! after every change.

pub mod file_io;
pub mod records;

pub use file_io::write_csv_atomic;
pub use records::{LoadOutcome, LoadReport, RecordStore, LEDGER_HEADER};
