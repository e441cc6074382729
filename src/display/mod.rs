//! Display formatting for terminal output
//!
//! Turns the structured numbers produced by the ledger into text. Colors are
//! applied here and nowhere else.

pub mod report;
pub mod summary;
pub mod transaction;

pub use report::{format_money, DisplayOptions};
pub use summary::format_summary;
pub use transaction::{format_history, format_history_row, NO_TRANSACTIONS};
