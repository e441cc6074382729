//! Service layer for FinanceFlow
//!
//! Business logic over the stored ledger: adding entries and computing
//! balances, summaries and the sorted history.

pub mod clock;
pub mod ledger;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ledger::{AddOutcome, HistoryEntry, Ledger, Summary};
