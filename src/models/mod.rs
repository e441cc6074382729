//! Core data models for FinanceFlow
//!
//! A ledger is nothing more than an ordered list of [`Transaction`] values.

pub mod transaction;

pub use transaction::{Transaction, TransactionKind};
