//! FinanceFlow - Terminal-based personal income and expense ledger
//!
//! This library provides the core functionality for the FinanceFlow
//! application: a ledger of income and expense entries persisted to a CSV
//! file, with balance, summary and history reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: The transaction record
//! - `storage`: CSV file storage with atomic writes
//! - `services`: Ledger operations (add, balance, summary, history)
//! - `display`: Terminal formatting
//! - `shell`: Interactive numbered menu
//! - `cli`: One-shot subcommands
//!
//! # Example
//!
//! ```rust,no_run
//! use finance_flow::models::TransactionKind;
//! use finance_flow::services::Ledger;
//! use finance_flow::storage::RecordStore;
//!
//! let (mut ledger, _outcome) = Ledger::open(RecordStore::new("transactions.csv"));
//! ledger.add(TransactionKind::Expense, "Groceries", 42.10)?;
//! println!("Balance: {:.2}", ledger.calculate_balance());
//! # Ok::<(), finance_flow::FlowError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::FlowError;
