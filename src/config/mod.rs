//! Configuration module for FinanceFlow
//!
//! This module provides configuration management including:
//! - Ledger and settings path resolution
//! - User display settings persistence

pub mod paths;
pub mod settings;

pub use paths::FlowPaths;
pub use settings::Settings;
