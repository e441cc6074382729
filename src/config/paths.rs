//! Path management for FinanceFlow
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCE_FLOW_DIR` environment variable (if set)
//! 2. The current working directory
//!
//! The ledger file itself can still be overridden from the command line.

use std::path::{Path, PathBuf};

use crate::error::FlowError;

/// Default name of the ledger file
pub const LEDGER_FILE_NAME: &str = "transactions.csv";

/// Default name of the settings file
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Manages all paths used by FinanceFlow
#[derive(Debug, Clone)]
pub struct FlowPaths {
    /// Base directory holding the ledger and settings
    base_dir: PathBuf,
    /// Explicit ledger file, overriding `base_dir/transactions.csv`
    ledger_override: Option<PathBuf>,
}

impl FlowPaths {
    /// Create a new FlowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither `FINANCE_FLOW_DIR` is set nor the current
    /// directory can be determined.
    pub fn new() -> Result<Self, FlowError> {
        let base_dir = match std::env::var("FINANCE_FLOW_DIR") {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                FlowError::Config(format!("Could not determine current directory: {}", e))
            })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create FlowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ledger_override: None,
        }
    }

    /// Use an explicit ledger file instead of the default location
    pub fn with_ledger_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_override = Some(path.into());
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the ledger CSV file
    pub fn ledger_file(&self) -> PathBuf {
        self.ledger_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(LEDGER_FILE_NAME))
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }
}
