//! User settings for FinanceFlow
//!
//! Manages display preferences. Settings live in an optional JSON file next to
//! the ledger; a missing file simply yields the defaults.

use serde::Deserialize;

use super::paths::FlowPaths;
use crate::error::FlowError;

/// User settings for FinanceFlow
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether to color balances and amounts in the terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            color: default_color(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FlowPaths) -> Result<Self, FlowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FlowError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FlowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Settings are optional; nothing is written back
            Ok(Settings::default())
        }
    }
}
