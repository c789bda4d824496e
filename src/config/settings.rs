//! User settings for the expense tracker
//!
//! Display preferences and view limits. Settings never carry transaction
//! or budget data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::TrackerPaths;
use crate::display::format::DEFAULT_CURRENCY;
use crate::error::TrackerError;
use crate::models::TimeWindow;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO 4217 code used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// Number of transactions shown under "Recent Transactions"
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Number of categories shown under "Top Spending Categories"
    #[serde(default = "default_top_categories_limit")]
    pub top_categories_limit: usize,

    /// Analytics window used when none is given
    #[serde(default)]
    pub default_window: TimeWindow,

    /// Whether a fresh session starts with the demonstration data
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_recent_limit() -> usize {
    5
}

fn default_top_categories_limit() -> usize {
    5
}

fn default_seed_sample_data() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_code: default_currency(),
            recent_limit: default_recent_limit(),
            top_categories_limit: default_top_categories_limit(),
            default_window: TimeWindow::default(),
            seed_sample_data: default_seed_sample_data(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            debug!(path = %settings_path.display(), "settings loaded");
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            debug!(path = %settings_path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TrackerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        debug!(path = %settings_path.display(), "settings saved");
        Ok(())
    }
}
