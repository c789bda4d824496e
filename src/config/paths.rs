//! Path management for the expense tracker
//!
//! Only the settings file lives on disk; transaction data is held in memory.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_CONFIG_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories::ProjectDirs`

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::TrackerError;

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_TRACKER_CONFIG_DIR";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform has no
    /// home directory to derive one from.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("com", "expense-tracker", "expense-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    TrackerError::Config("Could not determine configuration directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            TrackerError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}
