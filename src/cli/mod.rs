//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_analytics_command, handle_dashboard_command, handle_transactions_command};
pub use transaction::handle_add_command;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::settings::Settings;
use crate::store::TransactionStore;

/// Parse a reference time given as `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD`
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    if let Ok(datetime) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    parse_date(s).map_err(|_| format!("invalid time '{}' (expected YYYY-MM-DDTHH:MM:SS)", s))
}

/// Parse a calendar date given as `YYYY-MM-DD`, at midnight
pub fn parse_date(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}' (expected YYYY-MM-DD)", s.trim()))
}

/// Build the starting store for a session
pub fn initial_store(settings: &Settings, empty: bool) -> TransactionStore {
    if empty || !settings.seed_sample_data {
        TransactionStore::new()
    } else {
        TransactionStore::with_sample_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime() {
        let dt = parse_datetime("2023-07-20T12:30:00").unwrap();
        assert_eq!(dt.to_string(), "2023-07-20 12:30:00");

        let dt = parse_datetime("2023-07-20").unwrap();
        assert_eq!(dt.to_string(), "2023-07-20 00:00:00");

        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2023-02-30").is_err());
        assert_eq!(parse_date(" 2023-07-01 ").unwrap().to_string(), "2023-07-01 00:00:00");
    }

    #[test]
    fn test_initial_store() {
        let mut settings = Settings::default();
        assert_eq!(initial_store(&settings, false).len(), 8);
        assert!(initial_store(&settings, true).is_empty());

        settings.seed_sample_data = false;
        assert!(initial_store(&settings, false).is_empty());
    }
}
