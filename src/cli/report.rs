//! CLI commands for the read-only views

use chrono::NaiveDateTime;

use crate::aggregation::TransactionQuery;
use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{Category, TimeWindow};
use crate::reports::{AnalyticsReport, DashboardReport, TransactionListReport};
use crate::store::TransactionStore;

/// Print the dashboard
pub fn handle_dashboard_command(store: &TransactionStore, settings: &Settings) -> TrackerResult<()> {
    let report = DashboardReport::generate(
        store.snapshot(),
        settings.recent_limit,
        settings.top_categories_limit,
    );
    print!("{}", report.format_terminal(&settings.currency_code));
    Ok(())
}

/// Print the filtered transaction list
pub fn handle_transactions_command(
    store: &TransactionStore,
    settings: &Settings,
    now: NaiveDateTime,
    search: Option<String>,
    category: Option<String>,
) -> TrackerResult<()> {
    let mut query = TransactionQuery::new();
    if let Some(search) = search {
        query = query.search(search);
    }
    if let Some(category) = category {
        query = query.category(Category::parse(&category)?);
    }

    let report = TransactionListReport::generate(store.snapshot(), query, now);
    print!("{}", report.format_terminal(&settings.currency_code));
    Ok(())
}

/// Print analytics for a window, falling back to the configured default
pub fn handle_analytics_command(
    store: &TransactionStore,
    settings: &Settings,
    now: NaiveDateTime,
    window: Option<String>,
) -> TrackerResult<()> {
    let window = match window {
        Some(w) => w.parse::<TimeWindow>()?,
        None => settings.default_window,
    };

    let report = AnalyticsReport::generate(store.snapshot(), window, now);
    print!("{}", report.format_terminal(&settings.currency_code));
    Ok(())
}
