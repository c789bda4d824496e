//! Time-window filtering

use chrono::NaiveDateTime;

use crate::models::{TimeWindow, Transaction};

/// Transactions dated on or after the window's cutoff relative to `now`
///
/// Input order is preserved.
pub fn filter_by_window<'a, I>(
    transactions: I,
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<&'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let cutoff = window.cutoff(now);
    transactions
        .into_iter()
        .filter(|t| t.date >= cutoff)
        .collect()
}
