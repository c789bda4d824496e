//! Aggregation engine
//!
//! Pure functions turning a transaction list and a budget into the derived
//! values every view displays: category totals, usage percentages, status
//! tags, windowed subsets, rankings, period groups and trend series.
//!
//! Nothing here caches or mutates. Every function is linear in the number of
//! transactions and is meant to be called again on each query with the
//! store's current snapshot.

pub mod grouping;
pub mod status;
pub mod totals;
pub mod trend;
pub mod window;

pub use grouping::{
    categories_in_use, group_by_period, recent, sort_newest_first, PeriodGroup, TransactionQuery,
};
pub use status::{budget_status, percentage, BudgetStatus};
pub use totals::{category_totals, rank, total_amount, CategoryTotal, CategoryTotals};
pub use trend::{spending_trend, trend_change, TrendPoint};
pub use window::filter_by_window;
