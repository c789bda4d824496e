//! Reports module for the expense tracker
//!
//! Each report is generated from a store snapshot into plain data and can
//! render itself for the terminal.

pub mod analytics;
pub mod budget_overview;
pub mod dashboard;
pub mod transaction_list;

pub use analytics::{AnalyticsReport, BudgetProgress};
pub use budget_overview::{BudgetOverviewReport, CategoryProgress};
pub use dashboard::DashboardReport;
pub use transaction_list::{PeriodSection, TransactionListReport};

use crate::aggregation::{rank, CategoryTotals};
use crate::models::{Category, Money};

/// A category's spending and its share of all spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: Money,
    /// Percentage of the total, 0 when nothing was spent
    pub share: f64,
}

/// All categories with spending, largest first, with their shares
pub(crate) fn breakdown(totals: &CategoryTotals) -> Vec<CategoryShare> {
    let total = totals.total();
    rank(totals, totals.len())
        .into_iter()
        .map(|entry| CategoryShare {
            category: entry.category,
            amount: entry.amount,
            share: if total.is_positive() {
                entry.amount.cents() as f64 / total.cents() as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
