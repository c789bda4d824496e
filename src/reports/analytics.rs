//! Analytics Report
//!
//! Spending for a recent time window: category breakdown, budget progress
//! and a bucketed trend compared against the previous window.

use chrono::NaiveDateTime;
use tracing::debug;

use super::{breakdown, CategoryShare};
use crate::aggregation::{
    category_totals, filter_by_window, percentage, rank, spending_trend, trend_change,
    CategoryTotal, TrendPoint,
};
use crate::display::format_currency;
use crate::display::report::{format_bar, format_change, format_percentage, separator};
use crate::models::{Category, Money, TimeWindow};
use crate::store::Snapshot;

/// Budget usage of one category within the window
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: Category,
    pub spent: Money,
    /// Monthly target, zero when absent
    pub budget: Money,
    pub percentage: f64,
}

/// Analytics Report
#[derive(Debug, Clone)]
pub struct AnalyticsReport {
    pub window: TimeWindow,
    /// Reference time the window ends at
    pub now: NaiveDateTime,
    pub total_spent: Money,
    pub transaction_count: usize,
    /// Categories ranked by spending with their share of the window total
    pub breakdown: Vec<CategoryShare>,
    pub highest_category: Option<CategoryTotal>,
    /// Sorted by percentage, highest first
    pub budget_progress: Vec<BudgetProgress>,
    pub trend: Vec<TrendPoint>,
    /// Percent change against the previous window of the same kind
    pub trend_change: Option<f64>,
}

impl AnalyticsReport {
    /// Generate analytics for the window ending at `now`
    pub fn generate(snapshot: Snapshot<'_>, window: TimeWindow, now: NaiveDateTime) -> Self {
        let windowed = filter_by_window(snapshot.transactions, window, now);
        let totals = category_totals(windowed.iter().copied());
        let total_spent = totals.total();

        let highest_category = rank(&totals, 1).into_iter().next();

        let mut budget_progress: Vec<BudgetProgress> = totals
            .iter()
            .map(|entry| {
                let budget = snapshot.budget.target(entry.category);
                BudgetProgress {
                    category: entry.category,
                    spent: entry.amount,
                    budget,
                    percentage: percentage(entry.amount, budget),
                }
            })
            .collect();
        budget_progress.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

        let trend = spending_trend(snapshot.transactions, window, now);
        let change = trend_change(snapshot.transactions, window, now);

        debug!(
            window = window.as_str(),
            transactions = windowed.len(),
            spent = %total_spent,
            "analytics generated"
        );

        Self {
            window,
            now,
            total_spent,
            transaction_count: windowed.len(),
            breakdown: breakdown(&totals),
            highest_category,
            budget_progress,
            trend,
            trend_change: change,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Analytics - {}\n", self.window.description()));
        output.push_str(&"=".repeat(70));
        output.push('\n');
        output.push_str(&format!(
            "Total Spent:  {} ({} transactions)\n",
            format_currency(self.total_spent, currency),
            self.transaction_count
        ));
        match &self.highest_category {
            Some(top) => output.push_str(&format!(
                "Top Category: {} ({})\n",
                top.category.label(),
                format_currency(top.amount, currency)
            )),
            None => output.push_str("Top Category: None\n"),
        }
        match self.trend_change {
            Some(change) => output.push_str(&format!(
                "Change:       {} vs previous {}\n",
                format_change(change),
                self.window
            )),
            None => output.push_str("Change:       n/a\n"),
        }

        output.push_str("\nSpending by Category\n");
        output.push_str(&separator(70));
        output.push('\n');
        if self.breakdown.is_empty() {
            output.push_str("No spending in this period.\n");
        }
        for share in &self.breakdown {
            output.push_str(&format!(
                "{:<16} {:>14} {} {:>6}\n",
                share.category.label(),
                format_currency(share.amount, currency),
                format_bar(share.share, 100.0, 24),
                format_percentage(share.share),
            ));
        }

        if !self.budget_progress.is_empty() {
            output.push_str("\nBudget Progress\n");
            output.push_str(&separator(70));
            output.push('\n');
            for progress in &self.budget_progress {
                output.push_str(&format!(
                    "{:<16} {:>14} / {:<14} {:>6}\n",
                    progress.category.label(),
                    format_currency(progress.spent, currency),
                    format_currency(progress.budget, currency),
                    format_percentage(progress.percentage),
                ));
            }
        }

        output.push_str(&format!("\n{}\n", self.window.trend_description()));
        output.push_str(&separator(70));
        output.push('\n');
        let peak = self
            .trend
            .iter()
            .map(|p| p.amount.to_decimal())
            .fold(0.0, f64::max);
        for point in &self.trend {
            output.push_str(&format!(
                "{:<8} {} {:>14}\n",
                point.label,
                format_bar(point.amount.to_decimal(), peak, 30),
                format_currency(point.amount, currency),
            ));
        }

        output
    }
}
