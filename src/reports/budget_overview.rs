//! Budget Overview Report
//!
//! Shows every category with its spending, monthly target, usage and status.

use tracing::debug;

use crate::aggregation::{budget_status, category_totals, percentage, BudgetStatus};
use crate::display::format_currency;
use crate::display::report::{format_bar, format_percentage, separator, status_marker};
use crate::models::{Budget, Category, Money};
use crate::store::Snapshot;

/// Spending against target for a single category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    pub category: Category,
    /// Total spent in this category
    pub spent: Money,
    /// Monthly target, `None` when absent or zero
    pub budget: Option<Money>,
    /// Share of the target used, clamped to 0..=100
    pub percentage: f64,
    pub status: BudgetStatus,
}

impl CategoryProgress {
    /// Compute progress for `category` given what was spent in it
    pub fn compute(category: Category, spent: Money, budget: &Budget) -> Self {
        let target = budget.target(category);
        let pct = percentage(spent, target);
        Self {
            category,
            spent,
            budget: target.is_positive().then_some(target),
            percentage: pct,
            status: budget_status(pct),
        }
    }

    /// Budget column text, "No budget set" when there is no target
    pub fn budget_display(&self, currency: &str) -> String {
        match self.budget {
            Some(target) => format_currency(target, currency),
            None => "No budget set".to_string(),
        }
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// One row per category, in category order
    pub rows: Vec<CategoryProgress>,
    pub total_spent: Money,
    pub total_budget: Money,
    /// Overall usage of the combined budget
    pub overall_percentage: f64,
    pub overall_status: BudgetStatus,
}

impl BudgetOverviewReport {
    /// Generate the overview for the store's current state
    pub fn generate(snapshot: Snapshot<'_>) -> Self {
        let totals = category_totals(snapshot.transactions);
        let rows: Vec<CategoryProgress> = Category::ALL
            .iter()
            .map(|&category| CategoryProgress::compute(category, totals.get(category), snapshot.budget))
            .collect();

        let total_spent = totals.total();
        let total_budget = snapshot.budget.total();
        let overall_percentage = percentage(total_spent, total_budget);

        debug!(
            categories = rows.len(),
            spent = %total_spent,
            budget = %total_budget,
            "budget overview generated"
        );

        Self {
            rows,
            total_spent,
            total_budget,
            overall_percentage,
            overall_status: budget_status(overall_percentage),
        }
    }

    /// Categories at or past the danger threshold
    pub fn danger_categories(&self) -> Vec<&CategoryProgress> {
        self.rows
            .iter()
            .filter(|r| r.status == BudgetStatus::Danger)
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&"=".repeat(78));
        output.push('\n');

        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>7}  {:<12} {}\n",
            "Category", "Spent", "Budget", "Used", "", "Status"
        ));
        output.push_str(&separator(78));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<16} {:>14} {:>14} {:>7}  {:<12} {}\n",
                row.category.label(),
                format_currency(row.spent, currency),
                row.budget_display(currency),
                format_percentage(row.percentage),
                format_bar(row.percentage, 100.0, 12),
                status_marker(row.status),
            ));
        }

        output.push_str(&separator(78));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14} {:>14} {:>7}  {:<12} {}\n",
            "TOTAL",
            format_currency(self.total_spent, currency),
            format_currency(self.total_budget, currency),
            format_percentage(self.overall_percentage),
            format_bar(self.overall_percentage, 100.0, 12),
            status_marker(self.overall_status),
        ));

        output
    }
}
